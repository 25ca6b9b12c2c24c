//! Venue (journal, repository, conference) data model matching the OpenAlex `/venues` schema.

use serde::{Deserialize, Serialize};

use super::common::{null_as_default, one_or_many};
use super::{CountsByYear, DehydratedConcept, Ids, Reference, VersionType};

/// A publication venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    /// OpenAlex id URL, e.g. `https://openalex.org/V1983995261`.
    pub id: String,

    /// Linking ISSN.
    #[serde(default)]
    pub issn_l: Option<String>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub issn: Vec<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub publisher: Option<String>,

    /// `journal`, `repository`, `conference`, ...
    #[serde(default, rename = "type")]
    pub venue_type: Option<String>,

    #[serde(default)]
    pub homepage_url: Option<String>,

    #[serde(default)]
    pub is_oa: Option<bool>,

    #[serde(default)]
    pub is_in_doaj: Option<bool>,

    #[serde(default)]
    pub works_count: Option<u64>,

    #[serde(default)]
    pub cited_by_count: Option<u64>,

    #[serde(default)]
    pub ids: Option<Ids>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub x_concepts: Vec<DehydratedConcept>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub counts_by_year: Vec<CountsByYear>,

    #[serde(default)]
    pub works_api_url: Option<String>,

    #[serde(default)]
    pub updated_date: Option<String>,

    #[serde(default)]
    pub created_date: Option<String>,
}

/// Venue as embedded in other records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DehydratedVenue {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub issn_l: Option<String>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub issn: Vec<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub publisher: Option<String>,
}

impl Reference for DehydratedVenue {
    fn reference_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Where a work is hosted: a dehydrated venue plus location details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostVenue {
    #[serde(flatten)]
    pub venue: DehydratedVenue,

    #[serde(default, rename = "type")]
    pub venue_type: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub is_oa: Option<bool>,

    #[serde(default)]
    pub version: Option<VersionType>,

    #[serde(default)]
    pub license: Option<String>,
}

impl Reference for HostVenue {
    fn reference_id(&self) -> Option<&str> {
        self.venue.id.as_deref()
    }
}
