//! Author data model matching the OpenAlex `/authors` schema.

use serde::{Deserialize, Serialize};

use super::common::null_as_default;
use super::{CountsByYear, DehydratedConcept, DehydratedInstitution, Ids, Reference};

/// A disambiguated author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// OpenAlex id URL, e.g. `https://openalex.org/A5023888391`.
    pub id: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub orcid: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name_alternatives: Vec<String>,

    #[serde(default)]
    pub works_count: Option<u64>,

    #[serde(default)]
    pub cited_by_count: Option<u64>,

    #[serde(default)]
    pub ids: Option<Ids>,

    #[serde(default)]
    pub last_known_institution: Option<DehydratedInstitution>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub x_concepts: Vec<DehydratedConcept>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub counts_by_year: Vec<CountsByYear>,

    /// Filtered `/works` URL listing this author's works.
    #[serde(default)]
    pub works_api_url: Option<String>,

    #[serde(default)]
    pub updated_date: Option<String>,

    #[serde(default)]
    pub created_date: Option<String>,
}

impl Author {
    /// ORCID without the `https://orcid.org/` prefix.
    #[must_use]
    pub fn orcid_id(&self) -> Option<&str> {
        orcid_id(self.orcid.as_deref())
    }
}

/// Author as embedded in a work's authorships.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DehydratedAuthor {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub orcid: Option<String>,
}

impl DehydratedAuthor {
    #[must_use]
    pub fn orcid_id(&self) -> Option<&str> {
        orcid_id(self.orcid.as_deref())
    }
}

impl Reference for DehydratedAuthor {
    fn reference_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

fn orcid_id(orcid: Option<&str>) -> Option<&str> {
    orcid.map(|o| o.strip_prefix("https://orcid.org/").unwrap_or(o))
}
