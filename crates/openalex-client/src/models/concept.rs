//! Concept data model matching the OpenAlex `/concepts` schema.

use serde::{Deserialize, Serialize};

use super::common::null_as_default;
use super::{CountsByYear, Ids, Reference};

/// A node of the OpenAlex concept hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    /// OpenAlex id URL, e.g. `https://openalex.org/C71924100`.
    pub id: String,

    #[serde(default)]
    pub wikidata: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    /// Depth in the hierarchy, 0 for root concepts.
    #[serde(default)]
    pub level: Option<u8>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub works_count: Option<u64>,

    #[serde(default)]
    pub cited_by_count: Option<u64>,

    #[serde(default)]
    pub ids: Option<Ids>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub image_thumbnail_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ancestors: Vec<DehydratedConcept>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub related_concepts: Vec<DehydratedConcept>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub counts_by_year: Vec<CountsByYear>,

    #[serde(default)]
    pub works_api_url: Option<String>,

    #[serde(default)]
    pub updated_date: Option<String>,

    #[serde(default)]
    pub created_date: Option<String>,
}

impl Concept {
    /// Wikidata QID without the wiki URL prefix.
    #[must_use]
    pub fn wikidata_id(&self) -> Option<&str> {
        let w = self.wikidata.as_deref()?;
        Some(w.strip_prefix("https://www.wikidata.org/wiki/").unwrap_or(w))
    }
}

/// Concept as embedded in works, ancestors and `x_concepts` lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DehydratedConcept {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub wikidata: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub level: Option<u8>,

    /// Relevance score where the concept is attached to another record.
    #[serde(default)]
    pub score: Option<f64>,
}

impl Reference for DehydratedConcept {
    fn reference_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
