//! Work data model matching the OpenAlex `/works` schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{null_as_default, optional_year};
use super::{
    Biblio, CountsByYear, DehydratedAuthor, DehydratedConcept, DehydratedInstitution, HostVenue,
    Ids, Mesh, OpenAccess, WorkType,
};
use crate::id::strip_namespace;

/// A scholarly work (article, book, dataset, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    /// OpenAlex id URL, e.g. `https://openalex.org/W2741809807`.
    pub id: String,

    #[serde(default)]
    pub ids: Option<Ids>,

    #[serde(default)]
    pub doi: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "optional_year")]
    pub publication_year: Option<i32>,

    /// ISO date (YYYY-MM-DD).
    #[serde(default)]
    pub publication_date: Option<String>,

    #[serde(default)]
    pub updated_date: Option<String>,

    #[serde(default)]
    pub created_date: Option<String>,

    #[serde(default, rename = "type")]
    pub work_type: Option<WorkType>,

    #[serde(default)]
    pub host_venue: Option<HostVenue>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub alternate_host_venues: Vec<HostVenue>,

    #[serde(default)]
    pub open_access: Option<OpenAccess>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub authorships: Vec<Authorship>,

    #[serde(default)]
    pub cited_by_count: Option<u64>,

    #[serde(default)]
    pub is_retracted: Option<bool>,

    #[serde(default)]
    pub is_paratext: Option<bool>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub concepts: Vec<DehydratedConcept>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub mesh: Vec<Mesh>,

    /// Works this work cites, as id URLs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub referenced_works: Vec<String>,

    /// Algorithmically related works, as id URLs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_works: Vec<String>,

    /// Abstract as `word -> positions`.
    #[serde(default)]
    pub abstract_inverted_index: Option<BTreeMap<String, Vec<usize>>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub counts_by_year: Vec<CountsByYear>,

    /// Filtered `/works` URL listing the works that cite this one.
    #[serde(default)]
    pub cited_by_api_url: Option<String>,

    #[serde(default)]
    pub biblio: Option<Biblio>,
}

impl Work {
    /// Id without the canonical URL prefix (`W2741809807`).
    #[must_use]
    pub fn short_id(&self) -> &str {
        strip_namespace(&self.id)
    }

    /// Get the title, falling back to the display name, then "Untitled".
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().or(self.display_name.as_deref()).unwrap_or("Untitled")
    }

    /// DOI without resolver prefix, from either `doi` or `ids.doi`.
    #[must_use]
    pub fn doi_id(&self) -> Option<&str> {
        match self.doi.as_deref() {
            Some(doi) => Some(doi.strip_prefix("https://doi.org/").unwrap_or(doi)),
            None => self.ids.as_ref()?.doi_id(),
        }
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> u64 {
        self.cited_by_count.unwrap_or(0)
    }

    #[must_use]
    pub fn is_open_access(&self) -> bool {
        self.open_access.as_ref().is_some_and(|oa| oa.is_oa)
    }

    /// Author display names in authorship order.
    #[must_use]
    pub fn author_names(&self) -> Vec<&str> {
        self.authorships
            .iter()
            .filter_map(|a| a.author.as_ref()?.display_name.as_deref())
            .collect()
    }

    /// Reassemble the plain-text abstract from the inverted index.
    #[must_use]
    pub fn abstract_text(&self) -> Option<String> {
        let index = self.abstract_inverted_index.as_ref()?;

        let mut words: Vec<(usize, &str)> = index
            .iter()
            .flat_map(|(word, positions)| positions.iter().map(move |&p| (p, word.as_str())))
            .collect();
        if words.is_empty() {
            return None;
        }
        words.sort_by_key(|(pos, _)| *pos);

        Some(words.into_iter().map(|(_, w)| w).collect::<Vec<_>>().join(" "))
    }
}

/// One author's contribution to a work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorship {
    /// `first`, `middle` or `last`.
    #[serde(default)]
    pub author_position: Option<String>,

    #[serde(default)]
    pub author: Option<DehydratedAuthor>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub institutions: Vec<DehydratedInstitution>,

    #[serde(default)]
    pub raw_affiliation_string: Option<String>,
}
