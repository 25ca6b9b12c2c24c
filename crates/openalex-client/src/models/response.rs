//! List response envelope shared by filter, search and cursor requests.

use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// `{ "meta": {...}, "results": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default)]
    pub meta: Meta,

    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<T>,
}

/// Paging metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Total number of matching records.
    #[serde(default)]
    pub count: Option<u64>,

    #[serde(default)]
    pub db_response_time_ms: Option<u64>,

    #[serde(default)]
    pub page: Option<u64>,

    #[serde(default)]
    pub per_page: Option<u64>,

    /// Token for the next page; `null` once the result set is exhausted.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl Meta {
    /// The next cursor, treating an empty string the same as `null`.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref().filter(|c| !c.is_empty())
    }
}
