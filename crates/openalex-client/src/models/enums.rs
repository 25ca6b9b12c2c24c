//! Enumerated field values.
//!
//! Every enum has a catch-all `Unknown` variant so that values added by the
//! service later do not fail decoding.

use serde::{Deserialize, Serialize};

/// Work type, using the Crossref type vocabulary plus the newer OpenAlex types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkType {
    Article,
    Book,
    BookChapter,
    BookPart,
    BookSection,
    BookSeries,
    BookSet,
    BookTrack,
    Component,
    Dataset,
    Dissertation,
    EditedBook,
    Editorial,
    Erratum,
    Grant,
    Journal,
    JournalArticle,
    JournalIssue,
    JournalVolume,
    Letter,
    Monograph,
    Other,
    Paratext,
    PeerReview,
    PostedContent,
    Preprint,
    Proceedings,
    ProceedingsArticle,
    ProceedingsSeries,
    ReferenceBook,
    ReferenceEntry,
    Report,
    ReportSeries,
    Review,
    Standard,
    StandardSeries,
    #[serde(other)]
    Unknown,
}

/// Which version of a work a host venue serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VersionType {
    PublishedVersion,
    AcceptedVersion,
    SubmittedVersion,
    #[serde(other)]
    Unknown,
}

/// Relationship between two associated institutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstitutionalRelationship {
    Parent,
    Child,
    Related,
    #[serde(other)]
    Unknown,
}

/// Kind of organisation an institution is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstitutionType {
    Education,
    Healthcare,
    Company,
    Archive,
    Nonprofit,
    Government,
    Facility,
    Other,
    #[serde(other)]
    Unknown,
}

/// Open access colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenAccessStatus {
    Gold,
    Green,
    Hybrid,
    Bronze,
    Diamond,
    Closed,
    #[serde(other)]
    Unknown,
}

impl OpenAccessStatus {
    /// Check if the work can be read without a subscription.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed | Self::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_type_kebab_case() {
        let t: WorkType = serde_json::from_str("\"journal-article\"").unwrap();
        assert_eq!(t, WorkType::JournalArticle);
        assert_eq!(serde_json::to_string(&WorkType::BookChapter).unwrap(), "\"book-chapter\"");
    }

    #[test]
    fn test_unknown_values_do_not_fail() {
        let t: WorkType = serde_json::from_str("\"hologram\"").unwrap();
        assert_eq!(t, WorkType::Unknown);
        let v: VersionType = serde_json::from_str("\"draftVersion\"").unwrap();
        assert_eq!(v, VersionType::Unknown);
    }

    #[test]
    fn test_open_access_status() {
        assert!(OpenAccessStatus::Gold.is_open());
        assert!(!OpenAccessStatus::Closed.is_open());
    }
}
