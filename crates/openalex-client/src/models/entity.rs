//! Entity types, the traits shared by every record, and the run-time tagged union.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Author, Concept, Institution, Venue, Work};
use crate::error::{ClientError, ClientResult};
use crate::id;

/// The five kinds of OpenAlex entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Work,
    Author,
    Institution,
    Venue,
    Concept,
}

/// Per-type routing data, indexed by `EntityType as usize`.
#[derive(Clone, Copy)]
struct TypeInfo {
    name: &'static str,
    path: &'static str,
    prefix: char,
    works_filter: Option<&'static str>,
}

const TYPE_TABLE: [TypeInfo; 5] = [
    TypeInfo { name: "work", path: "works", prefix: 'W', works_filter: None },
    TypeInfo { name: "author", path: "authors", prefix: 'A', works_filter: Some("author.id") },
    TypeInfo {
        name: "institution",
        path: "institutions",
        prefix: 'I',
        works_filter: Some("institutions.id"),
    },
    TypeInfo { name: "venue", path: "venues", prefix: 'V', works_filter: Some("host_venue.id") },
    TypeInfo { name: "concept", path: "concepts", prefix: 'C', works_filter: Some("concept.id") },
];

impl EntityType {
    /// Every entity type, in table order.
    pub const ALL: [Self; 5] = [Self::Work, Self::Author, Self::Institution, Self::Venue, Self::Concept];

    const fn info(self) -> TypeInfo {
        TYPE_TABLE[self as usize]
    }

    /// Singular lower-case name (`work`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// URL path segment (`works`).
    #[must_use]
    pub const fn path(self) -> &'static str {
        self.info().path
    }

    /// Leading character of canonical ids (`W`).
    #[must_use]
    pub const fn prefix(self) -> char {
        self.info().prefix
    }

    /// Filter key selecting the works associated with an entity of this type.
    ///
    /// Works have no such filter; use `cites:` through the cited-by URL instead.
    #[must_use]
    pub const fn works_filter(self) -> Option<&'static str> {
        self.info().works_filter
    }

    /// Look up the entity type for an id prefix character (ASCII case-insensitive).
    #[must_use]
    pub fn from_prefix(prefix: char) -> Option<Self> {
        let upper = prefix.to_ascii_uppercase();
        Self::ALL.into_iter().find(|t| t.prefix() == upper)
    }

    /// Decode a JSON object into the record for this type.
    pub fn decode(self, value: Value) -> ClientResult<AnyEntity> {
        Ok(match self {
            Self::Work => AnyEntity::Work(Box::new(serde_json::from_value(value)?)),
            Self::Author => AnyEntity::Author(serde_json::from_value(value)?),
            Self::Institution => AnyEntity::Institution(serde_json::from_value(value)?),
            Self::Venue => AnyEntity::Venue(serde_json::from_value(value)?),
            Self::Concept => AnyEntity::Concept(serde_json::from_value(value)?),
        })
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityType {
    type Err = ClientError;

    /// Accepts singular or plural names; `source` is an alias for `venue`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let lower = match lower.as_str() {
            "source" | "sources" => "venue",
            other => other.strip_suffix('s').unwrap_or(other),
        };
        Self::ALL
            .into_iter()
            .find(|t| t.name() == lower)
            .ok_or_else(|| ClientError::invalid_argument(format!("unknown entity type: {s}")))
    }
}

/// Anything that carries an OpenAlex id: full records and dehydrated references alike.
pub trait Reference {
    /// The id as found in the payload, usually `https://openalex.org/W123`.
    fn reference_id(&self) -> Option<&str>;

    /// The id with the canonical URL prefix removed.
    fn short_id(&self) -> Option<&str> {
        self.reference_id().map(id::strip_namespace)
    }
}

impl<R: Reference + ?Sized> Reference for &R {
    fn reference_id(&self) -> Option<&str> {
        (**self).reference_id()
    }
}

/// A bare id string is its own reference.
impl Reference for str {
    fn reference_id(&self) -> Option<&str> {
        Some(self)
    }
}

impl Reference for String {
    fn reference_id(&self) -> Option<&str> {
        Some(self)
    }
}

/// Conversion from a raw JSON object, given the entity type it was requested as.
pub trait Decode: Sized {
    fn decode(entity_type: EntityType, value: Value) -> ClientResult<Self>;
}

/// A full entity record with a statically known type.
pub trait Entity: Decode + Reference + Send + 'static {
    const TYPE: EntityType;

    /// Wrap into the run-time tagged union.
    fn into_any(self) -> AnyEntity;
}

macro_rules! impl_entity {
    ($ty:ident, $variant:ident, $wrap:expr) => {
        impl Reference for $ty {
            fn reference_id(&self) -> Option<&str> {
                Some(&self.id)
            }
        }

        impl Decode for $ty {
            fn decode(_: EntityType, value: Value) -> ClientResult<Self> {
                Ok(serde_json::from_value(value)?)
            }
        }

        impl Entity for $ty {
            const TYPE: EntityType = EntityType::$variant;

            fn into_any(self) -> AnyEntity {
                AnyEntity::$variant($wrap(self))
            }
        }
    };
}

impl_entity!(Work, Work, Box::new);
impl_entity!(Author, Author, std::convert::identity);
impl_entity!(Institution, Institution, std::convert::identity);
impl_entity!(Venue, Venue, std::convert::identity);
impl_entity!(Concept, Concept, std::convert::identity);

/// An entity whose type is only known at run time.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnyEntity {
    Work(Box<Work>),
    Author(Author),
    Institution(Institution),
    Venue(Venue),
    Concept(Concept),
}

impl AnyEntity {
    #[must_use]
    pub const fn entity_type(&self) -> EntityType {
        match self {
            Self::Work(_) => EntityType::Work,
            Self::Author(_) => EntityType::Author,
            Self::Institution(_) => EntityType::Institution,
            Self::Venue(_) => EntityType::Venue,
            Self::Concept(_) => EntityType::Concept,
        }
    }

    /// Full id URL.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Work(w) => &w.id,
            Self::Author(a) => &a.id,
            Self::Institution(i) => &i.id,
            Self::Venue(v) => &v.id,
            Self::Concept(c) => &c.id,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Work(w) => w.display_name.as_deref().or(w.title.as_deref()),
            Self::Author(a) => a.display_name.as_deref(),
            Self::Institution(i) => i.display_name.as_deref(),
            Self::Venue(v) => v.display_name.as_deref(),
            Self::Concept(c) => c.display_name.as_deref(),
        }
    }

    /// URL listing the works related to this entity, when the payload has one.
    #[must_use]
    pub fn works_api_url(&self) -> Option<&str> {
        match self {
            Self::Work(w) => w.cited_by_api_url.as_deref(),
            Self::Author(a) => a.works_api_url.as_deref(),
            Self::Institution(i) => i.works_api_url.as_deref(),
            Self::Venue(v) => v.works_api_url.as_deref(),
            Self::Concept(c) => c.works_api_url.as_deref(),
        }
    }

    #[must_use]
    pub fn into_work(self) -> Option<Work> {
        match self {
            Self::Work(w) => Some(*w),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_author(self) -> Option<Author> {
        match self {
            Self::Author(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_institution(self) -> Option<Institution> {
        match self {
            Self::Institution(i) => Some(i),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_venue(self) -> Option<Venue> {
        match self {
            Self::Venue(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_concept(self) -> Option<Concept> {
        match self {
            Self::Concept(c) => Some(c),
            _ => None,
        }
    }
}

impl Reference for AnyEntity {
    fn reference_id(&self) -> Option<&str> {
        Some(self.id())
    }
}

impl Decode for AnyEntity {
    fn decode(entity_type: EntityType, value: Value) -> ClientResult<Self> {
        entity_type.decode(value)
    }
}
