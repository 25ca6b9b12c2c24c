//! Identifier normalization and classification.
//!
//! OpenAlex ids come in three shapes:
//!
//! - short codes: `W2741809807`
//! - canonical URLs: `https://openalex.org/W2741809807`
//! - namespaced external ids: `doi:10.7717/peerj.4375`, `pmid:29456894`
//!
//! The first character of a short code names the entity type. Namespaced ids
//! are only understood by the `/works` endpoint and are never classified.

use std::fmt;

use crate::config::api::CANONICAL_ID_PREFIX;
use crate::error::{ClientError, ClientResult};
use crate::models::EntityType;

/// Remove the canonical `https://openalex.org/` prefix.
///
/// Repeated prefixes are all removed so the operation is idempotent.
#[must_use]
pub fn strip_namespace(id: &str) -> &str {
    let mut id = id;
    while let Some(rest) = id.strip_prefix(CANONICAL_ID_PREFIX) {
        id = rest;
    }
    id
}

/// Split `namespace:value`, where the namespace is a bare word like `doi` or `pmid`.
fn split_namespaced(id: &str) -> Option<(&str, &str)> {
    let (namespace, value) = id.split_once(':')?;
    let is_word = !namespace.is_empty()
        && namespace.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_word.then_some((namespace, value))
}

/// Entity type named by the first character of a (possibly prefixed) id.
pub fn classify(id: &str) -> ClientResult<EntityType> {
    let short = strip_namespace(id.trim());
    if split_namespaced(short).is_some() {
        return Err(ClientError::unrecognized(short));
    }
    short
        .chars()
        .next()
        .and_then(EntityType::from_prefix)
        .ok_or_else(|| ClientError::unrecognized(short))
}

/// A parsed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    /// Native OpenAlex id, prefix upper-cased (`W123`).
    Canonical { entity_type: EntityType, code: String },
    /// External id passed through to the service (`doi:10.1/abc`).
    Namespaced { namespace: String, value: String },
}

impl EntityId {
    /// Parse a raw id string.
    ///
    /// Empty input is an `InvalidArgument`; an unknown prefix character is an
    /// `UnrecognizedIdentifier`.
    pub fn parse(raw: &str) -> ClientResult<Self> {
        let short = strip_namespace(raw.trim());
        if short.is_empty() {
            return Err(ClientError::invalid_argument("id must not be empty"));
        }

        if let Some((namespace, value)) = split_namespaced(short) {
            if value.is_empty() {
                return Err(ClientError::invalid_argument(format!("{namespace}: id has no value")));
            }
            return Ok(Self::Namespaced {
                namespace: namespace.to_ascii_lowercase(),
                value: value.to_string(),
            });
        }

        let entity_type = classify(short)?;
        let mut code = String::with_capacity(short.len());
        code.push(entity_type.prefix());
        code.push_str(&short[1..]);
        Ok(Self::Canonical { entity_type, code })
    }

    /// Entity type of a canonical id; `None` for namespaced ids.
    #[must_use]
    pub const fn entity_type(&self) -> Option<EntityType> {
        match self {
            Self::Canonical { entity_type, .. } => Some(*entity_type),
            Self::Namespaced { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_namespaced(&self) -> bool {
        matches!(self, Self::Namespaced { .. })
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical { code, .. } => f.write_str(code),
            Self::Namespaced { namespace, value } => write!(f, "{namespace}:{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_namespace() {
        assert_eq!(strip_namespace("https://openalex.org/W123"), "W123");
        assert_eq!(strip_namespace("W123"), "W123");
        assert_eq!(strip_namespace("https://openalex.org/https://openalex.org/A1"), "A1");
        assert_eq!(strip_namespace("http://openalex.org/W1"), "http://openalex.org/W1");
    }

    #[test]
    fn test_classify_known_prefixes() {
        assert_eq!(classify("W123").unwrap(), EntityType::Work);
        assert_eq!(classify("https://openalex.org/W123").unwrap(), EntityType::Work);
        assert_eq!(classify("A5023888391").unwrap(), EntityType::Author);
        assert_eq!(classify("I114027177").unwrap(), EntityType::Institution);
        assert_eq!(classify("V1983995261").unwrap(), EntityType::Venue);
        assert_eq!(classify("c71924100").unwrap(), EntityType::Concept);
    }

    #[test]
    fn test_classify_rejects_unknown_prefix() {
        let err = classify("Z999").unwrap_err();
        assert!(matches!(err, ClientError::UnrecognizedIdentifier { ref id } if id == "Z999"));
        assert!(classify("").is_err());
    }

    #[test]
    fn test_classify_rejects_namespaced_ids() {
        assert!(classify("doi:10.7717/peerj.4375").is_err());
    }

    #[test]
    fn test_parse_canonical_uppercases_prefix() {
        let id = EntityId::parse("https://openalex.org/w2741809807").unwrap();
        assert_eq!(id.entity_type(), Some(EntityType::Work));
        assert_eq!(id.to_string(), "W2741809807");
    }

    #[test]
    fn test_parse_namespaced() {
        let id = EntityId::parse("DOI:10.7717/peerj.4375").unwrap();
        assert!(id.is_namespaced());
        assert_eq!(id.entity_type(), None);
        assert_eq!(id.to_string(), "doi:10.7717/peerj.4375");
    }

    #[test]
    fn test_parse_empty_is_invalid_argument() {
        assert!(matches!(EntityId::parse("  "), Err(ClientError::InvalidArgument(_))));
        assert!(matches!(
            EntityId::parse("https://openalex.org/"),
            Err(ClientError::InvalidArgument(_))
        ));
        assert!(matches!(EntityId::parse("pmid:"), Err(ClientError::InvalidArgument(_))));
    }
}
