//! Compact JSON output.

use serde_json::{Value, json};

use crate::id::strip_namespace;
use crate::models::{AnyEntity, Author, Concept, Institution, Venue, Work};

/// Compact representation of any entity, keyed by its short id.
#[must_use]
pub fn compact_entity(entity: &AnyEntity) -> Value {
    match entity {
        AnyEntity::Work(w) => compact_work(w),
        AnyEntity::Author(a) => compact_author(a),
        AnyEntity::Institution(i) => compact_institution(i),
        AnyEntity::Venue(v) => compact_venue(v),
        AnyEntity::Concept(c) => compact_concept(c),
    }
}

/// Compact representations of a list of entities.
#[must_use]
pub fn compact_entities(entities: &[AnyEntity]) -> Value {
    Value::Array(entities.iter().map(compact_entity).collect())
}

/// Create a compact work representation.
///
/// Drops the inverted abstract index, counts by year and reference lists.
#[must_use]
pub fn compact_work(work: &Work) -> Value {
    let mut obj = json!({
        "id": work.short_id(),
        "title": work.title_or_default(),
        "year": work.publication_year,
        "citations": work.citations(),
    });

    let authors = work.author_names();
    if !authors.is_empty() {
        obj["authors"] = json!(authors);
    }

    if let Some(venue) = work.host_venue.as_ref().and_then(|v| v.venue.display_name.as_deref()) {
        obj["venue"] = json!(venue);
    }

    if let Some(doi) = work.doi_id() {
        obj["doi"] = json!(doi);
    }

    if let Some(oa_url) = work.open_access.as_ref().and_then(|oa| oa.oa_url.as_deref()) {
        obj["oa_url"] = json!(oa_url);
    }

    let concepts: Vec<&str> =
        work.concepts.iter().filter_map(|c| c.display_name.as_deref()).collect();
    if !concepts.is_empty() {
        obj["concepts"] = json!(concepts);
    }

    obj
}

#[must_use]
pub fn compact_author(author: &Author) -> Value {
    let mut obj = json!({
        "id": strip_namespace(&author.id),
        "name": author.display_name.as_deref().unwrap_or("Unknown"),
        "works": author.works_count.unwrap_or(0),
        "citations": author.cited_by_count.unwrap_or(0),
    });

    if let Some(inst) = author.last_known_institution.as_ref().and_then(|i| i.display_name.as_deref()) {
        obj["institution"] = json!(inst);
    }

    if let Some(orcid) = author.orcid_id() {
        obj["orcid"] = json!(orcid);
    }

    obj
}

#[must_use]
pub fn compact_institution(institution: &Institution) -> Value {
    let mut obj = json!({
        "id": strip_namespace(&institution.id),
        "name": institution.display_name.as_deref().unwrap_or("Unknown"),
        "works": institution.works_count.unwrap_or(0),
        "citations": institution.cited_by_count.unwrap_or(0),
    });

    if let Some(country) = &institution.country_code {
        obj["country"] = json!(country);
    }

    if let Some(kind) = &institution.institution_type {
        obj["type"] = json!(kind);
    }

    if let Some(ror) = &institution.ror {
        obj["ror"] = json!(ror);
    }

    obj
}

#[must_use]
pub fn compact_venue(venue: &Venue) -> Value {
    let mut obj = json!({
        "id": strip_namespace(&venue.id),
        "name": venue.display_name.as_deref().unwrap_or("Unknown"),
        "works": venue.works_count.unwrap_or(0),
        "citations": venue.cited_by_count.unwrap_or(0),
    });

    if let Some(issn) = &venue.issn_l {
        obj["issn_l"] = json!(issn);
    }

    if let Some(publisher) = &venue.publisher {
        obj["publisher"] = json!(publisher);
    }

    obj
}

#[must_use]
pub fn compact_concept(concept: &Concept) -> Value {
    let mut obj = json!({
        "id": strip_namespace(&concept.id),
        "name": concept.display_name.as_deref().unwrap_or("Unknown"),
        "level": concept.level,
        "works": concept.works_count.unwrap_or(0),
    });

    if let Some(wikidata) = concept.wikidata_id() {
        obj["wikidata"] = json!(wikidata);
    }

    obj
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_work() {
        let work: Work = serde_json::from_value(json!({
            "id": "https://openalex.org/W2741809807",
            "title": "The state of OA",
            "publication_year": 2018,
            "cited_by_count": 42,
            "doi": "https://doi.org/10.7717/peerj.4375",
            "authorships": [{"author": {"id": "https://openalex.org/A1", "display_name": "Heather Piwowar"}}],
            "abstract_inverted_index": {"Despite": [0]},
        }))
        .unwrap();

        let compact = compact_work(&work);

        assert_eq!(compact["id"], "W2741809807");
        assert_eq!(compact["title"], "The state of OA");
        assert_eq!(compact["year"], 2018);
        assert_eq!(compact["citations"], 42);
        assert_eq!(compact["doi"], "10.7717/peerj.4375");
        assert_eq!(compact["authors"], json!(["Heather Piwowar"]));
        assert!(compact.get("abstract_inverted_index").is_none());
    }

    #[test]
    fn test_compact_entity_dispatches_on_type() {
        let concept: Concept = serde_json::from_value(json!({
            "id": "https://openalex.org/C41008148",
            "display_name": "Computer science",
            "level": 0,
        }))
        .unwrap();

        let compact = compact_entities(&[AnyEntity::Concept(concept)]);
        assert_eq!(compact[0]["id"], "C41008148");
        assert_eq!(compact[0]["level"], 0);
    }
}
