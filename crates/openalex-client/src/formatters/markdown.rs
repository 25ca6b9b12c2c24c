//! Markdown output formatting.

use std::borrow::Cow;

use crate::id::strip_namespace;
use crate::models::{AnyEntity, Author, Concept, Institution, Venue, Work};

const ABSTRACT_PREVIEW: usize = 300;

/// Format a list of entities as Markdown.
#[must_use]
pub fn format_entities_markdown(entities: &[AnyEntity]) -> String {
    if entities.is_empty() {
        return "No results found.".to_string();
    }

    let mut output = format!("# Results ({} entities)\n\n", entities.len());

    for (i, entity) in entities.iter().enumerate() {
        output.push_str(&format_entity_markdown(entity, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single entity as Markdown.
#[must_use]
pub fn format_entity_markdown(entity: &AnyEntity, index: usize) -> String {
    match entity {
        AnyEntity::Work(w) => format_work_markdown(w, index),
        AnyEntity::Author(a) => format_author_markdown(a, index),
        AnyEntity::Institution(i) => format_institution_markdown(i, index),
        AnyEntity::Venue(v) => format_venue_markdown(v, index),
        AnyEntity::Concept(c) => format_concept_markdown(c, index),
    }
}

fn heading(index: usize, name: &str) -> String {
    if index > 0 { format!("## {index}. {name}\n\n") } else { format!("## {name}\n\n") }
}

fn openalex_link(id: &str) -> String {
    format!("**OpenAlex**: [{}]({id})\n", strip_namespace(id))
}

/// Format a single work as Markdown.
#[must_use]
pub fn format_work_markdown(work: &Work, index: usize) -> String {
    let mut output = heading(index, work.title_or_default());

    let authors = work.author_names();
    if !authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", authors.join(", ")));
    }

    let mut meta = Vec::new();
    if let Some(year) = work.publication_year {
        meta.push(format!("**Year**: {year}"));
    }
    meta.push(format!("**Citations**: {}", work.citations()));
    if let Some(venue) = work.host_venue.as_ref().and_then(|v| v.venue.display_name.as_deref()) {
        meta.push(format!("**Venue**: {venue}"));
    }
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    let concepts: Vec<&str> =
        work.concepts.iter().filter_map(|c| c.display_name.as_deref()).collect();
    if !concepts.is_empty() {
        output.push_str(&format!("**Concepts**: {}\n\n", concepts.join(", ")));
    }

    if let Some(doi) = work.doi_id() {
        output.push_str(&format!("**DOI**: [{doi}](https://doi.org/{doi})\n\n"));
    }

    if let Some(oa_url) = work.open_access.as_ref().and_then(|oa| oa.oa_url.as_deref()) {
        output.push_str(&format!("**Open Access**: [Full text]({oa_url})\n\n"));
    }

    if let Some(abs) = work.abstract_text() {
        let truncated: Cow<'_, str> = match abs.char_indices().nth(ABSTRACT_PREVIEW) {
            Some((cut, _)) => Cow::Owned(format!("{}...", &abs[..cut])),
            None => Cow::Borrowed(&abs),
        };
        output.push_str(&format!("**Abstract**: {truncated}\n\n"));
    }

    output.push_str(&openalex_link(&work.id));
    output
}

fn format_author_markdown(author: &Author, index: usize) -> String {
    let mut output = heading(index, author.display_name.as_deref().unwrap_or("Unknown"));

    if let Some(inst) = author.last_known_institution.as_ref().and_then(|i| i.display_name.as_deref()) {
        output.push_str(&format!("**Institution**: {inst}\n\n"));
    }

    output.push_str(&format!(
        "**Works**: {} | **Citations**: {}\n\n",
        author.works_count.unwrap_or(0),
        author.cited_by_count.unwrap_or(0)
    ));

    if let Some(orcid) = author.orcid_id() {
        output.push_str(&format!("**ORCID**: [{orcid}](https://orcid.org/{orcid})\n\n"));
    }

    output.push_str(&openalex_link(&author.id));
    output
}

fn format_institution_markdown(institution: &Institution, index: usize) -> String {
    let mut output = heading(index, institution.display_name.as_deref().unwrap_or("Unknown"));

    let place: Vec<&str> = [
        institution.geo.as_ref().and_then(|g| g.city.as_deref()),
        institution.country_code.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !place.is_empty() {
        output.push_str(&format!("**Location**: {}\n\n", place.join(", ")));
    }

    output.push_str(&format!(
        "**Works**: {} | **Citations**: {}\n\n",
        institution.works_count.unwrap_or(0),
        institution.cited_by_count.unwrap_or(0)
    ));

    if let Some(homepage) = &institution.homepage_url {
        output.push_str(&format!("**Homepage**: [{homepage}]({homepage})\n\n"));
    }

    output.push_str(&openalex_link(&institution.id));
    output
}

fn format_venue_markdown(venue: &Venue, index: usize) -> String {
    let mut output = heading(index, venue.display_name.as_deref().unwrap_or("Unknown"));

    if let Some(publisher) = &venue.publisher {
        output.push_str(&format!("**Publisher**: {publisher}\n\n"));
    }
    if let Some(issn) = &venue.issn_l {
        output.push_str(&format!("**ISSN-L**: {issn}\n\n"));
    }

    output.push_str(&format!(
        "**Works**: {} | **Citations**: {}\n\n",
        venue.works_count.unwrap_or(0),
        venue.cited_by_count.unwrap_or(0)
    ));

    output.push_str(&openalex_link(&venue.id));
    output
}

fn format_concept_markdown(concept: &Concept, index: usize) -> String {
    let mut output = heading(index, concept.display_name.as_deref().unwrap_or("Unknown"));

    if let Some(description) = &concept.description {
        output.push_str(&format!("{description}\n\n"));
    }

    let level = concept.level.map_or_else(|| "?".to_string(), |l| l.to_string());
    output.push_str(&format!(
        "**Level**: {level} | **Works**: {}\n\n",
        concept.works_count.unwrap_or(0)
    ));

    output.push_str(&openalex_link(&concept.id));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_entities_markdown(&[]), "No results found.");
    }

    #[test]
    fn test_work_markdown() {
        let work: Work = serde_json::from_value(json!({
            "id": "https://openalex.org/W1",
            "display_name": "A paper",
            "publication_year": 2020,
            "cited_by_count": 3,
            "abstract_inverted_index": {"Hello": [0], "world": [1]},
        }))
        .unwrap();

        let md = format_work_markdown(&work, 1);
        assert!(md.starts_with("## 1. A paper\n\n"));
        assert!(md.contains("**Year**: 2020 | **Citations**: 3"));
        assert!(md.contains("**Abstract**: Hello world"));
        assert!(md.contains("[W1](https://openalex.org/W1)"));
    }

    #[test]
    fn test_long_abstract_is_truncated_on_char_boundary() {
        let words: serde_json::Map<String, serde_json::Value> =
            (0..200).map(|i| (format!("wörd{i}"), json!([i]))).collect();
        let work: Work = serde_json::from_value(json!({
            "id": "https://openalex.org/W2",
            "abstract_inverted_index": words,
        }))
        .unwrap();

        let md = format_work_markdown(&work, 0);
        assert!(md.contains("...\n\n"));
    }
}
