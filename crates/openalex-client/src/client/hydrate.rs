//! Hydration of dehydrated references and retrieval of related works.

use super::{OpenAlexClient, PageRequest};
use crate::error::{ClientError, ClientResult};
use crate::id::classify;
use crate::models::{AnyEntity, Entity, EntityType, Reference, Work};

impl OpenAlexClient {
    /// Fetch the full record behind a reference.
    ///
    /// # Errors
    ///
    /// Returns error if the reference has no id, or on API failure.
    pub async fn hydrate<R: Reference + ?Sized>(&self, reference: &R) -> ClientResult<Option<AnyEntity>> {
        let id = reference
            .reference_id()
            .ok_or_else(|| ClientError::invalid_argument("reference has no id"))?;
        self.get_entity(id).await
    }

    /// Fetch the full records behind several references of the same type.
    ///
    /// # Errors
    ///
    /// Returns error if any reference has no id, or on API failure.
    pub async fn hydrate_many<R: Reference>(&self, references: &[R]) -> ClientResult<Vec<AnyEntity>> {
        let ids = references
            .iter()
            .map(|r| r.reference_id().ok_or_else(|| ClientError::invalid_argument("reference has no id")))
            .collect::<ClientResult<Vec<_>>>()?;
        self.get_entities(&ids).await
    }

    /// Works listed as related to `work`.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn related_works(&self, work: &Work) -> ClientResult<Vec<Work>> {
        if work.related_works.is_empty() {
            return Ok(Vec::new());
        }
        self.get_works(&work.related_works).await
    }

    /// Works that `work` cites.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn referenced_works(&self, work: &Work) -> ClientResult<Vec<Work>> {
        if work.referenced_works.is_empty() {
            return Ok(Vec::new());
        }
        self.get_works(&work.referenced_works).await
    }

    /// Works citing `work`, up to `limit`.
    ///
    /// Uses the payload's `cited_by_api_url`, or builds the `cites:` filter
    /// when the payload has none.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn cited_by_works(&self, work: &Work, limit: Option<usize>) -> ClientResult<Vec<Work>> {
        let url = match work.cited_by_api_url.as_deref() {
            Some(url) => self.parse_url(url)?,
            None => self.list_url(EntityType::Work, "filter", &format!("cites:{}", work.short_id()))?,
        };
        self.paginate(PageRequest::new(EntityType::Work, url).with_limit(limit)).await
    }

    /// Works by an author, from an institution, in a venue, or tagged with a concept.
    ///
    /// Dehydrated references carry no works URL, so the filter is derived from
    /// the id prefix.
    ///
    /// # Errors
    ///
    /// Returns error for references without id, for works, or on API failure.
    pub async fn associated_works<R: Reference + ?Sized>(
        &self,
        reference: &R,
        limit: Option<usize>,
    ) -> ClientResult<Vec<Work>> {
        let id = reference
            .short_id()
            .ok_or_else(|| ClientError::invalid_argument("reference has no id"))?;
        let entity_type = classify(id)?;
        let key = entity_type.works_filter().ok_or_else(|| {
            ClientError::invalid_argument(format!(
                "{entity_type} {id} has no associated works; use cited_by_works"
            ))
        })?;

        let url = self.list_url(EntityType::Work, "filter", &format!("{key}:{id}"))?;
        self.paginate(PageRequest::new(EntityType::Work, url).with_limit(limit)).await
    }

    /// Full-text search over one entity type.
    ///
    /// # Errors
    ///
    /// Returns error on an empty query or API failure.
    pub async fn search(
        &self,
        query: &str,
        entity_type: EntityType,
        limit: Option<usize>,
    ) -> ClientResult<Vec<AnyEntity>> {
        let request = self.search_request(query, entity_type, limit)?;
        self.paginate(request).await
    }

    /// Full-text search returning a statically known type.
    ///
    /// # Errors
    ///
    /// Returns error on an empty query or API failure.
    pub async fn search_as<T: Entity>(&self, query: &str, limit: Option<usize>) -> ClientResult<Vec<T>> {
        let request = self.search_request(query, T::TYPE, limit)?;
        self.paginate(request).await
    }

    fn search_request(
        &self,
        query: &str,
        entity_type: EntityType,
        limit: Option<usize>,
    ) -> ClientResult<PageRequest> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ClientError::invalid_argument("search query must not be empty"));
        }
        // Quoted so the service matches the query as a phrase.
        let url = self.list_url(entity_type, "search", &format!("\"{query}\""))?;
        Ok(PageRequest::new(entity_type, url).with_limit(limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_search_request_quotes_query() {
        let client = OpenAlexClient::new(Config::default()).unwrap();
        let request = client.search_request(" deep learning ", EntityType::Work, Some(20)).unwrap();
        insta::assert_snapshot!(
            request.url.as_str(),
            @"https://api.openalex.org/works?search=%22deep+learning%22"
        );
        assert_eq!(request.limit, Some(20));
    }

    #[test]
    fn test_search_request_rejects_blank_query() {
        let client = OpenAlexClient::new(Config::default()).unwrap();
        assert!(client.search_request("   ", EntityType::Author, None).is_err());
    }
}
