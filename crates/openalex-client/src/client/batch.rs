//! Batched lookups through the `openalex_id` filter.
//!
//! Ids are split into chunks of at most `page_limit`, one filtered request per
//! chunk. Results keep the order the service returns them in, chunk after chunk.

use futures::{StreamExt, TryStreamExt};
use serde_json::Value;

use super::OpenAlexClient;
use crate::error::{ClientError, ClientResult};
use crate::id::{EntityId, classify, strip_namespace};
use crate::models::{AnyEntity, Author, Concept, Decode, Entity, EntityType, Institution, Venue, Work};

impl OpenAlexClient {
    /// Get many entities of one type, classified from the first id.
    ///
    /// All ids must be canonical OpenAlex ids of the same type; namespaced ids
    /// make the service answer 403, which aborts the whole call.
    ///
    /// # Errors
    ///
    /// Returns error on an empty list, an unrecognized first id, or API failure.
    pub async fn get_entities<S>(&self, ids: &[S]) -> ClientResult<Vec<AnyEntity>>
    where
        S: AsRef<str> + Sync,
    {
        let first = ids
            .first()
            .ok_or_else(|| ClientError::invalid_argument("ids must not be empty"))?;
        let entity_type = classify(first.as_ref())?;
        self.batch(entity_type, ids).await
    }

    /// Get many entities of a statically known type.
    ///
    /// # Errors
    ///
    /// Returns error on an empty list or API failure.
    pub async fn get_many<T, S>(&self, ids: &[S]) -> ClientResult<Vec<T>>
    where
        T: Entity,
        S: AsRef<str> + Sync,
    {
        self.batch(T::TYPE, ids).await
    }

    /// Get multiple works by OpenAlex id.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_works<S: AsRef<str> + Sync>(&self, ids: &[S]) -> ClientResult<Vec<Work>> {
        self.get_many(ids).await
    }

    /// Get multiple authors by OpenAlex id.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_authors<S: AsRef<str> + Sync>(&self, ids: &[S]) -> ClientResult<Vec<Author>> {
        self.get_many(ids).await
    }

    /// Get multiple institutions by OpenAlex id.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_institutions<S: AsRef<str> + Sync>(
        &self,
        ids: &[S],
    ) -> ClientResult<Vec<Institution>> {
        self.get_many(ids).await
    }

    /// Get multiple venues by OpenAlex id.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_venues<S: AsRef<str> + Sync>(&self, ids: &[S]) -> ClientResult<Vec<Venue>> {
        self.get_many(ids).await
    }

    /// Get multiple concepts by OpenAlex id.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_concepts<S: AsRef<str> + Sync>(&self, ids: &[S]) -> ClientResult<Vec<Concept>> {
        self.get_many(ids).await
    }

    async fn batch<T, S>(&self, entity_type: EntityType, ids: &[S]) -> ClientResult<Vec<T>>
    where
        T: Decode,
        S: AsRef<str> + Sync,
    {
        if ids.is_empty() {
            return Err(ClientError::invalid_argument("ids must not be empty"));
        }

        let normalized = normalize_ids(ids)?;
        let filters: Vec<String> = normalized.chunks(self.page_limit).map(|c| c.join("|")).collect();
        let total = filters.len();

        // `buffered` yields in submission order whatever the completion order.
        let pages: Vec<Vec<T>> = futures::stream::iter(filters.into_iter().enumerate())
            .map(|(n, filter)| self.fetch_chunk(entity_type, filter, n + 1, total))
            .buffered(self.batch_concurrency)
            .try_collect()
            .await?;

        Ok(pages.into_iter().flatten().collect())
    }

    async fn fetch_chunk<T: Decode>(
        &self,
        entity_type: EntityType,
        ids: String,
        chunk: usize,
        total: usize,
    ) -> ClientResult<Vec<T>> {
        let mut url = self.list_url(entity_type, "filter", &format!("openalex_id:{ids}"))?;
        url.query_pairs_mut().append_pair("per_page", &self.page_limit.to_string());

        tracing::debug!(%entity_type, chunk, total, "Fetching batch chunk");
        let page = self.fetch_list(url).await?;

        page.results
            .into_iter()
            .map(|value| {
                ensure_type(entity_type, &value)?;
                T::decode(entity_type, value)
            })
            .collect()
    }
}

/// Same normalization as single lookups: prefix stripped, type letter upper-cased.
fn normalize_ids<S: AsRef<str>>(ids: &[S]) -> ClientResult<Vec<String>> {
    ids.iter()
        .map(|id| EntityId::parse(id.as_ref()).map(|id| id.to_string()))
        .collect()
}

/// Reject results whose id prefix belongs to another entity type.
fn ensure_type(expected: EntityType, value: &Value) -> ClientResult<()> {
    let Some(id) = value.get("id").and_then(Value::as_str) else {
        return Ok(());
    };
    match classify(id) {
        Ok(found) if found == expected => Ok(()),
        _ => Err(ClientError::InconsistentBatch { expected, found: strip_namespace(id).to_string() }),
    }
}
