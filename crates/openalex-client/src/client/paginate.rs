//! Cursor pagination.
//!
//! Each page request carries `per_page` and `cursor`; the next cursor comes back
//! in `meta.next_cursor` and is `null` once the result set is exhausted. Pages
//! are fetched strictly one after another since each depends on the last.

use async_stream::try_stream;
use futures::{Stream, TryStreamExt};
use url::Url;

use super::OpenAlexClient;
use crate::error::ClientResult;
use crate::models::{Decode, EntityType};

/// Cursor value that starts a new traversal.
pub const START_CURSOR: &str = "*";

/// A filtered or search listing to walk with cursors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Type of the listed entities.
    pub entity_type: EntityType,

    /// Listing URL with its filter or search query, without paging parameters.
    pub url: Url,

    /// Stop after this many entities.
    pub limit: Option<usize>,
}

impl PageRequest {
    #[must_use]
    pub fn new(entity_type: EntityType, url: Url) -> Self {
        Self { entity_type, url, limit: None }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Listing URL for one page, replacing any paging parameters already present.
    #[must_use]
    pub fn page_url(&self, per_page: usize, cursor: &str) -> Url {
        let mut url = self.url.clone();
        let kept: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(k, _)| k != "per_page" && k != "cursor" && k != "page")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("per_page", &per_page.to_string())
            .append_pair("cursor", cursor);
        url
    }
}

impl OpenAlexClient {
    /// Walk a listing, yielding entities as their pages arrive.
    ///
    /// The stream ends when the cursor runs out or `limit` entities have been
    /// yielded, and ends with an error on the first failed page.
    pub fn paginate_stream<T: Decode>(
        &self,
        request: PageRequest,
    ) -> impl Stream<Item = ClientResult<T>> {
        try_stream! {
            let limit = request.limit;
            let mut yielded = 0usize;
            let mut cursor = (limit != Some(0)).then(|| START_CURSOR.to_string());
            let mut pages = 0usize;

            while let Some(token) = cursor.take() {
                let per_page = limit.map_or(self.page_limit, |l| (l - yielded).min(self.page_limit));
                let page = self.fetch_list(request.page_url(per_page, &token)).await?;
                pages += 1;

                let received = page.results.len();
                for value in page.results {
                    if limit.is_some_and(|l| yielded >= l) {
                        break;
                    }
                    let entity = T::decode(request.entity_type, value)?;
                    yielded += 1;
                    yield entity;
                }

                let satisfied = limit.is_some_and(|l| yielded >= l);
                if !satisfied && received > 0 {
                    cursor = page.meta.next_cursor().map(str::to_string);
                }
            }

            tracing::debug!(entity_type = %request.entity_type, pages, yielded, "Pagination finished");
        }
    }

    /// Walk a listing to the end (or to `limit`) and collect the entities.
    ///
    /// Fails fast: any failed page discards everything collected so far.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn paginate<T: Decode>(&self, request: PageRequest) -> ClientResult<Vec<T>> {
        self.paginate_stream(request).try_collect().await
    }
}
