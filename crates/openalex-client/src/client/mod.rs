//! OpenAlex API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff for timeouts and refused connections
//! - Batched id lookups through `openalex_id` filters
//! - Cursor pagination for search, citation and association queries
//!
//! Nothing is cached: every call is a fresh request.

mod batch;
mod executor;
mod hydrate;
mod middleware;
mod paginate;
mod resolve;

use std::sync::Once;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::ClientWithMiddleware;
use tokio_util::sync::CancellationToken;
use url::Url;

pub use executor::FetchOutcome;
pub use middleware::ConnectivityRetry;
pub use paginate::{PageRequest, START_CURSOR};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::EntityType;

static POLITE_POOL_ADVISORY: Once = Once::new();

/// OpenAlex API client.
#[derive(Clone)]
pub struct OpenAlexClient {
    /// HTTP client with retry middleware.
    http: ClientWithMiddleware,

    /// API base URL, without trailing slash.
    base_url: String,

    /// Page size for batch chunks and cursor pages.
    page_limit: usize,

    /// Batch chunks in flight at once.
    batch_concurrency: usize,

    /// Whether a polite-pool email is configured.
    has_email: bool,

    /// Cancellation token raced against every request.
    cancel: Option<CancellationToken>,
}

impl OpenAlexClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> ClientResult<Self> {
        if config.page_limit == 0 || config.page_limit > api::MAX_PAGE_LIMIT {
            return Err(ClientError::invalid_config(format!(
                "page limit must be between 1 and {}, got {}",
                api::MAX_PAGE_LIMIT,
                config.page_limit
            )));
        }
        Url::parse(&config.base_url).map_err(|e| {
            ClientError::invalid_config(format!("base URL {:?}: {e}", config.base_url))
        })?;

        if !config.has_email() {
            POLITE_POOL_ADVISORY.call_once(|| {
                tracing::warn!(
                    "OpenAlex has two pools for clients. Please supply a contact email to get \
                     into the polite pool, so OpenAlex can contact you if needed"
                );
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent())
                .map_err(|e| ClientError::invalid_config(format!("contact email: {e}")))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self {
            http: middleware::with_retry(client, &config),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_limit: config.page_limit,
            batch_concurrency: config.batch_concurrency.max(1),
            has_email: config.has_email(),
            cancel: None,
        })
    }

    /// A handle sharing this client's connection pool whose requests abort
    /// with [`ClientError::Cancelled`] once `token` is cancelled.
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self { cancel: Some(token), ..self.clone() }
    }

    /// Check if a contact email is configured.
    #[must_use]
    pub const fn has_email(&self) -> bool {
        self.has_email
    }

    #[must_use]
    pub const fn page_limit(&self) -> usize {
        self.page_limit
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{path}/{id}`.
    pub(crate) fn entity_url(&self, entity_type: EntityType, id: &str) -> ClientResult<Url> {
        self.parse_url(&format!("{}/{}/{id}", self.base_url, entity_type.path()))
    }

    /// `{base}/{path}?{key}={value}`.
    pub(crate) fn list_url(
        &self,
        entity_type: EntityType,
        key: &str,
        value: &str,
    ) -> ClientResult<Url> {
        let mut url = self.parse_url(&format!("{}/{}", self.base_url, entity_type.path()))?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }

    fn parse_url(&self, raw: &str) -> ClientResult<Url> {
        Url::parse(raw).map_err(|e| ClientError::invalid_argument(format!("bad URL {raw:?}: {e}")))
    }
}

impl std::fmt::Debug for OpenAlexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAlexClient")
            .field("base_url", &self.base_url)
            .field("page_limit", &self.page_limit)
            .field("has_email", &self.has_email)
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}
