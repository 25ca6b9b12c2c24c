//! Configuration for the OpenAlex client.

use std::time::Duration;

use crate::error::{ClientError, ClientResult};

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the OpenAlex REST API.
    pub const BASE_URL: &str = "https://api.openalex.org";

    /// Canonical prefix of OpenAlex identifiers (`https://openalex.org/W123`).
    pub const CANONICAL_ID_PREFIX: &str = "https://openalex.org/";

    /// Default page size for batch and paginated requests.
    pub const DEFAULT_PAGE_LIMIT: usize = 50;

    /// Largest `per_page` (and `openalex_id` filter size) the service accepts.
    pub const MAX_PAGE_LIMIT: usize = 200;

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// First backoff delay after a timeout or connection failure.
    pub const RETRY_MIN_INTERVAL: Duration = Duration::from_secs(1);

    /// Upper bound on a single backoff delay.
    pub const RETRY_MAX_INTERVAL: Duration = Duration::from_secs(30);

    /// Total time budget for retrying one request.
    pub const RETRY_CEILING: Duration = Duration::from_secs(60);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Client name sent in the `User-Agent` header.
    pub const USER_AGENT: &str = concat!("openalex-client-rs/", env!("CARGO_PKG_VERSION"));
}

/// Client configuration.
///
/// Immutable once handed to [`crate::OpenAlexClient::new`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact email for the OpenAlex "polite pool" (optional).
    pub email: Option<String>,

    /// Base URL of the REST API (for testing with mock servers).
    pub base_url: String,

    /// Page size for batch chunks and cursor pages.
    pub page_limit: usize,

    /// Number of batch chunks fetched concurrently.
    pub batch_concurrency: usize,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// First retry delay.
    pub retry_min_interval: Duration,

    /// Largest retry delay.
    pub retry_max_interval: Duration,

    /// Total time spent retrying one request before giving up.
    pub retry_ceiling: Duration,
}

impl Config {
    /// Create a new configuration with an optional contact email.
    #[must_use]
    pub fn new(email: Option<String>) -> Self {
        Self {
            email: email.filter(|e| !e.trim().is_empty()),
            base_url: api::BASE_URL.to_string(),
            page_limit: api::DEFAULT_PAGE_LIMIT,
            batch_concurrency: 1,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            retry_min_interval: api::RETRY_MIN_INTERVAL,
            retry_max_interval: api::RETRY_MAX_INTERVAL,
            retry_ceiling: api::RETRY_CEILING,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            email: Some("tests@example.org".to_string()),
            base_url: base_url.trim_end_matches('/').to_string(),
            page_limit: api::DEFAULT_PAGE_LIMIT,
            batch_concurrency: 1,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            retry_min_interval: Duration::from_millis(10),
            retry_max_interval: Duration::from_millis(50),
            retry_ceiling: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `OPENALEX_EMAIL`, `OPENALEX_BASE_URL` and `OPENALEX_PAGE_LIMIT`.
    pub fn from_env() -> ClientResult<Self> {
        let mut config = Self::new(std::env::var("OPENALEX_EMAIL").ok());

        if let Ok(base_url) = std::env::var("OPENALEX_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(raw) = std::env::var("OPENALEX_PAGE_LIMIT") {
            let limit = raw.parse::<usize>().map_err(|_| {
                ClientError::invalid_config(format!("OPENALEX_PAGE_LIMIT is not a number: {raw}"))
            })?;
            config = config.with_page_limit(limit)?;
        }

        Ok(config)
    }

    /// Set the page size, bounded by the service maximum.
    pub fn with_page_limit(mut self, page_limit: usize) -> ClientResult<Self> {
        if page_limit == 0 || page_limit > api::MAX_PAGE_LIMIT {
            return Err(ClientError::invalid_config(format!(
                "page limit must be between 1 and {}, got {page_limit}",
                api::MAX_PAGE_LIMIT
            )));
        }
        self.page_limit = page_limit;
        Ok(self)
    }

    /// Set how many batch chunks may be in flight at once.
    #[must_use]
    pub fn with_batch_concurrency(mut self, concurrency: usize) -> Self {
        self.batch_concurrency = concurrency.max(1);
        self
    }

    /// Check if a contact email is configured.
    #[must_use]
    pub const fn has_email(&self) -> bool {
        self.email.is_some()
    }

    /// `User-Agent` header value, including `mailto:` when an email is set.
    #[must_use]
    pub fn user_agent(&self) -> String {
        match &self.email {
            Some(email) => format!("{} mailto:{email}", api::USER_AGENT),
            None => api::USER_AGENT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
