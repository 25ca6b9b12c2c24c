//! Middleware for the HTTP client (retry classification).
//!
//! Only timeouts and connection failures are retried. HTTP statuses, including
//! 429 and 5xx, pass straight through to the status mapping in the executor.

use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::{RetryTransientMiddleware, Retryable, RetryableStrategy};

use crate::config::Config;
use crate::error::is_connectivity_failure;

/// Retry strategy that treats only connectivity failures as transient.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectivityRetry;

impl RetryableStrategy for ConnectivityRetry {
    fn handle(
        &self,
        res: &Result<reqwest::Response, reqwest_middleware::Error>,
    ) -> Option<Retryable> {
        match res {
            Ok(_) => None,
            Err(reqwest_middleware::Error::Reqwest(err)) if is_connectivity_failure(err) => {
                tracing::warn!(error = %err, "Connection problem, backing off");
                Some(Retryable::Transient)
            }
            Err(_) => Some(Retryable::Fatal),
        }
    }
}

/// Wrap a reqwest client with exponential backoff bounded by the configured ceiling.
pub fn with_retry(client: reqwest::Client, config: &Config) -> ClientWithMiddleware {
    let policy = ExponentialBackoff::builder()
        .retry_bounds(config.retry_min_interval, config.retry_max_interval)
        .build_with_total_retry_duration(config.retry_ceiling);

    reqwest_middleware::ClientBuilder::new(client)
        .with(RetryTransientMiddleware::new_with_policy_and_strategy(policy, ConnectivityRetry))
        .build()
}
