//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use openalex_client::config::{Config, api};
use openalex_client::{ClientError, OpenAlexClient};

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_has_no_email() {
    let config = Config::default();
    assert!(!config.has_email());
    assert!(!config.user_agent().contains("mailto"));
}

#[test]
fn test_config_with_email() {
    let config = Config::new(Some("me@example.org".to_string()));
    assert!(config.has_email());
    assert!(config.user_agent().ends_with(" mailto:me@example.org"));
}

#[test]
fn test_blank_email_is_ignored() {
    let config = Config::new(Some("   ".to_string()));
    assert!(!config.has_email());
}

#[test]
fn test_page_limit_bounds() {
    assert!(Config::default().with_page_limit(1).is_ok());
    assert!(Config::default().with_page_limit(api::MAX_PAGE_LIMIT).is_ok());
    assert!(matches!(Config::default().with_page_limit(0), Err(ClientError::InvalidConfig(_))));
    assert!(Config::default().with_page_limit(api::MAX_PAGE_LIMIT + 1).is_err());
}

#[test]
fn test_batch_concurrency_is_at_least_one() {
    assert_eq!(Config::default().with_batch_concurrency(0).batch_concurrency, 1);
    assert_eq!(Config::default().with_batch_concurrency(4).batch_concurrency, 4);
}

#[test]
fn test_for_testing_trims_trailing_slash() {
    let config = Config::for_testing("http://127.0.0.1:8080/");
    assert_eq!(config.base_url, "http://127.0.0.1:8080");
    assert!(config.retry_ceiling < api::RETRY_CEILING);
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let client = OpenAlexClient::new(Config::default());
    assert!(client.is_ok());
}

#[test]
fn test_client_reports_configuration() {
    let config = Config::for_testing("http://localhost:9/").with_page_limit(25).unwrap();
    let client = OpenAlexClient::new(config).unwrap();

    assert!(client.has_email());
    assert_eq!(client.page_limit(), 25);
    assert_eq!(client.base_url(), "http://localhost:9");
}

#[test]
fn test_client_rejects_invalid_base_url() {
    let config = Config { base_url: "::not a url".to_string(), ..Config::default() };
    assert!(matches!(OpenAlexClient::new(config), Err(ClientError::InvalidConfig(_))));
}

#[test]
fn test_client_debug_hides_transport() {
    let client = OpenAlexClient::new(Config::default()).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("OpenAlexClient"));
    assert!(debug.contains("api.openalex.org"));
}
