//! OpenAlex API client
//!
//! An async client for the OpenAlex scholarly metadata API. Fetches works,
//! authors, institutions, venues and concepts by id, batches id lookups,
//! walks cursor-paginated listings and hydrates the dehydrated references
//! embedded in entity payloads.
//!
//! # Features
//!
//! - **Id classification**: OpenAlex ids are typed by their one-letter prefix
//! - **Batching**: up to `page_limit` ids per request via `openalex_id` filters
//! - **Cursor pagination**: search, citations and associated works, with limits
//! - **Retries**: exponential backoff on timeouts and refused connections
//! - **Polite pool**: contact email sent in the User-Agent
//!
//! # Example
//!
//! ```no_run
//! use openalex_client::{config::Config, OpenAlexClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = OpenAlexClient::new(config)?;
//!
//!     if let Some(work) = client.get_work("W2741809807").await? {
//!         let citing = client.cited_by_works(&work, Some(20)).await?;
//!         println!("{} is cited by {} works", work.title_or_default(), citing.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod id;
pub mod models;

pub use client::OpenAlexClient;
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use models::{AnyEntity, EntityType};
