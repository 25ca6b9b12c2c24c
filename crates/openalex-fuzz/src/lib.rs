//! Fuzzing library for openalex-client.
//!
//! Targets cover identifier parsing and the lenient JSON decoders of the
//! entity models and list envelopes.
//!
//! # Usage
//!
//! ```bash
//! cd crates/openalex-fuzz
//! cargo +nightly fuzz run fuzz_id_parse -- -max_total_time=60
//! ```

pub use openalex_client::{id, models};
