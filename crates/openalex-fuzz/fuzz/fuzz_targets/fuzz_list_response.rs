#![no_main]

use libfuzzer_sys::fuzz_target;
use openalex_client::models::{ListResponse, Work};

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<ListResponse<Work>>(data);
});
