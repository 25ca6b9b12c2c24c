#![no_main]

use libfuzzer_sys::fuzz_target;
use openalex_client::models::EntityType;

fuzz_target!(|data: &[u8]| {
    // First try to parse as valid JSON
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        // Then decode as each entity type; should only return Ok or Err
        for entity_type in EntityType::ALL {
            let _ = entity_type.decode(json.clone());
        }
    }
});
