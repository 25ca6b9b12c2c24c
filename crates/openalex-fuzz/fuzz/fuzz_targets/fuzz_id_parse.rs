#![no_main]

use libfuzzer_sys::fuzz_target;
use openalex_client::id::{EntityId, classify, strip_namespace};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let once = strip_namespace(raw);
    assert_eq!(strip_namespace(once), once);

    // A parsed canonical id agrees with `classify`
    if let Ok(id) = EntityId::parse(raw) {
        if let Some(entity_type) = id.entity_type() {
            assert_eq!(classify(raw).ok(), Some(entity_type));
        }
    }
});
