#![no_main]
use libfuzzer_sys::fuzz_target;

use gangway::{HostValue, normalize};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(payload) = serde_json::from_str::<serde_json::Value>(s) {
            let host = HostValue::from(payload);
            // JSON input contains only supported tags, so the only
            // acceptable failure is the depth guard.
            match normalize(&host) {
                Ok(tree) => {
                    // Idempotence: re-normalizing the output is a fixpoint.
                    let again = normalize(&HostValue::from(tree.to_json()))
                        .expect("normalized output must re-normalize");
                    if again != normalize(&HostValue::from(again.to_json())).unwrap() {
                        panic!("normalization is not idempotent");
                    }
                }
                Err(gangway::Error::DepthExceeded { .. }) => {}
                Err(e) => panic!("unexpected normalization failure: {e}"),
            }
        }
    }
});
