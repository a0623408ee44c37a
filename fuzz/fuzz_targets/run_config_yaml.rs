//! Fuzz harness for run config deserialization

#![no_main]

use libfuzzer_sys::fuzz_target;
use redblack_config::RunConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(config) = serde_yaml::from_str::<RunConfig>(input) {
        // Whatever parsed must serialize back out.
        serde_yaml::to_string(&config).expect("parsed config should serialize");
    }
});
