#![no_main]
use std::ffi::OsString;

use btrcompressor::cli::args::parse_args_from;
use btrcompressor::CompressionSetting;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // NUL-separated words form argv. Parsing and validation must never panic,
    // and any accepted configuration must carry a positive thread count.
    let text = String::from_utf8_lossy(data);
    let argv: Vec<OsString> = text.split('\0').map(OsString::from).collect();

    if let Ok(parsed) = parse_args_from("btrcompressor", &argv) {
        if parsed.exit_early {
            return;
        }
        if let Ok(config) = parsed.into_config() {
            assert!(config.threads >= 1);
            assert_eq!(
                CompressionSetting::normalize(config.setting.as_str()),
                Ok(config.setting)
            );
        }
    }
});
