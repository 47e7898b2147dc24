//! Fuzz target for assets-file parsing.
//!
//! The parser may reject input but must never panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_assets_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = lockdiag_assets::fuzz::parse_assets_json(text);
        let _ = lockdiag_assets::fuzz::normalize_version(text);
    }
});
