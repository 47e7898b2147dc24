//! Fuzz target for `,`/`;` separated code lists.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_code_set
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let set = lockdiag_domain::parse_code_set(Some(text));
        // Every member must round-trip through its canonical spelling.
        for code in set.iter() {
            let again = lockdiag_domain::parse_code_set(Some(code.as_str()));
            assert_eq!(again.iter().collect::<Vec<_>>(), vec![code]);
        }
    }
});
