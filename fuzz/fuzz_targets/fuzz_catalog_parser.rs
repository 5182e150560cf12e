//! Fuzz target for `catalog.xml` parsing and SWC archive reading.
//!
//! Goal: Neither entry point should **ever panic**; malformed input is an error.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_catalog_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = swcv_archive::fuzz::read_archive_bytes(data);

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = swcv_archive::fuzz::parse_catalog_text(text);
    }
});
