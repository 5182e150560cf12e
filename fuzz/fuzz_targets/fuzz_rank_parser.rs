//! Fuzz target for the package order notation parser.
//!
//! Goal: The parser should **never panic** on any input, and the string and
//! character-stream entry points must agree.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_rank_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use swcv_domain::RankTable;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let from_str = RankTable::parse(text);
        let from_reader = RankTable::from_reader(text.as_bytes());

        match (from_str, from_reader) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a, b);
                for rank in 0..a.rank_count() {
                    for name in a.packages_at_rank(rank) {
                        assert!(a.rank(name).is_some());
                    }
                }
            }
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            _ => panic!("parse entry points disagree"),
        }
    }
});
