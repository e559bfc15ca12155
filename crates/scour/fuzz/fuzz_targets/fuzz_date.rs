//! Fuzz target for day-first date parsing.
//!
//! The parser must never panic, and anything it accepts must survive a
//! round trip through its ISO rendering.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scour::clean::parse_day_first;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1_000 {
        return;
    }

    if let Ok(value) = std::str::from_utf8(data) {
        if let Some(date) = parse_day_first(value) {
            let iso = date.format("%Y-%m-%d").to_string();
            assert_eq!(parse_day_first(&iso), Some(date));
        }
    }
});
