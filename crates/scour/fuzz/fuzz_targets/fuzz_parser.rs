//! Fuzz target for the loader and the full cleaning run.
//!
//! Arbitrary bytes must either load and clean or fail with a structural
//! error. Nothing may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scour::{Parser, ParserConfig, Scour, ScourConfig};
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let parser = Parser::with_config(ParserConfig {
        delimiter: None,
        ..ParserConfig::default()
    });
    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            let _ = parser.parse_file(temp_file.path());

            let scour = Scour::with_config(ScourConfig::default());
            let _ = scour.clean(temp_file.path());
        }
    }
});
