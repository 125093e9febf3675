//! Fuzz target for the loader and the full analysis.
//!
//! This fuzzer tests that:
//! 1. The CSV/TSV parser never panics on malformed input
//! 2. Column typing (numbers, dates, text) copes with any cell content
//! 3. Every successfully loaded table can be analyzed

#![no_main]

use autoeda::{Explorer, Parser};
use libfuzzer_sys::fuzz_target;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    // Write to temp file for parsing
    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            let path = temp_file.path();

            // Try parsing with auto-detection, then the whole pipeline
            if let Ok((table, _)) = Parser::new().parse_file(path) {
                let _ = Explorer::new().analyze_table(&table);
            }
        }
    }
});
