//! Fuzz target for the program loader.
//!
//! Feeds arbitrary text to the parser to find panics in comment stripping
//! and literal parsing.

#![no_main]

use ls8::parse_program;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let source = String::from_utf8_lossy(data);

    if let Ok(program) = parse_program(&source) {
        // Never more bytes than non-empty lines
        assert!(program.len() <= source.lines().count());
    }
});
