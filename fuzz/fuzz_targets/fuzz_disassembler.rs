//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding.

#![no_main]

use ls8::{disassemble, format_line};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|bytes: &[u8]| {
    let instructions = disassemble(bytes);

    let mut expected_address = 0;
    for instr in &instructions {
        // Instructions are contiguous
        assert_eq!(instr.address, expected_address);

        // Size should be 1-3 bytes
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);
        assert!(instr.operand_bytes.len() <= instr.size_bytes);

        let _ = format_line(instr);
        expected_address += instr.size_bytes;
    }

    // Total size should equal input size
    assert_eq!(expected_address, bytes.len());
});
