//! LS-8 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics.

pub mod decoder;
pub mod formatter;

pub use formatter::{format_instruction, format_line};

/// A single disassembled instruction
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: usize,

    /// The opcode byte value
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDI", "PRN"), or ".byte" for data
    pub mnemonic: &'static str,

    /// Operand bytes (0-2 depending on the opcode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (opcode + operands)
    pub size_bytes: usize,
}

/// Disassemble a byte slice into a vector of instructions
///
/// Bytes that are not a valid opcode, or an instruction cut short by the end
/// of `bytes`, become one-byte `.byte` entries so that decoding can continue.
///
/// # Examples
///
/// ```
/// use ls8::{disassemble, format_instruction};
///
/// let listing: Vec<String> = disassemble(&[0b1000_0010, 0, 8, 0b0000_0001])
///     .iter()
///     .map(format_instruction)
///     .collect();
/// assert_eq!(listing, vec!["LDI R0,8", "HLT"]);
/// ```
pub fn disassemble(bytes: &[u8]) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut pc = 0;

    while pc < bytes.len() {
        match decoder::decode_instruction(&bytes[pc..], pc) {
            Some(instr) => {
                pc += instr.size_bytes;
                instructions.push(instr);
            }
            None => {
                instructions.push(Instruction {
                    address: pc,
                    opcode: bytes[pc],
                    mnemonic: ".byte",
                    operand_bytes: vec![bytes[pc]],
                    size_bytes: 1,
                });
                pc += 1;
            }
        }
    }

    instructions
}
