//! # Opcode Metadata Table
//!
//! This module is the single source of truth for the LS-8 instruction set.
//!
//! LS-8 opcodes are self-describing bytes laid out as `AABCDDDD`:
//! - `AA`: number of operand bytes that follow (0-2)
//! - `B`: 1 if the instruction is handled by the ALU
//! - `C`: 1 if the instruction sets the PC itself
//! - `DDDD`: instruction identifier
//!
//! Each opcode entry includes:
//! - Mnemonic (instruction name)
//! - Operand count
//! - Whether the instruction writes the PC directly

/// The closed set of instructions this machine executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `HLT`: stop execution.
    Hlt = 0b0000_0001,
    /// `PRN reg`: print a register as decimal.
    Prn = 0b0100_0111,
    /// `JMP reg`: jump to the address held in a register.
    Jmp = 0b0101_0100,
    /// `JEQ reg`: jump if the Equal flag is set.
    Jeq = 0b0101_0101,
    /// `JNE reg`: jump if the Equal flag is clear.
    Jne = 0b0101_0110,
    /// `LDI reg, imm`: load an immediate value.
    Ldi = 0b1000_0010,
    /// `MUL regA, regB`: multiply two registers into `regA`.
    Mul = 0b1010_0010,
    /// `CMP regA, regB`: compare two registers and set flags.
    Cmp = 0b1010_0111,
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use ls8::{Opcode, OPCODE_TABLE};
///
/// let ldi = Opcode::Ldi.metadata();
/// assert_eq!(ldi.mnemonic, "LDI");
/// assert_eq!(ldi.operand_count, 2);
/// assert_eq!(ldi.size_bytes(), 3);
/// assert!(!ldi.sets_pc);
///
/// assert_eq!(OPCODE_TABLE.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// The instruction this entry describes.
    pub opcode: Opcode,

    /// Three-letter instruction name.
    pub mnemonic: &'static str,

    /// Number of operand bytes following the opcode byte.
    pub operand_count: u8,

    /// Whether the instruction manages the PC itself instead of the
    /// engine advancing it.
    pub sets_pc: bool,
}

impl OpcodeMetadata {
    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> usize {
        1 + self.operand_count as usize
    }
}

const fn entry(
    opcode: Opcode,
    mnemonic: &'static str,
    operand_count: u8,
    sets_pc: bool,
) -> OpcodeMetadata {
    OpcodeMetadata {
        opcode,
        mnemonic,
        operand_count,
        sets_pc,
    }
}

const HLT: OpcodeMetadata = entry(Opcode::Hlt, "HLT", 0, false);
const PRN: OpcodeMetadata = entry(Opcode::Prn, "PRN", 1, false);
const JMP: OpcodeMetadata = entry(Opcode::Jmp, "JMP", 1, true);
const JEQ: OpcodeMetadata = entry(Opcode::Jeq, "JEQ", 1, true);
const JNE: OpcodeMetadata = entry(Opcode::Jne, "JNE", 1, true);
const LDI: OpcodeMetadata = entry(Opcode::Ldi, "LDI", 2, false);
const MUL: OpcodeMetadata = entry(Opcode::Mul, "MUL", 2, false);
const CMP: OpcodeMetadata = entry(Opcode::Cmp, "CMP", 2, false);

/// Every supported instruction, ordered by opcode byte.
pub const OPCODE_TABLE: [OpcodeMetadata; 8] = [HLT, PRN, JMP, JEQ, JNE, LDI, MUL, CMP];

impl Opcode {
    /// Decodes an instruction byte, returning `None` for anything outside
    /// the instruction set.
    pub fn from_byte(byte: u8) -> Option<Opcode> {
        OPCODE_TABLE
            .iter()
            .find(|m| m.opcode as u8 == byte)
            .map(|m| m.opcode)
    }

    /// Looks up this opcode's table entry.
    pub fn metadata(self) -> &'static OpcodeMetadata {
        match self {
            Opcode::Hlt => &HLT,
            Opcode::Prn => &PRN,
            Opcode::Jmp => &JMP,
            Opcode::Jeq => &JEQ,
            Opcode::Jne => &JNE,
            Opcode::Ldi => &LDI,
            Opcode::Mul => &MUL,
            Opcode::Cmp => &CMP,
        }
    }

    /// Looks up an opcode by mnemonic, ignoring case.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Opcode> {
        OPCODE_TABLE
            .iter()
            .find(|m| m.mnemonic.eq_ignore_ascii_case(mnemonic))
            .map(|m| m.opcode)
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        opcode as u8
    }
}
