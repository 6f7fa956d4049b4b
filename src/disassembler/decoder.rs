//! Instruction decoder for the LS-8 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::Opcode;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// Some(Instruction) if the opcode is valid and all its operands are present
pub fn decode_instruction(bytes: &[u8], address: usize) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = Opcode::from_byte(opcode)?.metadata();

    let operand_count = metadata.operand_count as usize;
    if rest.len() < operand_count {
        return None;
    }

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        operand_bytes: rest[..operand_count].to_vec(),
        size_bytes: metadata.size_bytes(),
    })
}
