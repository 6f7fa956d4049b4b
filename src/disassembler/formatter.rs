//! Formatting functions for disassembled instructions

use crate::disassembler::Instruction;
use crate::opcodes::Opcode;

/// Format a single instruction as assembly text
///
/// Register operands print as `R<n>` and LDI's immediate as decimal, e.g.
/// `LDI R0,8`, `MUL R0,R1`, `JEQ R2`, `HLT`.
pub fn format_instruction(instr: &Instruction) -> String {
    if instr.mnemonic == ".byte" {
        return format!(".byte {:08b}", instr.opcode);
    }

    let operands: Vec<String> = instr
        .operand_bytes
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            if i == 1 && Opcode::from_byte(instr.opcode) == Some(Opcode::Ldi) {
                b.to_string()
            } else {
                format!("R{}", b)
            }
        })
        .collect();

    if operands.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operands.join(","))
    }
}

/// Format an instruction as a listing line: address, raw bytes, assembly.
///
/// ```text
/// 00: 82 00 08  LDI R0,8
/// ```
pub fn format_line(instr: &Instruction) -> String {
    let raw: Vec<String> = std::iter::once(instr.opcode)
        .chain(if instr.mnemonic == ".byte" {
            Vec::new()
        } else {
            instr.operand_bytes.clone()
        })
        .map(|b| format!("{:02X}", b))
        .collect();

    format!(
        "{:02X}: {:<8}  {}",
        instr.address,
        raw.join(" "),
        format_instruction(instr)
    )
}
