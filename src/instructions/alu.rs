//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements the register-to-register operations:
//! - ADD: Add
//! - MUL: Multiply
//! - CMP: Compare
//!
//! Arithmetic wraps modulo 256. CMP leaves the registers untouched and sets
//! exactly one of the E, L, G flags.

use crate::cpu::register_index;
use crate::{ExecutionError, MemoryBus, Opcode, CPU};

/// Operations the ALU can perform.
///
/// Converting from an instruction byte accepts only the ALU opcodes:
///
/// ```
/// use ls8::{AluOp, ExecutionError};
///
/// assert_eq!(AluOp::try_from(0b1010_0010).unwrap(), AluOp::Mul);
/// assert!(matches!(
///     AluOp::try_from(0b1000_0010), // LDI
///     Err(ExecutionError::UnsupportedAluOperation(0b1000_0010))
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// `regA = regA + regB`
    Add,
    /// `regA = regA * regB`
    Mul,
    /// Set flags from `regA` compared to `regB`
    Cmp,
}

impl AluOp {
    /// Instruction byte for ADD. ADD has no dispatch entry in the execution
    /// loop; it is reachable through [`CPU::alu`].
    pub const ADD_OPCODE: u8 = 0b1010_0000;
}

impl TryFrom<u8> for AluOp {
    type Error = ExecutionError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            AluOp::ADD_OPCODE => Ok(AluOp::Add),
            b if b == Opcode::Mul as u8 => Ok(AluOp::Mul),
            b if b == Opcode::Cmp as u8 => Ok(AluOp::Cmp),
            other => Err(ExecutionError::UnsupportedAluOperation(other)),
        }
    }
}

/// Applies `op` to registers `reg_a` and `reg_b`.
pub(crate) fn apply<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: AluOp,
    reg_a: u8,
    reg_b: u8,
) -> Result<(), ExecutionError> {
    let a = register_index(reg_a)?;
    let b = register_index(reg_b)?;
    let (x, y) = (cpu.registers[a], cpu.registers[b]);

    match op {
        AluOp::Add => cpu.registers[a] = x.wrapping_add(y),
        AluOp::Mul => cpu.registers[a] = x.wrapping_mul(y),
        AluOp::Cmp => {
            // Flags from an earlier CMP must not leak into this one
            cpu.flags.clear();

            if x == y {
                cpu.flags.equal = true;
            } else if x < y {
                cpu.flags.less = true;
            } else {
                cpu.flags.greater = true;
            }
        }
    }

    Ok(())
}

/// Executes an ALU instruction with its two register operands.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    op: AluOp,
    operands: [u8; 2],
) -> Result<(), ExecutionError> {
    apply(cpu, op, operands[0], operands[1])
}
