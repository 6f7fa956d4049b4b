//! # Branch Instructions
//!
//! This module implements conditional jumps on the Equal flag:
//! - JEQ: Jump if Equal
//! - JNE: Jump if Not Equal
//!
//! Both read a single register operand holding the target address. When the
//! branch is not taken, PC moves past the two-byte instruction.

use crate::cpu::register_index;
use crate::{ExecutionError, MemoryBus, Opcode, CPU};

fn branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: Opcode,
    operands: [u8; 2],
    taken: bool,
) -> Result<(), ExecutionError> {
    // Validate the register even when the branch falls through
    let target = cpu.registers[register_index(operands[0])?];

    if taken {
        cpu.pc = target as usize;
    } else {
        cpu.pc += opcode.metadata().size_bytes();
    }

    Ok(())
}

/// Executes the JEQ (Jump if Equal) instruction.
pub(crate) fn execute_jeq<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operands: [u8; 2],
) -> Result<(), ExecutionError> {
    let taken = cpu.flags.equal;
    branch(cpu, Opcode::Jeq, operands, taken)
}

/// Executes the JNE (Jump if Not Equal) instruction.
pub(crate) fn execute_jne<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operands: [u8; 2],
) -> Result<(), ExecutionError> {
    let taken = !cpu.flags.equal;
    branch(cpu, Opcode::Jne, operands, taken)
}
