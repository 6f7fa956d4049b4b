//! # Control Flow Instructions
//!
//! This module implements unconditional control flow:
//! - HLT: Halt
//! - JMP: Jump to the address held in a register

use crate::cpu::register_index;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the HLT (Halt) instruction.
///
/// Marks the CPU as halted. Registers, flags and PC are left as they are.
pub(crate) fn execute_hlt<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.halted = true;
}

/// Executes the JMP (Jump) instruction.
///
/// Sets PC to the value of the register named by the first operand. The
/// target is not validated here; a jump past the end of memory fails on
/// the next fetch.
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operands: [u8; 2],
) -> Result<(), ExecutionError> {
    cpu.pc = cpu.registers[register_index(operands[0])?] as usize;
    Ok(())
}
