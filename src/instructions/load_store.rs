//! # Load Instructions
//!
//! - LDI: Load Immediate

use crate::cpu::register_index;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the LDI (Load Immediate) instruction.
///
/// Stores the second operand byte in the register named by the first.
/// No flags are affected.
pub(crate) fn execute_ldi<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operands: [u8; 2],
) -> Result<(), ExecutionError> {
    let [reg, value] = operands;
    cpu.registers[register_index(reg)?] = value;
    Ok(())
}
