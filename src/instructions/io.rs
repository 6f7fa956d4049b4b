//! # Output Instructions
//!
//! - PRN: Print register

use std::io::Write;

use crate::cpu::register_index;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the PRN (Print) instruction.
///
/// Writes the decimal value of the register named by the first operand,
/// followed by a newline.
pub(crate) fn execute_prn<M: MemoryBus, W: Write>(
    cpu: &CPU<M>,
    operands: [u8; 2],
    out: &mut W,
) -> Result<(), ExecutionError> {
    let value = cpu.registers[register_index(operands[0])?];
    writeln!(out, "{}", value)?;
    Ok(())
}
