//! # LS-8 Virtual Machine
//!
//! A small 8-bit virtual machine that loads a binary-encoded program into a
//! fixed-size memory and runs it through a fetch-decode-execute loop.
//!
//! The machine has:
//! - 255 bytes of memory (configurable via [`FlatMemory::with_capacity`])
//! - eight general-purpose 8-bit registers, `R0`..`R7`
//! - a program counter
//! - three comparison flags: Equal, Less-than, Greater-than
//!
//! ## Quick Start
//!
//! ```rust
//! use ls8::{parse_program, FlatMemory, CPU};
//!
//! let source = "
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ";
//!
//! let program = parse_program(source).unwrap();
//! let mut cpu = CPU::new(FlatMemory::new());
//! cpu.load_program(&program).unwrap();
//!
//! let mut out = Vec::new();
//! cpu.run(&mut out).unwrap();
//! assert_eq!(out, b"8\n");
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and the flat, bounds-checked implementation
//! - `opcodes` - Opcode enumeration and metadata table
//! - `loader` - Program file parsing
//! - `disassembler` - Byte stream to mnemonic listing
//! - `wasm` - JavaScript bindings (behind the `wasm` feature)

pub mod cpu;
pub mod disassembler;
pub mod loader;
pub mod memory;
pub mod opcodes;

pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use cpu::{Flags, StepOutcome, CPU, REGISTER_COUNT};
pub use disassembler::{disassemble, format_instruction, format_line, Instruction};
pub use instructions::alu::AluOp;
pub use loader::{load_program, parse_program, LoadError};
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{Opcode, OpcodeMetadata, OPCODE_TABLE};

/// Errors that can occur during CPU execution.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// The byte at PC is not a recognized instruction.
    #[error("unsupported opcode 0b{opcode:08b} (0x{opcode:02X}) at PC {pc}")]
    UnsupportedOpcode { opcode: u8, pc: usize },

    /// The ALU was asked to perform an operation it does not implement.
    ///
    /// Only reachable through [`AluOp::try_from`]; the execution engine
    /// itself never requests an unsupported operation.
    #[error("unsupported ALU operation 0b{0:08b}")]
    UnsupportedAluOperation(u8),

    /// A memory read or write fell outside the memory capacity.
    #[error("memory address {address} out of range (capacity {capacity})")]
    AddressOutOfRange { address: usize, capacity: usize },

    /// An instruction named a register outside `R0`..`R7`.
    #[error("register R{0} out of range")]
    RegisterOutOfRange(u8),

    /// The step budget given to `run_for_steps` ran out before HLT.
    #[error("no HLT after {0} instructions")]
    StepLimitExceeded(u64),

    /// PRN could not write to the output stream.
    #[error("failed to write program output: {0}")]
    Output(#[from] std::io::Error),
}
