//! # LS-8 Instruction Implementations
//!
//! This module contains the implementations of all LS-8 instructions, organized
//! by category. Each instruction is a standalone function taking a mutable
//! reference to the CPU and the operand bytes fetched for it.
//!
//! PC advancement is left to the execution loop except for instructions whose
//! metadata has `sets_pc`, which write the PC themselves.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and comparison (ADD, MUL, CMP)
//! - **branches**: Conditional jumps on the Equal flag (JEQ, JNE)
//! - **control**: Unconditional control flow (JMP, HLT)
//! - **io**: Program output (PRN)
//! - **load_store**: Register loads (LDI)

pub mod alu;
pub mod branches;
pub mod control;
pub mod io;
pub mod load_store;
