//! WebAssembly bindings for the LS-8 virtual machine.
//!
//! This module provides JavaScript-callable interfaces to the VM, enabling
//! browser-based loading and execution of `.ls8` programs.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Ls8Emulator;
