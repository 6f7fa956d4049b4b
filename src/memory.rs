//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from a
//! specific memory implementation, and `FlatMemory`, a single contiguous
//! block of RAM.
//!
//! ## Design Principles
//!
//! Unlike real hardware buses, every access is bounds-checked:
//! - Reads and writes at or past `capacity()` fail with
//!   `ExecutionError::AddressOutOfRange`
//! - Cells that were never written read as zero
//! - A failed write leaves memory untouched

use crate::{ExecutionError, LoadError};

/// Default memory capacity in bytes.
///
/// Addresses run from 0 to `MEMORY_SIZE - 1`, so every valid address fits
/// in a single register.
pub const MEMORY_SIZE: usize = 255;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use ls8::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x10, 0x42).unwrap();
/// assert_eq!(mem.read(0x10).unwrap(), 0x42);
///
/// // Past the end of memory
/// assert!(mem.read(255).is_err());
/// ```
pub trait MemoryBus {
    /// Number of addressable bytes.
    fn capacity(&self) -> usize;

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// `ExecutionError::AddressOutOfRange` if `addr >= capacity()`.
    fn read(&self, addr: usize) -> Result<u8, ExecutionError>;

    /// Writes `value` to `addr`.
    ///
    /// # Errors
    ///
    /// `ExecutionError::AddressOutOfRange` if `addr >= capacity()`.
    fn write(&mut self, addr: usize, value: u8) -> Result<(), ExecutionError>;

    /// Copies `program` into memory starting at address 0.
    ///
    /// Either the whole program is written or memory is left untouched.
    ///
    /// # Errors
    ///
    /// `LoadError::ProgramTooLarge` if `program` is longer than `capacity()`.
    fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        let capacity = self.capacity();
        let too_large = || LoadError::ProgramTooLarge {
            len: program.len(),
            capacity,
        };

        if program.len() > capacity {
            return Err(too_large());
        }

        for (addr, &byte) in program.iter().enumerate() {
            self.write(addr, byte).map_err(|_| too_large())?;
        }
        Ok(())
    }
}

/// Flat, zero-initialized RAM.
///
/// # Examples
///
/// ```
/// use ls8::{FlatMemory, MemoryBus, MEMORY_SIZE};
///
/// let mem = FlatMemory::new();
/// assert_eq!(mem.capacity(), MEMORY_SIZE);
///
/// let small = FlatMemory::with_capacity(16);
/// assert_eq!(small.capacity(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatMemory {
    data: Vec<u8>,
}

impl FlatMemory {
    /// Creates a memory of `MEMORY_SIZE` bytes, all zero.
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_SIZE)
    }

    /// Creates a zeroed memory of `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
        }
    }

    /// Returns the raw memory contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    fn check(&self, addr: usize) -> Result<(), ExecutionError> {
        if addr < self.data.len() {
            Ok(())
        } else {
            Err(ExecutionError::AddressOutOfRange {
                address: addr,
                capacity: self.data.len(),
            })
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn capacity(&self) -> usize {
        self.data.len()
    }

    fn read(&self, addr: usize) -> Result<u8, ExecutionError> {
        self.check(addr)?;
        Ok(self.data[addr])
    }

    fn write(&mut self, addr: usize, value: u8) -> Result<(), ExecutionError> {
        self.check(addr)?;
        self.data[addr] = value;
        Ok(())
    }

    fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > self.data.len() {
            return Err(LoadError::ProgramTooLarge {
                len: program.len(),
                capacity: self.data.len(),
            });
        }

        self.data[..program.len()].copy_from_slice(program);
        Ok(())
    }
}
