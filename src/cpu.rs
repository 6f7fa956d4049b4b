//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the LS-8 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: eight 8-bit general-purpose registers, `R0`..`R7`
//! - **Program counter** (PC): address of the next instruction byte
//! - **Flags**: Equal, Less-than, Greater-than (set only by CMP)
//! - **Instruction counter**: number of instructions executed
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction
//! - `run()`: Execute until HLT
//! - `run_for_steps()`: Execute until HLT or the step budget is exhausted
//!
//! Only the operand bytes the decoded opcode declares are fetched, so an
//! instruction at the very end of memory never reads past it.

use std::io::Write;

use crate::instructions::{alu, branches, control, io, load_store};
use crate::{ExecutionError, LoadError, MemoryBus, Opcode};

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Comparison flags written by CMP.
///
/// After a CMP exactly one flag is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Set if `regA == regB`.
    pub equal: bool,

    /// Set if `regA < regB`.
    pub less: bool,

    /// Set if `regA > regB`.
    pub greater: bool,
}

impl Flags {
    /// Returns the flags packed as the LS-8 `FL` register.
    ///
    /// Bit layout (`00000LGE`):
    /// - Bit 2: L (Less-than)
    /// - Bit 1: G (Greater-than)
    /// - Bit 0: E (Equal)
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::Flags;
    ///
    /// let flags = Flags { equal: false, less: true, greater: false };
    /// assert_eq!(flags.bits(), 0b100);
    /// ```
    pub fn bits(&self) -> u8 {
        let mut bits = 0;

        if self.less {
            bits |= 0b100;
        }
        if self.greater {
            bits |= 0b010;
        }
        if self.equal {
            bits |= 0b001;
        }

        bits
    }

    /// Clears all three flags.
    pub fn clear(&mut self) {
        *self = Flags::default();
    }
}

/// What happened during a single `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction executed and the machine is still running.
    Continued,

    /// HLT was executed (now or earlier); the machine is stopped.
    Halted,
}

/// LS-8 CPU state and execution context.
///
/// The CPU owns its memory exclusively for the duration of a run. It is
/// generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use ls8::{FlatMemory, MemoryBus, CPU};
///
/// let cpu = CPU::new(FlatMemory::new());
///
/// assert_eq!(cpu.pc(), 0);
/// assert_eq!(cpu.registers(), &[0; 8]);
/// assert_eq!(cpu.flags().bits(), 0);
/// assert!(!cpu.halted());
/// ```
pub struct CPU<M: MemoryBus> {
    /// General-purpose registers R0..R7
    pub(crate) registers: [u8; REGISTER_COUNT],

    /// Program counter (address of next instruction)
    pub(crate) pc: usize,

    /// Comparison flags
    pub(crate) flags: Flags,

    /// Set once HLT executes
    pub(crate) halted: bool,

    /// Total instructions executed
    pub(crate) instructions: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with all registers, flags and the PC zeroed.
    pub fn new(memory: M) -> Self {
        Self {
            registers: [0; REGISTER_COUNT],
            pc: 0,
            flags: Flags::default(),
            halted: false,
            instructions: 0,
            memory,
        }
    }

    /// Copies `program` into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// `LoadError::ProgramTooLarge` if the program does not fit in memory.
    /// Memory is left untouched in that case.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), LoadError> {
        self.memory.load(program)?;

        log::debug!("loaded {} program bytes", program.len());
        Ok(())
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC
    /// 2. Decode it against the opcode table
    /// 3. Fetch the operand bytes the opcode declares
    /// 4. Execute, then advance PC unless the instruction set it itself
    ///
    /// Calling `step()` on a halted CPU does nothing and returns `Halted`.
    ///
    /// # Errors
    ///
    /// - `UnsupportedOpcode` if the byte at PC is not an instruction; PC is
    ///   left pointing at it
    /// - `AddressOutOfRange` / `RegisterOutOfRange` for bad operands
    /// - `Output` if PRN fails to write
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{FlatMemory, StepOutcome, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load_program(&[0b1000_0010, 0, 42, 0b0000_0001]).unwrap(); // LDI R0,42; HLT
    ///
    /// let mut out = Vec::new();
    /// assert_eq!(cpu.step(&mut out).unwrap(), StepOutcome::Continued);
    /// assert_eq!(cpu.register(0).unwrap(), 42);
    /// assert_eq!(cpu.pc(), 3);
    /// assert_eq!(cpu.step(&mut out).unwrap(), StepOutcome::Halted);
    /// ```
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<StepOutcome, ExecutionError> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{}", self.trace());
        }

        // Fetch
        let pc = self.pc;
        let ir = self.memory.read(pc)?;

        // Decode
        let opcode =
            Opcode::from_byte(ir).ok_or(ExecutionError::UnsupportedOpcode { opcode: ir, pc })?;
        let metadata = opcode.metadata();

        let mut operands = [0u8; 2];
        for (i, operand) in operands
            .iter_mut()
            .take(metadata.operand_count as usize)
            .enumerate()
        {
            *operand = self.memory.read(pc + 1 + i)?;
        }

        // Execute
        match opcode {
            Opcode::Hlt => control::execute_hlt(self),
            Opcode::Ldi => load_store::execute_ldi(self, operands)?,
            Opcode::Prn => io::execute_prn(self, operands, out)?,
            Opcode::Mul => alu::execute(self, alu::AluOp::Mul, operands)?,
            Opcode::Cmp => alu::execute(self, alu::AluOp::Cmp, operands)?,
            Opcode::Jmp => control::execute_jmp(self, operands)?,
            Opcode::Jeq => branches::execute_jeq(self, operands)?,
            Opcode::Jne => branches::execute_jne(self, operands)?,
        }

        self.instructions += 1;

        if self.halted {
            log::debug!("HLT at PC {} after {} instructions", pc, self.instructions);
            return Ok(StepOutcome::Halted);
        }

        if !metadata.sets_pc {
            self.pc = pc + metadata.size_bytes();
        }

        Ok(StepOutcome::Continued)
    }

    /// Runs until HLT, returning the number of instructions executed by
    /// this call.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<u64, ExecutionError> {
        let start = self.instructions;

        while self.step(out)? == StepOutcome::Continued {}

        Ok(self.instructions - start)
    }

    /// Runs at most `budget` instructions.
    ///
    /// Stops early on HLT. Execution is only ever interrupted between
    /// instructions; check `halted()` afterwards to tell the two cases apart.
    ///
    /// # Returns
    ///
    /// The number of instructions executed by this call.
    pub fn run_for_steps<W: Write>(
        &mut self,
        budget: u64,
        out: &mut W,
    ) -> Result<u64, ExecutionError> {
        let start = self.instructions;

        while self.instructions - start < budget {
            if self.step(out)? == StepOutcome::Halted {
                break;
            }
        }

        Ok(self.instructions - start)
    }

    /// Applies an ALU operation to two registers.
    ///
    /// This is the same path MUL and CMP take during execution.
    pub fn alu(&mut self, op: alu::AluOp, reg_a: u8, reg_b: u8) -> Result<(), ExecutionError> {
        alu::apply(self, op, reg_a, reg_b)
    }

    /// Renders the current state as a one-line trace:
    /// `TRACE: PC | IR A B | R0 .. R7`, all in hex.
    ///
    /// Bytes past the end of memory are shown as `--`.
    pub fn trace(&self) -> String {
        let byte_at = |addr: usize| match self.memory.read(addr) {
            Ok(b) => format!("{:02X}", b),
            Err(_) => "--".to_string(),
        };

        let mut line = format!(
            "TRACE: {:02X} | {} {} {} |",
            self.pc,
            byte_at(self.pc),
            byte_at(self.pc + 1),
            byte_at(self.pc + 2)
        );
        for reg in self.registers.iter() {
            line.push_str(&format!(" {:02X}", reg));
        }

        line
    }

    // ========== Register Access ==========

    /// Returns all registers.
    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.registers
    }

    /// Returns the value of register `index`.
    pub fn register(&self, index: u8) -> Result<u8, ExecutionError> {
        Ok(self.registers[register_index(index)?])
    }

    /// Sets register `index` to `value`.
    pub fn set_register(&mut self, index: u8, value: u8) -> Result<(), ExecutionError> {
        self.registers[register_index(index)?] = value;
        Ok(())
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, pc: usize) {
        self.pc = pc;
    }

    /// Returns the comparison flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Overwrites the comparison flags.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    /// Returns true once HLT has executed.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Returns the total number of instructions executed.
    pub fn instructions_executed(&self) -> u64 {
        self.instructions
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}

/// Validates a register operand.
pub(crate) fn register_index(index: u8) -> Result<usize, ExecutionError> {
    if (index as usize) < REGISTER_COUNT {
        Ok(index as usize)
    } else {
        Err(ExecutionError::RegisterOutOfRange(index))
    }
}
