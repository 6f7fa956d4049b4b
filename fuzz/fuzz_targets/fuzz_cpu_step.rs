//! Fuzz target for CPU execution.
//!
//! This target creates arbitrary register/flag states and memory contents,
//! then runs a bounded number of instructions to find panics.

#![no_main]

use arbitrary::Arbitrary;
use ls8::{Flags, FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    registers: [u8; 8],
    pc: u8,
    flag_e: bool,
    flag_l: bool,
    flag_g: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: Vec<u8>,
    capacity: u8,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::with_capacity(input.capacity as usize);
    for (addr, &byte) in input.memory.iter().enumerate() {
        // Bytes past the capacity are rejected, never written
        let _ = memory.write(addr, byte);
    }

    let mut cpu = CPU::new(memory);
    for (reg, &value) in input.cpu_state.registers.iter().enumerate() {
        cpu.set_register(reg as u8, value).unwrap();
    }
    cpu.set_pc(input.cpu_state.pc as usize);
    cpu.set_flags(Flags {
        equal: input.cpu_state.flag_e,
        less: input.cpu_state.flag_l,
        greater: input.cpu_state.flag_g,
    });

    let before = cpu.instructions_executed();
    let _ = cpu.run_for_steps(input.steps as u64, &mut std::io::sink());

    assert!(cpu.instructions_executed() - before <= input.steps as u64);
});
