//! Execution loop tests
//!
//! Verifies the fetch-decode-execute cycle, error handling and step budgets.

use ls8::{ExecutionError, FlatMemory, StepOutcome, CPU};

const LDI: u8 = 0b1000_0010;
const PRN: u8 = 0b0100_0111;
const JMP: u8 = 0b0101_0100;
const HLT: u8 = 0b0000_0001;

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(program).unwrap();
    cpu
}

#[test]
fn test_unsupported_opcode_reports_opcode_and_pc() {
    // LDI R0,1; <0xFF>
    let mut cpu = setup_cpu(&[LDI, 0, 1, 0xFF]);

    match cpu.run(&mut Vec::new()) {
        Err(ExecutionError::UnsupportedOpcode { opcode: 0xFF, pc: 3 }) => {}
        other => panic!("Expected UnsupportedOpcode at PC 3, got {:?}", other),
    }

    // PC is left on the offending byte and no further progress is made
    assert_eq!(cpu.pc(), 3);
    assert_eq!(cpu.instructions_executed(), 1);
    assert!(!cpu.halted());
}

#[test]
fn test_zeroed_memory_is_not_an_instruction() {
    let mut cpu = CPU::new(FlatMemory::new());

    assert!(matches!(
        cpu.step(&mut Vec::new()),
        Err(ExecutionError::UnsupportedOpcode { opcode: 0, pc: 0 })
    ));
}

#[test]
fn test_unsupported_opcode_error_message() {
    let err = ExecutionError::UnsupportedOpcode {
        opcode: 0b1010_0000,
        pc: 12,
    };
    assert_eq!(
        err.to_string(),
        "unsupported opcode 0b10100000 (0xA0) at PC 12"
    );
}

#[test]
fn test_running_off_the_end_of_memory() {
    // LDI R0,5 fills all of memory; the next fetch is out of range
    let mut cpu = CPU::new(FlatMemory::with_capacity(3));
    cpu.load_program(&[LDI, 0, 5]).unwrap();

    match cpu.run(&mut Vec::new()) {
        Err(ExecutionError::AddressOutOfRange {
            address: 3,
            capacity: 3,
        }) => {}
        other => panic!("Expected AddressOutOfRange, got {:?}", other),
    }
    assert_eq!(cpu.register(0).unwrap(), 5);
}

#[test]
fn test_truncated_instruction_fails_cleanly() {
    // LDI with its immediate missing at the end of memory
    let mut cpu = CPU::new(FlatMemory::with_capacity(2));
    cpu.load_program(&[LDI, 0]).unwrap();

    assert!(matches!(
        cpu.step(&mut Vec::new()),
        Err(ExecutionError::AddressOutOfRange { address: 2, .. })
    ));
    assert_eq!(cpu.register(0).unwrap(), 0);
    assert_eq!(cpu.pc(), 0);
}

#[test]
fn test_run_returns_instruction_count() {
    // LDI R0,3; PRN R0; HLT
    let mut cpu = setup_cpu(&[LDI, 0, 3, PRN, 0, HLT]);
    let mut out = Vec::new();

    assert_eq!(cpu.run(&mut out).unwrap(), 3);
    assert_eq!(out, b"3\n");
    assert_eq!(cpu.instructions_executed(), 3);
}

#[test]
fn test_run_for_steps_stops_at_budget() {
    // Infinite loop: JMP R0 (R0 = 0)
    let mut cpu = setup_cpu(&[JMP, 0]);

    assert_eq!(cpu.run_for_steps(100, &mut Vec::new()).unwrap(), 100);
    assert!(!cpu.halted());

    // Resuming continues at an instruction boundary
    assert_eq!(cpu.run_for_steps(10, &mut Vec::new()).unwrap(), 10);
    assert_eq!(cpu.instructions_executed(), 110);
}

#[test]
fn test_run_for_steps_stops_early_on_hlt() {
    let mut cpu = setup_cpu(&[LDI, 0, 1, HLT]);

    assert_eq!(cpu.run_for_steps(1000, &mut Vec::new()).unwrap(), 2);
    assert!(cpu.halted());
    assert_eq!(cpu.run_for_steps(1000, &mut Vec::new()).unwrap(), 0);
}

#[test]
fn test_step_outcomes() {
    let mut cpu = setup_cpu(&[LDI, 0, 1, HLT]);
    let mut out = Vec::new();

    assert_eq!(cpu.step(&mut out).unwrap(), StepOutcome::Continued);
    assert_eq!(cpu.step(&mut out).unwrap(), StepOutcome::Halted);
}
