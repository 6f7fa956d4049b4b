//! Tests for the PRN (Print) instruction.

use std::io::{self, Write};

use ls8::{ExecutionError, FlatMemory, CPU};

const LDI: u8 = 0b1000_0010;
const PRN: u8 = 0b0100_0111;

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(program).unwrap();
    cpu
}

/// Writer that refuses every write
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_prn_writes_decimal_line() {
    // LDI R5,200; PRN R5
    let mut cpu = setup_cpu(&[LDI, 0x05, 200, PRN, 0x05]);
    let mut out = Vec::new();

    cpu.step(&mut out).unwrap();
    cpu.step(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "200\n");
    assert_eq!(cpu.pc(), 5);
}

#[test]
fn test_prn_zero_register() {
    let mut cpu = setup_cpu(&[PRN, 0x07]);
    let mut out = Vec::new();

    cpu.step(&mut out).unwrap();

    assert_eq!(out, b"0\n");
    assert_eq!(cpu.pc(), 2);
}

#[test]
fn test_prn_output_in_execution_order() {
    // LDI R0,1; PRN R0; LDI R0,2; PRN R0
    let mut cpu = setup_cpu(&[LDI, 0, 1, PRN, 0, LDI, 0, 2, PRN, 0]);
    let mut out = Vec::new();

    for _ in 0..4 {
        cpu.step(&mut out).unwrap();
    }

    assert_eq!(out, b"1\n2\n");
}

#[test]
fn test_prn_write_failure() {
    let mut cpu = setup_cpu(&[PRN, 0x00]);

    match cpu.step(&mut BrokenPipe) {
        Err(ExecutionError::Output(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("Expected Output error, got {:?}", other),
    }
}
