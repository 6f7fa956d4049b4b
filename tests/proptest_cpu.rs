//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that instructions maintain their
//! invariants across all register values and flag states.

use ls8::{Flags, FlatMemory, CPU, OPCODE_TABLE};
use proptest::prelude::*;

const LDI: u8 = 0b1000_0010;
const MUL: u8 = 0b1010_0010;
const CMP: u8 = 0b1010_0111;
const JEQ: u8 = 0b0101_0101;
const JNE: u8 = 0b0101_0110;

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(program).unwrap();
    cpu
}

fn any_flags() -> impl Strategy<Value = Flags> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(equal, less, greater)| Flags {
        equal,
        less,
        greater,
    })
}

/// Opcodes that never write the PC themselves
fn non_branching_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .filter(|m| !m.sets_pc && m.mnemonic != "HLT")
        .map(|m| m.opcode as u8)
        .collect()
}

proptest! {
    /// Property: LDI loads the immediate and advances PC by exactly 3
    #[test]
    fn prop_ldi_loads_immediate(reg in 0u8..8, value in any::<u8>()) {
        let mut cpu = setup_cpu(&[LDI, reg, value]);
        cpu.step(&mut Vec::new()).unwrap();

        prop_assert_eq!(cpu.register(reg).unwrap(), value);
        prop_assert_eq!(cpu.pc(), 3);
    }

    /// Property: MUL stores (x * y) mod 256 and leaves regB unchanged
    #[test]
    fn prop_mul_wraps(a in 0u8..8, b in 0u8..8, x in any::<u8>(), y in any::<u8>()) {
        prop_assume!(a != b);
        let mut cpu = setup_cpu(&[MUL, a, b]);
        cpu.set_register(a, x).unwrap();
        cpu.set_register(b, y).unwrap();

        cpu.step(&mut Vec::new()).unwrap();

        prop_assert_eq!(cpu.register(a).unwrap(), ((x as u16 * y as u16) % 256) as u8);
        prop_assert_eq!(cpu.register(b).unwrap(), y);
        prop_assert_eq!(cpu.pc(), 3);
    }

    /// Property: CMP leaves exactly one flag set, whatever came before
    #[test]
    fn prop_cmp_sets_exactly_one_flag(x in any::<u8>(), y in any::<u8>(), before in any_flags()) {
        let mut cpu = setup_cpu(&[CMP, 0, 1]);
        cpu.set_register(0, x).unwrap();
        cpu.set_register(1, y).unwrap();
        cpu.set_flags(before);

        cpu.step(&mut Vec::new()).unwrap();
        let flags = cpu.flags();

        prop_assert_eq!(flags.bits().count_ones(), 1);
        prop_assert_eq!(flags.equal, x == y);
        prop_assert_eq!(flags.less, x < y);
        prop_assert_eq!(flags.greater, x > y);
    }

    /// Property: CMP of a register with itself always sets E
    #[test]
    fn prop_cmp_self_is_equal(reg in 0u8..8, x in any::<u8>(), before in any_flags()) {
        let mut cpu = setup_cpu(&[CMP, reg, reg]);
        cpu.set_register(reg, x).unwrap();
        cpu.set_flags(before);

        cpu.step(&mut Vec::new()).unwrap();

        prop_assert_eq!(cpu.flags().bits(), 0b001);
    }

    /// Property: exactly one of JEQ/JNE jumps for any flag state
    #[test]
    fn prop_jne_complements_jeq(target in 3u8..=254, flags in any_flags()) {
        let mut jeq = setup_cpu(&[JEQ, 0]);
        let mut jne = setup_cpu(&[JNE, 0]);
        for cpu in [&mut jeq, &mut jne] {
            cpu.set_register(0, target).unwrap();
            cpu.set_flags(flags);
            cpu.step(&mut Vec::new()).unwrap();
        }

        let (jeq_pc, jne_pc) = (jeq.pc(), jne.pc());
        if flags.equal {
            prop_assert_eq!(jeq_pc, target as usize);
            prop_assert_eq!(jne_pc, 2);
        } else {
            prop_assert_eq!(jeq_pc, 2);
            prop_assert_eq!(jne_pc, target as usize);
        }
    }

    /// Property: non-branching instructions advance PC by their size
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(non_branching_opcodes()),
        operand1 in 0u8..8,
        operand2 in 0u8..8,
    ) {
        let mut cpu = setup_cpu(&[opcode, operand1, operand2]);
        let expected = OPCODE_TABLE
            .iter()
            .find(|m| m.opcode as u8 == opcode)
            .map(|m| m.size_bytes())
            .unwrap();

        cpu.step(&mut Vec::new()).unwrap();

        prop_assert_eq!(cpu.pc(), expected);
    }

    /// Property: arbitrary memory never panics the CPU
    #[test]
    fn prop_random_programs_do_not_panic(program in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut cpu = setup_cpu(&program);
        let _ = cpu.run_for_steps(256, &mut Vec::new());
    }
}
