//! WASM API for the LS-8 virtual machine.
//!
//! Provides JavaScript-callable interfaces for program loading, execution,
//! state inspection and disassembly.

use crate::{disassemble, format_line, parse_program, FlatMemory, StepOutcome, CPU};
use wasm_bindgen::prelude::*;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Ls8Emulator {
    cpu: CPU<FlatMemory>,
    program: Vec<u8>,
    output: Vec<u8>,
    on_print: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl Ls8Emulator {
    /// Create an emulator with default-sized memory and nothing loaded
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Ls8Emulator {
            cpu: CPU::new(FlatMemory::new()),
            program: Vec::new(),
            output: Vec::new(),
            on_print: None,
        }
    }

    /// Register a callback invoked with each line PRN emits
    pub fn set_on_print(&mut self, callback: js_sys::Function) {
        self.on_print = Some(callback);
    }

    /// Parse `.ls8` source and load it into a fresh machine
    pub fn load(&mut self, source: &str) -> Result<usize, JsValue> {
        let program = parse_program(source).map_err(to_js)?;

        let mut cpu = CPU::new(FlatMemory::new());
        cpu.load_program(&program).map_err(to_js)?;

        self.cpu = cpu;
        self.output.clear();
        let len = program.len();
        self.program = program;

        Ok(len)
    }

    /// Reload the last program and clear all state
    pub fn reset(&mut self) -> Result<(), JsValue> {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.load_program(&self.program).map_err(to_js)?;
        self.cpu = cpu;
        self.output.clear();
        Ok(())
    }

    /// Execute one instruction, returning true once halted
    pub fn step(&mut self) -> Result<bool, JsValue> {
        let start = self.output.len();
        let outcome = self.cpu.step(&mut self.output).map_err(to_js)?;
        self.notify(start);
        Ok(outcome == StepOutcome::Halted)
    }

    /// Execute up to `max_steps` instructions, returning the count executed
    pub fn run(&mut self, max_steps: u32) -> Result<u32, JsValue> {
        let start = self.output.len();
        let result = self
            .cpu
            .run_for_steps(max_steps as u64, &mut self.output)
            .map_err(to_js);
        self.notify(start);
        result.map(|n| n as u32)
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.halted()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u32 {
        self.cpu.pc() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn flags(&self) -> u8 {
        self.cpu.flags().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn registers(&self) -> Vec<u8> {
        self.cpu.registers().to_vec()
    }

    /// Everything PRN has printed since the last load/reset
    #[wasm_bindgen(getter)]
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Current CPU trace line
    pub fn trace(&self) -> String {
        self.cpu.trace()
    }

    /// Disassembly listing of the loaded program, one line per instruction
    pub fn disassemble(&self) -> Vec<String> {
        disassemble(&self.program).iter().map(format_line).collect()
    }

    fn notify(&self, start: usize) {
        let Some(callback) = &self.on_print else {
            return;
        };

        for line in String::from_utf8_lossy(&self.output[start..]).lines() {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(line));
        }
    }
}

impl Default for Ls8Emulator {
    fn default() -> Self {
        Self::new()
    }
}
