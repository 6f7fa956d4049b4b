use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use ls8::{disassemble, format_line, load_program, ExecutionError, FlatMemory, LoadError, CPU};

/// LS-8 virtual machine
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Program file (.ls8) to execute
    program: PathBuf,

    /// Log a trace line before every instruction
    #[arg(long)]
    trace: bool,

    /// Print a disassembly listing instead of running the program
    #[arg(long)]
    disassemble: bool,

    /// Stop with an error if the program has not halted after this many instructions
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Memory size in bytes
    #[arg(long, value_name = "BYTES", default_value_t = ls8::MEMORY_SIZE)]
    memory_size: usize,
}

#[derive(Debug, thiserror::Error)]
enum Failure {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl Failure {
    fn exit_code(&self) -> ExitCode {
        match self {
            Failure::Load(_) => ExitCode::from(2),
            Failure::Execution(_) => ExitCode::from(1),
        }
    }
}

fn run(args: &Args) -> Result<(), Failure> {
    let program = load_program(&args.program)?;

    if args.disassemble {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for instr in disassemble(&program) {
            writeln!(out, "{}", format_line(&instr)).map_err(ExecutionError::Output)?;
        }
        return Ok(());
    }

    let mut cpu = CPU::new(FlatMemory::with_capacity(args.memory_size));
    cpu.load_program(&program)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.max_steps {
        Some(budget) => {
            cpu.run_for_steps(budget, &mut out)?;
            if !cpu.halted() {
                return Err(ExecutionError::StepLimitExceeded(budget).into());
            }
        }
        None => {
            cpu.run(&mut out)?;
        }
    }

    log::debug!("executed {} instructions", cpu.instructions_executed());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.trace {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("ls8: failed to initialise logging: {}", e);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("ls8: {}", failure);
            failure.exit_code()
        }
    }
}
