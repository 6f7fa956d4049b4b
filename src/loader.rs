//! # Program Loader
//!
//! Reads LS-8 program files: text with one 8-bit binary literal per line.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```
//!
//! Everything from `#` to the end of a line is a comment. Blank and
//! comment-only lines are skipped. Each remaining line becomes the next byte
//! of the program, starting at address 0.

use std::fs;
use std::path::{Path, PathBuf};

/// Errors produced while reading or placing a program.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not hold a valid 8-bit binary literal.
    #[error("line {line}: invalid instruction literal `{token}`")]
    Parse { line: usize, token: String },

    /// The program is larger than the memory it is loaded into.
    #[error("program is {len} bytes but memory holds {capacity}")]
    ProgramTooLarge { len: usize, capacity: usize },
}

/// Parses program text into bytes.
///
/// # Errors
///
/// `LoadError::Parse` with the 1-indexed line number of the first literal
/// that is not 1-8 binary digits.
///
/// # Examples
///
/// ```
/// use ls8::parse_program;
///
/// let bytes = parse_program("10000010 # LDI\n\n# comment\n00000000\n").unwrap();
/// assert_eq!(bytes, vec![0b1000_0010, 0]);
///
/// assert!(parse_program("10000012\n").is_err());
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let literal = line.split('#').next().unwrap_or("").trim();
        if literal.is_empty() {
            continue;
        }

        let byte = parse_literal(literal).ok_or_else(|| LoadError::Parse {
            line: index + 1,
            token: literal.to_string(),
        })?;
        program.push(byte);
    }

    Ok(program)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// - `LoadError::Io` if the file is missing or unreadable
/// - `LoadError::Parse` for malformed literals
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let program = parse_program(&source)?;
    log::debug!("read {} bytes from {}", program.len(), path.display());

    Ok(program)
}

fn parse_literal(literal: &str) -> Option<u8> {
    // from_str_radix accepts a leading sign, which is not a valid literal
    if !literal.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }

    u8::from_str_radix(literal, 2).ok()
}
