//! Trace-file parsing.
//!
//! Trace format: one operation per line, two whitespace-separated tokens —
//! a decimal operation-type code (`0` data read, `1` data write, `2`
//! instruction read, `3` instruction write) and an address in hexadecimal
//! text. Lines that do not match (wrong token count, non-numeric code,
//! unknown code, non-hex address) are skipped with a warning before they
//! reach the engine; only file-level I/O failures are fatal.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::common::{AccessKind, Operation, SimError};

/// Parses one trace line into an operation.
///
/// Returns `None` for malformed lines and unknown operation codes.
pub fn parse_line(line: &str) -> Option<Operation> {
    let mut tokens = line.split_whitespace();
    let code = tokens.next()?;
    let addr = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }
    let code: u32 = code.parse().ok()?;
    let kind = AccessKind::from_code(code)?;
    let addr = u64::from_str_radix(addr, 16).ok()?;
    Some(Operation::new(kind, addr))
}

/// Loads a whole trace file, skipping malformed lines.
pub fn load_trace(path: &Path) -> Result<Vec<Operation>, SimError> {
    let file = File::open(path).map_err(|e| SimError::TraceIo {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut operations = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| SimError::TraceIo {
            path: path.to_path_buf(),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some(op) => operations.push(op),
            None => warn!(line = index + 1, content = %line, "skipping malformed trace line"),
        }
    }
    Ok(operations)
}
