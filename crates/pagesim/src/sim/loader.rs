//! Trace file loading.
//!
//! A trace file holds one access per line: a 32-bit hexadecimal address
//! followed by `R` or `W`, e.g.
//!
//! ```text
//! 0044e4f8 R
//! 0044e500 W
//! ```
//!
//! Blank lines are ignored. The address is reduced to a page number with
//! the configured shift as the line is read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::{Access, AccessKind, Trace};
use crate::error::{Result, SimError};

/// Reads a trace from `path`.
///
/// # Errors
/// [`SimError::Io`] if the file cannot be read, plus everything
/// [`parse_trace`] reports.
pub fn load_trace(path: impl AsRef<Path>, shift: u32) -> Result<Trace> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let trace = parse_trace(BufReader::new(file), shift)?;
    log::info!("Loaded {} accesses from {}", trace.len(), path.display());
    Ok(trace)
}

/// Reads a trace from any buffered reader.
///
/// # Errors
/// - [`SimError::Parse`] on the first malformed line.
/// - [`SimError::EmptyTrace`] if no access was read.
pub fn parse_trace<R: BufRead>(reader: R, shift: u32) -> Result<Trace> {
    let mut accesses = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        accesses.push(parse_line(&line, shift).map_err(|reason| SimError::Parse {
            line: index + 1,
            reason,
        })?);
    }

    if accesses.is_empty() {
        return Err(SimError::EmptyTrace);
    }
    Ok(Trace::new(accesses))
}

fn parse_line(line: &str, shift: u32) -> std::result::Result<Access, String> {
    let mut fields = line.split_whitespace();
    let (Some(addr), Some(op)) = (fields.next(), fields.next()) else {
        return Err(format!("expected `<address> <R|W>`, got {:?}", line.trim()));
    };
    if let Some(extra) = fields.next() {
        return Err(format!("unexpected field {:?}", extra));
    }

    let digits = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr);
    let addr = u32::from_str_radix(digits, 16)
        .map_err(|e| format!("invalid address {:?}: {}", addr, e))?;

    let kind = match op {
        "R" | "r" => AccessKind::Read,
        "W" | "w" => AccessKind::Write,
        other => return Err(format!("invalid operation {:?} (use R or W)", other)),
    };

    Ok(Access::new(addr >> shift, kind))
}
