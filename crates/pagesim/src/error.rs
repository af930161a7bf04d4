//! Error types for the simulator library.

use std::collections::TryReserveError;
use std::io;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Everything that can stop a simulation from being set up.
///
/// All variants are raised before the first access is replayed; once a
/// [`Simulator`](crate::core::Simulator) exists, running it cannot fail.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    /// The frame table or page table could not be allocated.
    #[error("out of memory allocating the {table}")]
    OutOfMemory {
        table: &'static str,
        #[source]
        source: TryReserveError,
    },

    /// The configuration yields zero physical frames.
    #[error("invalid configuration: no frames available")]
    NoFrames,

    /// The trace holds no accesses.
    #[error("empty or invalid trace")]
    EmptyTrace,

    /// A trace page does not fit the configured address space.
    #[error("page {page:#x} is outside the address space of {page_count} pages")]
    PageOutOfRange { page: u32, page_count: usize },

    #[error("invalid algorithm: {0} (use LRU, NRU, OTIMO or OPT)")]
    UnknownPolicy(String),

    #[error("invalid page size: {0} (use 8, 16 or 32 KB)")]
    InvalidPageSize(String),

    #[error("invalid physical memory size: {0} (use 1, 2 or 4 MB)")]
    InvalidMemorySize(String),

    /// A trace line could not be decoded.
    #[error("trace line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
