//! Runtime error types for trace replay

use memtrace_spec::ParseError;
use thiserror::Error;

/// Failures raised at the address translation boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("address out of range: {address:#x} + {length:#x} exceeds allocated size {size:#x}")]
    OutOfRange { address: u64, length: u64, size: u64 },

    #[error("allocation too large: {requested:#x} bytes needs more than {max_frames} page frames")]
    AllocationTooLarge { requested: u64, max_frames: u64 },
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Memory(#[from] MemoryError),

    #[error("memory accessed before alloc")]
    NotAllocated,

    #[error("memory already allocated ({size:#x} bytes)")]
    Reallocation { size: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// A fatal failure while replaying a trace, tagged with where it happened
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("{source} at line {line}:\n{text}")]
    Command {
        line: usize,
        text: String,
        #[source]
        source: RuntimeError,
    },

    #[error("failed to read trace after line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output after line {line}: {source}")]
    Write {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl TraceError {
    /// 1-based number of the line the failure is attributed to
    pub fn line(&self) -> usize {
        match self {
            TraceError::Command { line, .. }
            | TraceError::Read { line, .. }
            | TraceError::Write { line, .. } => *line,
        }
    }

    /// Underlying runtime error, if the failure came from a command
    pub fn runtime_error(&self) -> Option<&RuntimeError> {
        match self {
            TraceError::Command { source, .. } => Some(source),
            TraceError::Read { .. } | TraceError::Write { .. } => None,
        }
    }
}
