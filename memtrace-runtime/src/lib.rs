//! # Memory Trace Runtime
//!
//! Replay memory-management traces against a paged byte store.
//!
//! ## Features
//!
//! - **Paged store**: allocation rounded up to 4 KiB page frames
//! - **Bounds checking**: every access passes through address translation
//! - **Six commands**: alloc, compare, put, fill, copy, dump
//! - **Fatal errors**: the first bad line stops the run with its line number
//!
//! ## Example
//!
//! ```rust
//! use memtrace_runtime::{run_trace, RuntimeConfig};
//!
//! let trace = "alloc 2000\nput 0 aa bb cc\ndump 0 3\n";
//! let mut out = Vec::new();
//! let summary = run_trace(trace.as_bytes(), &mut out, RuntimeConfig::default()).unwrap();
//! assert_eq!(summary.allocated_bytes, 0x2000);
//! assert!(String::from_utf8(out).unwrap().ends_with("0\naa bb cc\n"));
//! ```

pub mod config;
pub mod error;
pub mod memory;
pub mod format;
pub mod executor;
pub mod driver;

pub use config::RuntimeConfig;
pub use error::{MemoryError, RuntimeError, TraceError};
pub use memory::{FrameAddr, Memory, MemoryStats};
pub use executor::Executor;
pub use driver::{TraceSession, TraceSummary};

use std::io::{BufRead, Write};

/// Replay a whole trace and return its summary
pub fn run_trace<R: BufRead, W: Write>(
    reader: R,
    out: W,
    config: RuntimeConfig,
) -> Result<TraceSummary, TraceError> {
    TraceSession::new(reader, out, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let _ = RuntimeConfig::default();
        let _ = MemoryStats::default();
        let _ = TraceSummary::default();
    }

    #[test]
    fn test_run_trace_helper() {
        let mut out = Vec::new();
        let summary = run_trace(
            "alloc 100\ncompare 0 0 0\n".as_bytes(),
            &mut out,
            RuntimeConfig::default(),
        )
        .unwrap();
        assert_eq!(summary.allocated_bytes, 0x1000);
        assert_eq!(summary.mismatches, 0);
    }

    #[test]
    fn test_runtime_error_reexport() {
        let err = RuntimeError::NotAllocated;
        assert_eq!(err.to_string(), "memory accessed before alloc");
    }
}
