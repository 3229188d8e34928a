//! Trace driver
//!
//! Reads trace lines in order, echoes each one, and hands it to the
//! [`Executor`]. The first fatal error ends the run.

use std::fmt;
use std::io::{BufRead, Write};

use memtrace_parser::RawLine;
use tracing::warn;

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError, TraceError};
use crate::executor::Executor;
use crate::format::write_echo;
use crate::memory::MemoryStats;

/// Outcome of a completed trace run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceSummary {
    /// Lines read and executed
    pub lines: usize,

    /// `compare` mismatches reported
    pub mismatches: u64,

    /// Size of the store in bytes (0 if the trace never allocated)
    pub allocated_bytes: u64,

    pub stats: MemoryStats,
}

impl fmt::Display for TraceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines: {}, compare errors: {}, allocated: {:#x} bytes, reads: {}, writes: {}",
            self.lines, self.mismatches, self.allocated_bytes, self.stats.reads, self.stats.writes
        )
    }
}

/// A single replay of one trace source
pub struct TraceSession<R: BufRead, W: Write> {
    reader: R,
    line_number: usize,
    executor: Executor<W>,
}

impl<R: BufRead, W: Write> TraceSession<R, W> {
    pub fn new(reader: R, out: W, config: RuntimeConfig) -> Self {
        TraceSession {
            reader,
            line_number: 0,
            executor: Executor::new(out, config),
        }
    }

    /// Number of the last line read (0 before the first)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn executor(&self) -> &Executor<W> {
        &self.executor
    }

    pub fn into_writer(self) -> W {
        self.executor.into_writer()
    }

    /// Run until end of input or the first fatal error
    pub fn run(&mut self) -> std::result::Result<TraceSummary, TraceError> {
        while self.step()? {}
        self.executor
            .writer_mut()
            .flush()
            .map_err(|source| TraceError::Write {
                line: self.line_number,
                source,
            })?;
        Ok(self.summary())
    }

    /// Process one line. Returns `false` at end of input.
    pub fn step(&mut self) -> std::result::Result<bool, TraceError> {
        let Some(text) = self.next_line()? else {
            return Ok(false);
        };

        self.process(&text).map_err(|source| TraceError::Command {
            line: self.line_number,
            text,
            source,
        })?;
        Ok(true)
    }

    pub fn summary(&self) -> TraceSummary {
        let memory = self.executor.memory();
        TraceSummary {
            lines: self.line_number,
            mismatches: self.executor.mismatches(),
            allocated_bytes: memory.map_or(0, |m| m.size()),
            stats: memory.map(|m| m.stats()).unwrap_or_default(),
        }
    }

    /// Next line without its terminator. Bytes that are not valid UTF-8
    /// become U+FFFD rather than failing the read.
    fn next_line(&mut self) -> std::result::Result<Option<String>, TraceError> {
        let mut buf = Vec::new();
        let n = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| TraceError::Read {
                line: self.line_number,
                source,
            })?;
        if n == 0 {
            return Ok(None);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        self.line_number += 1;
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn process(&mut self, text: &str) -> Result<()> {
        if self.executor.config().echo {
            write_echo(self.executor.writer_mut(), self.line_number, text)?;
        }

        let raw = RawLine::new(text);
        let surplus = raw.surplus_args();
        if surplus > 0 {
            warn!(line = self.line_number, surplus, "ignoring extra arguments");
        }

        let cmd = raw.into_command().map_err(RuntimeError::Parse)?;
        self.executor.execute(&cmd)
    }
}
