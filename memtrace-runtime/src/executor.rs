//! Command execution
//!
//! The [`Executor`] owns the memory store and the output sink. Each command
//! either completes or fails before any byte is modified.

use std::io::Write;

use memtrace_spec::{Address, Command, Word};
use tracing::{debug, info};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::format::{write_dump, write_mismatch};
use crate::memory::Memory;

pub struct Executor<W: Write> {
    memory: Option<Memory>,
    out: W,
    config: RuntimeConfig,
    mismatches: u64,
}

fn allocated(memory: &mut Option<Memory>) -> Result<&mut Memory> {
    memory.as_mut().ok_or(RuntimeError::NotAllocated)
}

impl<W: Write> Executor<W> {
    pub fn new(out: W, config: RuntimeConfig) -> Self {
        Executor {
            memory: None,
            out,
            config,
            mismatches: 0,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// The store, once `alloc` has run
    pub fn memory(&self) -> Option<&Memory> {
        self.memory.as_ref()
    }

    pub fn memory_mut(&mut self) -> Option<&mut Memory> {
        self.memory.as_mut()
    }

    /// Total `compare` mismatches reported so far
    pub fn mismatches(&self) -> u64 {
        self.mismatches
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Execute a single command
    pub fn execute(&mut self, cmd: &Command) -> Result<()> {
        debug!(command = %cmd, "execute");
        match cmd {
            Command::Alloc { size } => self.alloc(*size),
            Command::Compare { addr, expected } => self.compare(*addr, expected),
            Command::Put { addr, values } => self.put(*addr, values),
            Command::Fill { addr, count, value } => {
                allocated(&mut self.memory)?.fill_range(*addr, *count, *value)?;
                Ok(())
            }
            Command::Copy { dest, src, count } => {
                allocated(&mut self.memory)?.copy_range(*dest, *src, *count)?;
                Ok(())
            }
            Command::Dump { addr, count } => self.dump(*addr, *count),
        }
    }

    fn alloc(&mut self, size: Word) -> Result<()> {
        if let Some(memory) = &self.memory {
            return Err(RuntimeError::Reallocation { size: memory.size() });
        }

        let memory = Memory::allocate(size, &self.config)?;
        info!(
            requested = size,
            frames = memory.frame_count(),
            bytes = memory.size(),
            "allocated memory"
        );
        self.memory = Some(memory);
        Ok(())
    }

    fn compare(&mut self, addr: Address, expected: &[Word]) -> Result<()> {
        let memory = allocated(&mut self.memory)?;
        let actual = memory.read_range(addr, expected.len() as u32)?;

        for (i, (&want, &got)) in expected.iter().zip(&actual).enumerate() {
            if want != got as u32 {
                write_mismatch(&mut self.out, addr as u64 + i as u64, want, got)?;
                self.mismatches += 1;
            }
        }
        Ok(())
    }

    fn put(&mut self, addr: Address, values: &[Word]) -> Result<()> {
        let bytes: Vec<u8> = values.iter().map(|&v| v as u8).collect();
        allocated(&mut self.memory)?.write_range(addr, &bytes)?;
        Ok(())
    }

    fn dump(&mut self, addr: Address, count: Word) -> Result<()> {
        let bytes = allocated(&mut self.memory)?.read_range(addr, count)?;
        write_dump(&mut self.out, addr, &bytes)?;
        Ok(())
    }
}
