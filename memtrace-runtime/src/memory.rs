//! Memory subsystem
//!
//! A linear byte store backed by whole page frames. Every access goes through
//! [`Memory::translate`], which maps a trace address to a frame and an offset
//! and rejects anything past the end of the allocation.
//!
//! Frames are materialised on first write. An untouched frame reads as zero.

use memtrace_spec::{frames_for, Address, PAGE_SIZE};

use crate::config::RuntimeConfig;
use crate::error::MemoryError;

type Result<T> = std::result::Result<T, MemoryError>;

/// Location of a byte inside the frame table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAddr {
    pub frame: usize,
    pub offset: usize,
}

/// Byte access counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStats {
    pub reads: u64,
    pub writes: u64,
}

#[derive(Debug, Clone)]
pub struct Memory {
    frames: Vec<Option<Box<[u8]>>>,
    stats: MemoryStats,
}

impl Memory {
    /// Reserve enough zeroed page frames to hold `byte_count` bytes
    pub fn allocate(byte_count: u32, config: &RuntimeConfig) -> Result<Self> {
        let requested = byte_count as u64;
        let frame_count = frames_for(requested);
        if frame_count > config.max_frames {
            return Err(MemoryError::AllocationTooLarge {
                requested,
                max_frames: config.max_frames,
            });
        }

        Ok(Memory {
            frames: vec![None; frame_count as usize],
            stats: MemoryStats::default(),
        })
    }

    /// Allocated size in bytes, always a multiple of [`PAGE_SIZE`]
    #[inline]
    pub fn size(&self) -> u64 {
        self.frames.len() as u64 * PAGE_SIZE as u64
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frames that have been written at least once
    pub fn resident_frames(&self) -> usize {
        self.frames.iter().filter(|f| f.is_some()).count()
    }

    #[inline]
    pub fn stats(&self) -> MemoryStats {
        self.stats
    }

    /// Map an address to its frame and offset
    pub fn translate(&self, address: Address) -> Result<FrameAddr> {
        self.check_range(address, 1)?;
        Ok(FrameAddr {
            frame: (address / PAGE_SIZE) as usize,
            offset: (address % PAGE_SIZE) as usize,
        })
    }

    /// Ensure `[address, address + length)` lies inside the store.
    ///
    /// An empty range touches no byte and always passes.
    pub fn check_range(&self, address: Address, length: u64) -> Result<()> {
        if length == 0 {
            return Ok(());
        }
        let end = address as u64 + length;
        if end > self.size() {
            return Err(MemoryError::OutOfRange {
                address: address as u64,
                length,
                size: self.size(),
            });
        }
        Ok(())
    }

    pub fn read_byte(&mut self, address: Address) -> Result<u8> {
        let FrameAddr { frame, offset } = self.translate(address)?;
        self.stats.reads += 1;
        Ok(self.frames[frame].as_ref().map_or(0, |f| f[offset]))
    }

    /// Store the low byte of `value`
    pub fn write_byte(&mut self, address: Address, value: u32) -> Result<()> {
        let FrameAddr { frame, offset } = self.translate(address)?;
        self.stats.writes += 1;
        let page = self.frames[frame]
            .get_or_insert_with(|| vec![0u8; PAGE_SIZE as usize].into_boxed_slice());
        page[offset] = value as u8;
        Ok(())
    }

    pub fn read_range(&mut self, address: Address, length: u32) -> Result<Vec<u8>> {
        self.check_range(address, length as u64)?;
        (0..length).map(|i| self.read_byte(address + i)).collect()
    }

    pub fn write_range(&mut self, address: Address, bytes: &[u8]) -> Result<()> {
        self.check_range(address, bytes.len() as u64)?;
        for (i, &b) in bytes.iter().enumerate() {
            self.write_byte(address + i as u32, b as u32)?;
        }
        Ok(())
    }

    pub fn fill_range(&mut self, address: Address, count: u32, value: u32) -> Result<()> {
        self.check_range(address, count as u64)?;
        for i in 0..count {
            self.write_byte(address + i, value)?;
        }
        Ok(())
    }

    /// Copy `count` bytes from `src` to `dest`.
    ///
    /// The source is read in full before anything is written, so overlapping
    /// ranges behave like a copy through a separate buffer.
    pub fn copy_range(&mut self, dest: Address, src: Address, count: u32) -> Result<()> {
        self.check_range(dest, count as u64)?;
        let buf = self.read_range(src, count)?;
        self.write_range(dest, &buf)
    }
}
