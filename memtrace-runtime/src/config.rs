//! Runtime configuration

use memtrace_spec::frames_for;

/// Frames covering the whole 32-bit address space (0x100000)
pub const DEFAULT_MAX_FRAMES: u64 = frames_for(u32::MAX as u64);

/// Trace replay configuration
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Upper bound on page frames a single `alloc` may request
    pub max_frames: u64,

    /// Echo each trace line as `<n>:<line>` before executing it
    pub echo: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
            echo: true,
        }
    }
}

impl RuntimeConfig {
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = max_frames;
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}
