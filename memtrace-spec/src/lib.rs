//! # Memory Trace Specification
//!
//! Shared vocabulary for replaying memory-management traces against a paged
//! byte store.
//!
//! ## Key Features
//! - Six trace commands: alloc, compare, put, fill, copy, dump
//! - All command arguments are unsigned 32-bit hexadecimal values
//! - Page-granular allocation with 4 KiB page frames
//! - Linear address space starting at 0

pub mod keyword;
pub mod command;
pub mod page;
pub mod error;

pub use keyword::Keyword;
pub use command::Command;
pub use page::{frames_for, page_round_up, PAGE_SIZE};
pub use error::{ParseError, Result};

/// Trace address (byte offset into the allocated store)
pub type Address = u32;

/// Raw trace argument as parsed from a hex token
pub type Word = u32;
