//! Memory trace parser
//!
//! Turn trace lines into validated [`Command`]s.
//!
//! ## Example
//!
//! ```rust
//! use memtrace_parser::parse_line;
//! use memtrace_spec::Command;
//!
//! let cmd = parse_line("put 10 aa bb").unwrap();
//! assert_eq!(cmd, Command::Put { addr: 0x10, values: vec![0xaa, 0xbb] });
//! ```

pub mod lexer;
pub mod parser;

pub use memtrace_spec::{Command, Keyword, ParseError, Result};
pub use lexer::{tokenize, ArgToken};
pub use parser::{parse_line, RawLine};
