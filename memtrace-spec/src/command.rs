//! Trace commands
//!
//! A [`Command`] is the validated form of one trace line. Each variant carries
//! exactly the arguments its operation needs, so handlers never index into a
//! raw argument vector.

use crate::keyword::Keyword;
use crate::{Address, Word};

/// One validated trace command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ALLOC: create the store, rounded up to whole page frames
    Alloc { size: Word },

    /// COMPARE: check `expected[i]` against byte `addr + i`
    Compare { addr: Address, expected: Vec<Word> },

    /// PUT: write `values[i]` (low byte) to `addr + i`
    Put { addr: Address, values: Vec<Word> },

    /// FILL: write `value` (low byte) to `count` bytes from `addr`
    Fill { addr: Address, count: Word, value: Word },

    /// COPY: move `count` bytes from `src` to `dest`, overlap-safe
    Copy { dest: Address, src: Address, count: Word },

    /// DUMP: print `count` bytes from `addr`
    Dump { addr: Address, count: Word },
}

impl Command {
    /// Keyword this command was parsed from
    pub fn keyword(&self) -> Keyword {
        match self {
            Command::Alloc { .. } => Keyword::Alloc,
            Command::Compare { .. } => Keyword::Compare,
            Command::Put { .. } => Keyword::Put,
            Command::Fill { .. } => Keyword::Fill,
            Command::Copy { .. } => Keyword::Copy,
            Command::Dump { .. } => Keyword::Dump,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Alloc { size } => write!(f, "alloc {:x}", size),
            Command::Compare { addr, expected: values } | Command::Put { addr, values } => {
                write!(f, "{} {:x}", self.keyword(), addr)?;
                for v in values {
                    write!(f, " {:x}", v)?;
                }
                Ok(())
            }
            Command::Fill { addr, count, value } => {
                write!(f, "fill {:x} {:x} {:x}", addr, count, value)
            }
            Command::Copy { dest, src, count } => {
                write!(f, "copy {:x} {:x} {:x}", dest, src, count)
            }
            Command::Dump { addr, count } => write!(f, "dump {:x} {:x}", addr, count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_mapping() {
        assert_eq!(Command::Alloc { size: 0x1000 }.keyword(), Keyword::Alloc);
        assert_eq!(
            Command::Copy { dest: 1, src: 0, count: 4 }.keyword(),
            Keyword::Copy
        );
    }

    #[test]
    fn test_display_variadic() {
        let cmd = Command::Put {
            addr: 0x10,
            values: vec![0xaa, 0xbb],
        };
        assert_eq!(cmd.to_string(), "put 10 aa bb");

        let cmd = Command::Compare {
            addr: 0,
            expected: vec![],
        };
        assert_eq!(cmd.to_string(), "compare 0");
    }

    #[test]
    fn test_display_fixed() {
        assert_eq!(Command::Alloc { size: 0x2000 }.to_string(), "alloc 2000");
        assert_eq!(
            Command::Fill { addr: 0x20, count: 4, value: 0xff }.to_string(),
            "fill 20 4 ff"
        );
        assert_eq!(Command::Dump { addr: 0, count: 0x11 }.to_string(), "dump 0 11");
    }
}
