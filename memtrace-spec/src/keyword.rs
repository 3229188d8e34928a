//! # Trace Command Keywords
//!
//! A trace line starts with one of six keywords. Matching is case-insensitive;
//! keywords always render in lowercase.

use std::str::FromStr;

use crate::error::ParseError;

/// Command keyword, the first token of a trace line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// ALLOC size
    Alloc,
    /// COMPARE addr v1..vn
    Compare,
    /// PUT addr v1..vn
    Put,
    /// FILL addr count value
    Fill,
    /// COPY dest src count
    Copy,
    /// DUMP addr count
    Dump,
}

impl Keyword {
    /// All keywords in dispatch order
    pub const ALL: [Keyword; 6] = [
        Keyword::Alloc,
        Keyword::Compare,
        Keyword::Put,
        Keyword::Fill,
        Keyword::Copy,
        Keyword::Dump,
    ];

    /// Minimum number of arguments the command needs.
    ///
    /// `compare` and `put` take a variable number of values after the
    /// address, so only the address is mandatory.
    #[inline]
    pub const fn min_args(self) -> usize {
        match self {
            Keyword::Alloc => 1,
            Keyword::Compare => 1,
            Keyword::Put => 1,
            Keyword::Fill => 3,
            Keyword::Copy => 3,
            Keyword::Dump => 2,
        }
    }

    /// Whether the command consumes every argument on the line
    #[inline]
    pub const fn is_variadic(self) -> bool {
        matches!(self, Keyword::Compare | Keyword::Put)
    }

    /// Lowercase mnemonic
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Alloc => "alloc",
            Keyword::Compare => "compare",
            Keyword::Put => "put",
            Keyword::Fill => "fill",
            Keyword::Copy => "copy",
            Keyword::Dump => "dump",
        }
    }
}

impl FromStr for Keyword {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alloc" => Ok(Keyword::Alloc),
            "compare" => Ok(Keyword::Compare),
            "put" => Ok(Keyword::Put),
            "fill" => Ok(Keyword::Fill),
            "copy" => Ok(Keyword::Copy),
            "dump" => Ok(Keyword::Dump),
            _ => Err(ParseError::UnknownCommand(s.to_string())),
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
