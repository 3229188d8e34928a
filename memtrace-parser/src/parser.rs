//! Command parser

use memtrace_spec::{Command, Keyword, ParseError, Result};

use crate::lexer::tokenize;

/// A tokenized but not yet validated trace line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine<'a> {
    pub keyword: &'a str,
    pub args: Vec<u32>,
}

impl<'a> RawLine<'a> {
    pub fn new(line: &'a str) -> Self {
        let (keyword, args) = tokenize(line);
        RawLine { keyword, args }
    }

    /// Validate the keyword and argument count and build the command
    pub fn into_command(self) -> Result<Command> {
        if self.keyword.is_empty() {
            return Err(ParseError::EmptyLine);
        }

        let keyword: Keyword = self.keyword.parse()?;
        let found = self.args.len();
        if found < keyword.min_args() {
            return Err(ParseError::MissingArguments {
                command: keyword,
                expected: keyword.min_args(),
                found,
            });
        }

        let mut args = self.args;
        let cmd = match keyword {
            Keyword::Alloc => Command::Alloc { size: args[0] },
            Keyword::Compare => {
                let expected = args.split_off(1);
                Command::Compare { addr: args[0], expected }
            }
            Keyword::Put => {
                let values = args.split_off(1);
                Command::Put { addr: args[0], values }
            }
            Keyword::Fill => Command::Fill {
                addr: args[0],
                count: args[1],
                value: args[2],
            },
            Keyword::Copy => Command::Copy {
                dest: args[0],
                src: args[1],
                count: args[2],
            },
            Keyword::Dump => Command::Dump {
                addr: args[0],
                count: args[1],
            },
        };

        Ok(cmd)
    }

    /// Arguments a fixed-arity command will not use
    pub fn surplus_args(&self) -> usize {
        match self.keyword.parse::<Keyword>() {
            Ok(kw) if !kw.is_variadic() => self.args.len().saturating_sub(kw.min_args()),
            _ => 0,
        }
    }
}

/// Parse a single trace line into a command
pub fn parse_line(line: &str) -> Result<Command> {
    RawLine::new(line).into_command()
}
