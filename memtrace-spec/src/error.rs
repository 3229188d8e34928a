//! # Error Types for trace parsing

use thiserror::Error;

use crate::keyword::Keyword;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing command")]
    EmptyLine,

    #[error("invalid command: {0:?}")]
    UnknownCommand(String),

    #[error("{command}: expected at least {expected} argument(s), found {found}")]
    MissingArguments {
        command: Keyword,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_display() {
        let err = ParseError::UnknownCommand("move".to_string());
        assert_eq!(err.to_string(), "invalid command: \"move\"");
    }

    #[test]
    fn test_missing_arguments_display() {
        let err = ParseError::MissingArguments {
            command: Keyword::Fill,
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "fill: expected at least 3 argument(s), found 2"
        );
    }

    #[test]
    fn test_empty_line_display() {
        assert_eq!(ParseError::EmptyLine.to_string(), "missing command");
    }
}
