//! # Lexer for trace arguments
//!
//! Arguments are hexadecimal unsigned 32-bit values separated by whitespace.
//! Collection stops at the first token that is not a valid hex `u32`.

use logos::{Lexer, Logos};

/// Tokens appearing after the command keyword
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\x0B\f]+")]
pub enum ArgToken {
    /// Hexadecimal value, optionally prefixed with 0x
    #[regex(r"(0[xX])?[0-9a-fA-F]+", parse_hex, priority = 3)]
    Hex(u32),

    /// Anything else
    #[regex(r"[^ \t\r\n\x0B\f]+", priority = 1)]
    Other,
}

fn parse_hex(lex: &mut Lexer<ArgToken>) -> Option<u32> {
    let s = lex.slice();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).ok()
}

/// Split a line into its keyword and hex arguments.
///
/// The keyword is the first whitespace-delimited token (empty for a blank
/// line). Arguments are collected until the first token that fails to parse.
pub fn tokenize(line: &str) -> (&str, Vec<u32>) {
    let line = line.trim_start();
    let (keyword, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));

    let args = ArgToken::lexer(rest)
        .map_while(|tok| match tok {
            Ok(ArgToken::Hex(v)) => Some(v),
            _ => None,
        })
        .collect();

    (keyword, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_hex() {
        let mut lex = ArgToken::lexer("0 aa FF 0x1A 1000");
        assert_eq!(lex.next(), Some(Ok(ArgToken::Hex(0))));
        assert_eq!(lex.next(), Some(Ok(ArgToken::Hex(0xaa))));
        assert_eq!(lex.next(), Some(Ok(ArgToken::Hex(0xff))));
        assert_eq!(lex.next(), Some(Ok(ArgToken::Hex(0x1a))));
        assert_eq!(lex.next(), Some(Ok(ArgToken::Hex(0x1000))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_other() {
        let mut lex = ArgToken::lexer("12g xyz");
        assert_eq!(lex.next(), Some(Ok(ArgToken::Other)));
        assert_eq!(lex.next(), Some(Ok(ArgToken::Other)));
    }

    #[test]
    fn test_lexer_overflow_is_error() {
        let mut lex = ArgToken::lexer("100000000");
        assert_eq!(lex.next(), Some(Err(())));
    }

    #[test]
    fn test_tokenize_basic() {
        let (kw, args) = tokenize("put 0 aa bb cc");
        assert_eq!(kw, "put");
        assert_eq!(args, vec![0, 0xaa, 0xbb, 0xcc]);
    }

    #[test]
    fn test_tokenize_stops_at_bad_token() {
        let (kw, args) = tokenize("compare 10 1 zz 2");
        assert_eq!(kw, "compare");
        assert_eq!(args, vec![0x10, 1]);
    }

    #[test]
    fn test_tokenize_no_args() {
        let (kw, args) = tokenize("dump");
        assert_eq!(kw, "dump");
        assert!(args.is_empty());
    }

    #[test]
    fn test_tokenize_blank() {
        let (kw, args) = tokenize("   \t");
        assert_eq!(kw, "");
        assert!(args.is_empty());
    }

    #[test]
    fn test_tokenize_vertical_tab() {
        let (kw, args) = tokenize("put 0\u{b}7");
        assert_eq!(kw, "put");
        assert_eq!(args, vec![0, 7]);
    }

    #[test]
    fn test_tokenize_extra_whitespace() {
        let (kw, args) = tokenize("  fill\t 20   4  ff  ");
        assert_eq!(kw, "fill");
        assert_eq!(args, vec![0x20, 4, 0xff]);
    }
}
