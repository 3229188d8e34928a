//! Output formatting for trace replay
//!
//! All numbers are lowercase hexadecimal without a `0x` prefix.

use std::io::{self, Write};

/// Bytes per dump row
pub const DUMP_ROW: usize = 16;

/// Echo line printed before a trace line executes
pub fn write_echo<W: Write>(out: &mut W, line_number: usize, line: &str) -> io::Result<()> {
    writeln!(out, "{}:{}", line_number, line)
}

/// Diagnostic for one byte that failed a `compare`
pub fn write_mismatch<W: Write>(out: &mut W, address: u64, expected: u32, actual: u8) -> io::Result<()> {
    writeln!(
        out,
        "compare error at address {:x}, expected {:x}, actual is {:x}",
        address, expected, actual
    )
}

/// Dump listing: address line, then rows of up to 16 space-separated bytes
pub fn write_dump<W: Write>(out: &mut W, address: u32, bytes: &[u8]) -> io::Result<()> {
    writeln!(out, "{:x}", address)?;
    for row in bytes.chunks(DUMP_ROW) {
        let line = row
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_echo() {
        assert_eq!(render(|o| write_echo(o, 12, "dump 0 3")), "12:dump 0 3\n");
        assert_eq!(render(|o| write_echo(o, 1, "")), "1:\n");
    }

    #[test]
    fn test_mismatch() {
        assert_eq!(
            render(|o| write_mismatch(o, 0x1a, 0xff, 0)),
            "compare error at address 1a, expected ff, actual is 0\n"
        );
    }

    #[test]
    fn test_dump_short() {
        assert_eq!(render(|o| write_dump(o, 0, &[0xaa, 0xbb, 0xcc])), "0\naa bb cc\n");
    }

    #[test]
    fn test_dump_empty() {
        assert_eq!(render(|o| write_dump(o, 0x40, &[])), "40\n");
    }

    #[test]
    fn test_dump_seventeen() {
        let bytes: Vec<u8> = (0..17).collect();
        let text = render(|o| write_dump(o, 0, &bytes));
        assert_eq!(
            text,
            "0\n00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f\n10\n"
        );
    }

    #[test]
    fn test_dump_exact_row() {
        let bytes = [0u8; 32];
        let text = render(|o| write_dump(o, 0x1000, &bytes));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "1000");
        assert!(lines[1..].iter().all(|l| l.split(' ').count() == 16));
    }
}
