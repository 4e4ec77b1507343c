use std::io::BufRead;

use anyhow::{Context, Result};

/// Seam for the external scan flow: ask once, get back a payload
/// string or nothing.
pub trait DeviceIdSource {
    fn acquire(&mut self) -> Result<Option<String>>;
}

/// Takes the first line from any reader as the scanned payload. EOF
/// before a line means the scan was abandoned.
pub struct LineScanner<R> {
    reader: R,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> DeviceIdSource for LineScanner<R> {
    fn acquire(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("reading scanned payload")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn first_line_is_the_payload() {
        let mut scanner = LineScanner::new(Cursor::new("abc123\nleftover\n"));
        assert_eq!(scanner.acquire().unwrap(), Some("abc123".to_string()));
    }

    #[test]
    fn crlf_is_stripped() {
        let mut scanner = LineScanner::new(Cursor::new("abc123\r\n"));
        assert_eq!(scanner.acquire().unwrap(), Some("abc123".to_string()));
    }

    #[test]
    fn eof_means_no_payload() {
        let mut scanner = LineScanner::new(Cursor::new(""));
        assert_eq!(scanner.acquire().unwrap(), None);
    }
}
