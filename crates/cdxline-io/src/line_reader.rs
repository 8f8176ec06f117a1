//! LF-only buffered line source.

use std::io::BufRead;

use cdxline_error::Result;

/// Reads logical lines from a byte stream, treating `\n` as the only line
/// terminator.
///
/// A `\r` before the `\n` is *not* stripped here: the tokenizer owns that
/// correction and the diagnostic that goes with it. The internal buffer is
/// reused between reads, so the slice returned by [`line`](Self::line) is
/// only valid until the next call to [`next_line`](Self::next_line).
#[derive(Debug)]
pub struct LfLineReader<R> {
    inner: R,
    buf: Vec<u8>,
    line_number: u64,
}

impl<R: BufRead> LfLineReader<R> {
    /// Wrap a buffered reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            line_number: 0,
        }
    }

    /// Advance to the next logical line.
    ///
    /// Returns `Ok(false)` on exhaustion; a final line without a
    /// terminating `\n` is still yielded. I/O failures propagate as
    /// [`cdxline_error::CdxError::Io`].
    pub fn next_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let read = self.inner.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(false);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        self.line_number += 1;
        Ok(true)
    }

    /// The current line's bytes, without the `\n` terminator.
    #[must_use]
    pub fn line(&self) -> &[u8] {
        &self.buf
    }

    /// One-based number of the current line; 0 before the first
    /// [`next_line`](Self::next_line).
    #[must_use]
    pub fn line_number(&self) -> u64 {
        self.line_number
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn splits_on_lf_only() {
        let mut lines = LfLineReader::new(Cursor::new(b"one\r\ntwo\nthree".to_vec()));
        assert!(lines.next_line().unwrap());
        assert_eq!(lines.line(), b"one\r");
        assert!(lines.next_line().unwrap());
        assert_eq!(lines.line(), b"two");
        assert!(lines.next_line().unwrap());
        assert_eq!(lines.line(), b"three");
        assert!(!lines.next_line().unwrap());
    }

    #[test]
    fn embedded_cr_is_preserved() {
        let mut lines = LfLineReader::new(Cursor::new(b"a\rb\n".to_vec()));
        assert!(lines.next_line().unwrap());
        assert_eq!(lines.line(), b"a\rb");
        assert!(!lines.next_line().unwrap());
    }

    #[test]
    fn empty_lines_are_yielded() {
        let mut lines = LfLineReader::new(Cursor::new(b"\n\nx\n".to_vec()));
        assert!(lines.next_line().unwrap());
        assert_eq!(lines.line(), b"");
        assert!(lines.next_line().unwrap());
        assert_eq!(lines.line(), b"");
        assert!(lines.next_line().unwrap());
        assert_eq!(lines.line(), b"x");
        assert!(!lines.next_line().unwrap());
        assert_eq!(lines.line_number(), 3);
    }

    #[test]
    fn exhaustion_is_sticky() {
        let mut lines = LfLineReader::new(Cursor::new(Vec::new()));
        assert!(!lines.next_line().unwrap());
        assert!(!lines.next_line().unwrap());
        assert_eq!(lines.line_number(), 0);
    }
}
