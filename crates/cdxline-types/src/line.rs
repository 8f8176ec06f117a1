//! Caller-owned line buffers with a declared logical length.

use cdxline_error::{CdxError, Result};

/// One raw input line.
///
/// Line sources frequently hand back a buffer that is longer than the line
/// it currently holds (the buffer is reused between reads); only the first
/// `len` bytes are meaningful. Construction enforces `len <= bytes.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    bytes: &'a [u8],
    len: usize,
}

impl<'a> RawLine<'a> {
    /// Wrap `bytes` with a declared logical length.
    ///
    /// Returns [`CdxError::LineOverrun`] when `len` points past the end of
    /// the buffer. That is a caller contract violation, not a data error.
    pub fn new(bytes: &'a [u8], len: usize) -> Result<Self> {
        if len > bytes.len() {
            return Err(CdxError::LineOverrun {
                declared: len,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes, len })
    }

    /// Wrap a buffer whose entire extent is the line.
    #[must_use]
    pub fn whole(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            len: bytes.len(),
        }
    }

    /// The logical content: the first `len` bytes of the buffer.
    #[must_use]
    pub fn content(&self) -> &'a [u8] {
        &self.bytes[..self.len]
    }

    /// The full underlying buffer, including any stale tail past `len`.
    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Declared logical length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the logical content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> From<&'a [u8]> for RawLine<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::whole(bytes)
    }
}
