//! Error types shared across the cdxline workspace.
//!
//! Data-quality problems in CDX input (blank lines, header lines, short
//! records) are *not* errors: the tokenizer reports them as skip outcomes
//! and the stream continues. `CdxError` covers the two things that can
//! actually fail: I/O in the line source, and violations of the caller
//! contract.

use thiserror::Error;

/// Unified error type for the cdxline crates.
#[derive(Debug, Error)]
pub enum CdxError {
    /// The underlying line source failed to produce bytes.
    #[error("line source I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A caller declared a logical line length past the end of the buffer
    /// it handed over.
    #[error("declared line length {declared} exceeds buffer length {actual}")]
    LineOverrun {
        /// Logical length the caller claimed.
        declared: usize,
        /// Real length of the buffer.
        actual: usize,
    },

    /// An internal invariant was broken.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CdxError {
    /// Build an [`CdxError::Internal`] from anything string-like.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CdxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_overrun_message_names_both_lengths() {
        let err = CdxError::LineOverrun {
            declared: 32,
            actual: 16,
        };
        let text = err.to_string();
        assert!(text.contains("32"));
        assert!(text.contains("16"));
    }

    #[test]
    fn internal_helper_wraps_message() {
        let err = CdxError::internal("span table out of sync");
        assert!(matches!(err, CdxError::Internal(_)));
        assert_eq!(err.to_string(), "internal error: span table out of sync");
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(CdxError::Io(_))));
    }
}
