//! Core type definitions for the cdxline workspace.
//!
//! Everything here is a view or a plain value: [`RawLine`] wraps a caller
//! owned buffer, [`Field`] borrows a byte range out of it, and [`Record`]
//! is the fixed 11-column row the tokenizer produces. No module in this
//! crate inspects field *content*; columns are opaque byte strings or
//! absent markers.

pub mod field;
pub mod line;
pub mod record;

pub use field::{Field, FieldSpan, PLACEHOLDER};
pub use line::RawLine;
pub use record::{Column, Record};

/// Number of columns in the fixed CDX layout.
pub const FIELD_COUNT: usize = 11;

/// Number of space delimiters in a well-formed line (`FIELD_COUNT - 1`).
pub const DELIMITER_COUNT: usize = FIELD_COUNT - 1;

/// Index of the redirect-URL column, the one column that may contain raw
/// unescaped spaces.
pub const REDIRECT_INDEX: usize = 6;

/// Prefix identifying the format's self-describing header row.
pub const HEADER_PREFIX: &[u8] = b" CDX ";
