//! Line supply and record iteration for CDX streams.
//!
//! [`LfLineReader`] splits a byte stream on `\n` only, so stray carriage
//! returns reach the tokenizer intact and get handled (and counted) there.
//! [`CdxReader`] is the pull loop on top: line in, record out, skips
//! silently consumed.

pub mod line_reader;
pub mod reader;

pub use line_reader::LfLineReader;
pub use reader::CdxReader;
