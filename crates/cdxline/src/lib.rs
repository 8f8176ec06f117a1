//! Tokenizer and record reader for the CDX web-archive index format.
//!
//! A CDX file is one capture per line, 11 space-delimited columns. Old
//! derivers occasionally wrote redirect URLs with raw unescaped spaces in
//! them; this crate's tokenizer recovers the correct column boundaries by
//! anchoring on the fixed-width tail instead of trusting a naive split.
//!
//! Tokenize a single line:
//!
//! ```
//! use cdxline::{tokenize, Field, NullSink, RawLine, Tokenized};
//!
//! let line = b"N b a m - k http://example.com/x y - S V g";
//! match tokenize(RawLine::whole(line), &NullSink) {
//!     Tokenized::Record(record) => {
//!         assert_eq!(record.redirect(), Field::Bytes(b"http://example.com/x y"));
//!         assert!(record.status_code().is_absent());
//!         assert_eq!(record.filename(), Field::Bytes(b"g"));
//!     }
//!     Tokenized::Skipped(reason) => panic!("unexpected skip: {reason:?}"),
//! }
//! ```
//!
//! Or stream a whole file:
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! use cdxline::{CdxReader, Result};
//!
//! fn count_redirects(path: &str) -> Result<u64> {
//!     let mut cdx = CdxReader::new(BufReader::new(File::open(path)?));
//!     let mut redirects = 0;
//!     while let Some(record) = cdx.next_record()? {
//!         if !record.redirect().is_absent() {
//!             redirects += 1;
//!         }
//!     }
//!     Ok(redirects)
//! }
//! ```

pub use cdxline_error::{CdxError, Result};
pub use cdxline_io::{CdxReader, LfLineReader};
pub use cdxline_parser::{
    NullSink, Scanned, SkipReason, TokenizeMetrics, TokenizeMetricsSnapshot, TokenizeSink,
    Tokenized, tokenize, tokenize_spans,
};
pub use cdxline_types::{
    Column, DELIMITER_COUNT, FIELD_COUNT, Field, FieldSpan, HEADER_PREFIX, PLACEHOLDER, RawLine,
    REDIRECT_INDEX, Record,
};
