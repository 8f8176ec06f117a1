//! CDX line tokenizer.
//!
//! Splits one raw index line into the fixed 11-column record, recovering
//! from the one corruption old CDX derivers are known for: raw unescaped
//! spaces inside the redirect-URL column. Blank lines, header rows, and
//! lines with too few fields come back as skip outcomes, never as errors.

pub mod sink;
pub mod tokenize;

pub use sink::{NullSink, TokenizeMetrics, TokenizeMetricsSnapshot, TokenizeSink};
pub use tokenize::{tokenize, tokenize_spans, Scanned, SkipReason, Tokenized};
