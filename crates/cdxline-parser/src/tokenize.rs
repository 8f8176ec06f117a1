//! Line-to-record tokenization with right-anchored delimiter recovery.
//!
//! A well-formed line has 11 space-delimited columns, so exactly 10 space
//! bytes. Old CDX derivers sometimes wrote redirect URLs containing raw
//! unescaped spaces, which makes naive splitting misalign every column
//! after the redirect. The scan below records space offsets into a fixed
//! 10-slot buffer; when an 11th space turns up, the oldest boundary after
//! the redirect column is forgotten (`copy_within` slide-left) and the new
//! one takes the last slot. Counting from the right like this works because
//! the four columns after the redirect are always present with predictable
//! widths, while the redirect itself is the only column of unpredictable
//! width, so anchoring on the tail bounds the post-anomaly columns
//! correctly no matter how many spaces were embedded.
//!
//! The recovery deliberately does not try to prove *where* the extra space
//! occurred: any overflow is attributed to the redirect column. That is a
//! documented property of the source format, not a general repair.

use memchr::memchr_iter;

use cdxline_types::{
    DELIMITER_COUNT, FIELD_COUNT, FieldSpan, HEADER_PREFIX, RawLine, REDIRECT_INDEX, Record,
};

use crate::sink::TokenizeSink;

/// Why a line produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Effective length was zero.
    Blank,
    /// Self-describing `" CDX "` header row.
    Header,
    /// Fewer than the 10 required delimiters; `found` is how many the scan
    /// recorded.
    TooFewFields {
        /// Delimiters found before the line ran out.
        found: usize,
    },
}

/// Outcome of tokenizing one line into a borrowed record.
#[derive(Debug, Clone, Copy)]
pub enum Tokenized<'a> {
    /// The line parsed into a full 11-column record.
    Record(Record<'a>),
    /// The line produced nothing; advance to the next one.
    Skipped(SkipReason),
}

/// Outcome of tokenizing one line into owned column spans.
///
/// The span form carries no borrow, so a streaming reader can hold it
/// across refills of its line buffer and materialize the [`Record`] later
/// with [`Record::from_spans`].
#[derive(Debug, Clone, Copy)]
pub enum Scanned {
    /// Column geometry for a full record.
    Spans([FieldSpan; FIELD_COUNT]),
    /// The line produced nothing.
    Skipped(SkipReason),
}

/// Tokenize one raw line into a record view.
///
/// Pure over its input: no shared state, no blocking, safe to call
/// concurrently on independent lines. Anomalies are reported through
/// `sink`; nothing here is fatal.
pub fn tokenize<'a, S>(line: RawLine<'a>, sink: &S) -> Tokenized<'a>
where
    S: TokenizeSink + ?Sized,
{
    match tokenize_spans(line, sink) {
        Scanned::Spans(spans) => Tokenized::Record(Record::from_spans(line.bytes(), spans)),
        Scanned::Skipped(reason) => Tokenized::Skipped(reason),
    }
}

/// Tokenize one raw line into owned column spans.
///
/// Offsets in the result index into `line.bytes()`.
pub fn tokenize_spans<S>(line: RawLine<'_>, sink: &S) -> Scanned
where
    S: TokenizeSink + ?Sized,
{
    let content = line.content();
    let mut end = content.len();

    if end > 0 && content[end - 1] == b'\r' {
        sink.trailing_cr();
        end -= 1;
    }
    if end == 0 {
        sink.blank_line();
        return Scanned::Skipped(SkipReason::Blank);
    }
    if end > HEADER_PREFIX.len() && content.starts_with(HEADER_PREFIX) {
        sink.header_line();
        return Scanned::Skipped(SkipReason::Header);
    }

    let content = &content[..end];
    let mut delimiters = [0_usize; DELIMITER_COUNT];
    let mut found = 0_usize;
    for position in memchr_iter(b' ', content) {
        if found == DELIMITER_COUNT {
            // The redirect column swallowed a raw space: forget its current
            // right boundary, keep the boundary before it untouched.
            delimiters.copy_within(REDIRECT_INDEX + 1.., REDIRECT_INDEX);
            found -= 1;
            sink.embedded_space();
        }
        delimiters[found] = position;
        found += 1;
    }

    if found < DELIMITER_COUNT {
        sink.short_record(found);
        return Scanned::Skipped(SkipReason::TooFewFields { found });
    }

    let mut spans = [FieldSpan::Absent; FIELD_COUNT];
    let mut start = 0_usize;
    for (index, &delimiter) in delimiters.iter().enumerate() {
        spans[index] = FieldSpan::classify(content, start, delimiter);
        start = delimiter + 1;
    }
    spans[FIELD_COUNT - 1] = FieldSpan::classify(content, start, end);

    sink.record();
    Scanned::Spans(spans)
}
