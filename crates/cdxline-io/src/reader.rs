//! Pull-based record iteration over a CDX stream.

use std::io::BufRead;

use tracing::debug;

use cdxline_error::Result;
use cdxline_parser::{Scanned, TokenizeMetrics, TokenizeSink, tokenize_spans};
use cdxline_types::{RawLine, Record};

use crate::line_reader::LfLineReader;

/// Reads a CDX stream and yields one [`Record`] per data line.
///
/// Blank lines, header rows, and short records are consumed silently (the
/// sink still sees them); the caller only ever observes records and
/// end-of-stream. The record borrows the reader's internal buffer, so each
/// record must be dropped (or copied out) before the next
/// [`next_record`](Self::next_record) call.
#[derive(Debug)]
pub struct CdxReader<R, S = TokenizeMetrics> {
    lines: LfLineReader<R>,
    sink: S,
}

impl<R: BufRead> CdxReader<R, TokenizeMetrics> {
    /// Wrap a buffered reader with a fresh [`TokenizeMetrics`] sink.
    pub fn new(inner: R) -> Self {
        Self::with_sink(inner, TokenizeMetrics::new())
    }
}

impl<R: BufRead, S: TokenizeSink> CdxReader<R, S> {
    /// Wrap a buffered reader with a caller-supplied sink.
    pub fn with_sink(inner: R, sink: S) -> Self {
        Self {
            lines: LfLineReader::new(inner),
            sink,
        }
    }

    /// The next record, or `None` when the stream is exhausted.
    pub fn next_record(&mut self) -> Result<Option<Record<'_>>> {
        let spans = loop {
            if !self.lines.next_line()? {
                debug!(lines = self.lines.line_number(), "CDX stream exhausted");
                return Ok(None);
            }
            let line = RawLine::whole(self.lines.line());
            match tokenize_spans(line, &self.sink) {
                Scanned::Spans(spans) => break spans,
                Scanned::Skipped(_) => {}
            }
        };
        Ok(Some(Record::from_spans(self.lines.line(), spans)))
    }

    /// The sink this reader reports into.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// One-based number of the line the current record came from.
    #[must_use]
    pub fn line_number(&self) -> u64 {
        self.lines.line_number()
    }

    /// Consume the reader, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
