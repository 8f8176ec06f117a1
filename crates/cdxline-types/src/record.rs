//! The fixed 11-column CDX record and its column vocabulary.

use serde::{Deserialize, Serialize};

use crate::field::{Field, FieldSpan};
use crate::FIELD_COUNT;

/// The columns of the fixed CDX layout, in order.
///
/// The single-letter codes are the format's own header vocabulary
/// (`N b a m s k r M S V g`); they identify columns in header rows and in
/// operator documentation, nothing in this crate parses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Massaged/canonicalized URL (SURT form), code `N`.
    UrlKey,
    /// Capture timestamp, code `b`.
    Timestamp,
    /// Original URL as crawled, code `a`.
    OriginalUrl,
    /// Content MIME type, code `m`.
    MimeType,
    /// HTTP status code, code `s`.
    StatusCode,
    /// Content digest, code `k`.
    Digest,
    /// Redirect target URL, code `r`. The one column that may contain raw
    /// unescaped spaces in historical data.
    Redirect,
    /// Metadata tags, code `M`.
    MetaTags,
    /// Compressed record size, code `S`.
    CompressedSize,
    /// Compressed offset within the archive container, code `V`.
    Offset,
    /// Archive container file name, code `g`.
    Filename,
}

impl Column {
    /// Every column, in positional order.
    pub const ALL: [Self; FIELD_COUNT] = [
        Self::UrlKey,
        Self::Timestamp,
        Self::OriginalUrl,
        Self::MimeType,
        Self::StatusCode,
        Self::Digest,
        Self::Redirect,
        Self::MetaTags,
        Self::CompressedSize,
        Self::Offset,
        Self::Filename,
    ];

    /// Positional index of this column, 0 through 10.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The format's single-letter code for this column.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::UrlKey => 'N',
            Self::Timestamp => 'b',
            Self::OriginalUrl => 'a',
            Self::MimeType => 'm',
            Self::StatusCode => 's',
            Self::Digest => 'k',
            Self::Redirect => 'r',
            Self::MetaTags => 'M',
            Self::CompressedSize => 'S',
            Self::Offset => 'V',
            Self::Filename => 'g',
        }
    }
}

/// One tokenized CDX line: a borrowed line buffer plus the geometry of its
/// 11 columns.
///
/// Records are constructed fresh per input line and never mutated. Column
/// views borrow from the caller-owned buffer, so a record must not outlive
/// the line it was tokenized from; copy the bytes out to keep them.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    line: &'a [u8],
    spans: [FieldSpan; FIELD_COUNT],
}

impl<'a> Record<'a> {
    /// Assemble a record from a line buffer and the spans a tokenizer
    /// produced for it.
    ///
    /// Every `Bytes` span must lie within `line`; the tokenizer guarantees
    /// this for spans it handed out together with the same buffer.
    #[must_use]
    pub fn from_spans(line: &'a [u8], spans: [FieldSpan; FIELD_COUNT]) -> Self {
        debug_assert!(spans.iter().all(|span| match *span {
            FieldSpan::Absent => true,
            FieldSpan::Bytes { start, end } => start <= end && end <= line.len(),
        }));
        Self { line, spans }
    }

    /// The value of `column`.
    #[must_use]
    pub fn get(&self, column: Column) -> Field<'a> {
        self.spans[column.index()].resolve(self.line)
    }

    /// The value at positional `index`, or `None` past the last column.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<Field<'a>> {
        self.spans.get(index).map(|span| span.resolve(self.line))
    }

    /// All 11 column values in positional order.
    pub fn fields(&self) -> impl Iterator<Item = Field<'a>> + '_ {
        self.spans.iter().map(|span| span.resolve(self.line))
    }

    /// Massaged/canonicalized URL (column `N`).
    #[must_use]
    pub fn url_key(&self) -> Field<'a> {
        self.get(Column::UrlKey)
    }

    /// Capture timestamp (column `b`).
    #[must_use]
    pub fn timestamp(&self) -> Field<'a> {
        self.get(Column::Timestamp)
    }

    /// Original URL (column `a`).
    #[must_use]
    pub fn original_url(&self) -> Field<'a> {
        self.get(Column::OriginalUrl)
    }

    /// MIME type (column `m`).
    #[must_use]
    pub fn mime_type(&self) -> Field<'a> {
        self.get(Column::MimeType)
    }

    /// HTTP status code (column `s`).
    #[must_use]
    pub fn status_code(&self) -> Field<'a> {
        self.get(Column::StatusCode)
    }

    /// Content digest (column `k`).
    #[must_use]
    pub fn digest(&self) -> Field<'a> {
        self.get(Column::Digest)
    }

    /// Redirect target URL (column `r`), embedded spaces and all.
    #[must_use]
    pub fn redirect(&self) -> Field<'a> {
        self.get(Column::Redirect)
    }

    /// Metadata tags (column `M`).
    #[must_use]
    pub fn meta_tags(&self) -> Field<'a> {
        self.get(Column::MetaTags)
    }

    /// Compressed record size (column `S`).
    #[must_use]
    pub fn compressed_size(&self) -> Field<'a> {
        self.get(Column::CompressedSize)
    }

    /// Compressed archive offset (column `V`).
    #[must_use]
    pub fn offset(&self) -> Field<'a> {
        self.get(Column::Offset)
    }

    /// Archive container name (column `g`).
    #[must_use]
    pub fn filename(&self) -> Field<'a> {
        self.get(Column::Filename)
    }

    /// Re-emit the record as a single line: columns joined by single
    /// spaces, absent columns rendered as `-`.
    ///
    /// For input without embedded-space anomalies this reproduces the
    /// original line byte for byte.
    #[must_use]
    pub fn canonical_line(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.line.len());
        for (idx, field) in self.fields().enumerate() {
            if idx > 0 {
                out.push(b' ');
            }
            out.extend_from_slice(field.or_placeholder());
        }
        out
    }
}
