//! Injected observability for the tokenizer.
//!
//! The tokenizer itself is a pure function; anything it wants to say about
//! a line goes through a [`TokenizeSink`] supplied by the caller. Sinks
//! take `&self` so one instance can be shared across worker threads
//! tokenizing independent lines.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Receiver for per-line tokenizer events.
///
/// All methods default to no-ops, so implementors only override what they
/// observe. Skips and corrections are reported here exactly once per line.
pub trait TokenizeSink: Send + Sync {
    /// A line tokenized into a full record.
    fn record(&self) {}

    /// A line whose effective length was zero.
    fn blank_line(&self) {}

    /// A self-describing `" CDX "` header row.
    fn header_line(&self) {}

    /// A line with fewer than the required delimiters; `delimiters` is how
    /// many were found.
    fn short_record(&self, delimiters: usize) {
        let _ = delimiters;
    }

    /// A trailing carriage return was trimmed before tokenizing.
    fn trailing_cr(&self) {}

    /// One raw space was reabsorbed into the redirect-URL column.
    fn embedded_space(&self) {}
}

/// Sink that observes nothing. For standalone, purely functional use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TokenizeSink for NullSink {}

/// Counting sink with tracing output for the recoverable anomalies.
///
/// Blank and header lines are expected and recurring, so they are counted
/// silently; short records and trailing CRs are data-quality anomalies and
/// emit a `warn` event each. Counters use relaxed atomics, which is enough
/// for monotonic tallies read after (or loosely during) a run.
#[derive(Debug, Default)]
pub struct TokenizeMetrics {
    records: AtomicU64,
    blank_lines: AtomicU64,
    header_lines: AtomicU64,
    short_records: AtomicU64,
    trailing_crs: AtomicU64,
    embedded_spaces: AtomicU64,
}

impl TokenizeMetrics {
    /// A fresh sink with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the current counter values.
    #[must_use]
    pub fn snapshot(&self) -> TokenizeMetricsSnapshot {
        TokenizeMetricsSnapshot {
            records: self.records.load(Ordering::Relaxed),
            blank_lines: self.blank_lines.load(Ordering::Relaxed),
            header_lines: self.header_lines.load(Ordering::Relaxed),
            short_records: self.short_records.load(Ordering::Relaxed),
            trailing_crs: self.trailing_crs.load(Ordering::Relaxed),
            embedded_spaces: self.embedded_spaces.load(Ordering::Relaxed),
        }
    }

    /// Zero every counter.
    pub fn reset(&self) {
        self.records.store(0, Ordering::Relaxed);
        self.blank_lines.store(0, Ordering::Relaxed);
        self.header_lines.store(0, Ordering::Relaxed);
        self.short_records.store(0, Ordering::Relaxed);
        self.trailing_crs.store(0, Ordering::Relaxed);
        self.embedded_spaces.store(0, Ordering::Relaxed);
    }
}

impl TokenizeSink for TokenizeMetrics {
    fn record(&self) {
        self.records.fetch_add(1, Ordering::Relaxed);
    }

    fn blank_line(&self) {
        self.blank_lines.fetch_add(1, Ordering::Relaxed);
    }

    fn header_line(&self) {
        self.header_lines.fetch_add(1, Ordering::Relaxed);
    }

    fn short_record(&self, delimiters: usize) {
        self.short_records.fetch_add(1, Ordering::Relaxed);
        warn!(delimiters, "skipping CDX line with too few fields");
    }

    fn trailing_cr(&self) {
        self.trailing_crs.fetch_add(1, Ordering::Relaxed);
        warn!("trailing CR found");
    }

    fn embedded_space(&self) {
        self.embedded_spaces.fetch_add(1, Ordering::Relaxed);
    }
}

/// Point-in-time view of [`TokenizeMetrics`] counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenizeMetricsSnapshot {
    /// Lines tokenized into records.
    pub records: u64,
    /// Blank lines skipped.
    pub blank_lines: u64,
    /// Header rows skipped.
    pub header_lines: u64,
    /// Lines skipped for having too few fields.
    pub short_records: u64,
    /// Trailing carriage returns trimmed.
    pub trailing_crs: u64,
    /// Raw spaces reabsorbed into the redirect column.
    pub embedded_spaces: u64,
}
