//! Bounded in-memory record of errors that were logged and swallowed.
//!
//! Fetch failures never reach the screen; they are written to the
//! tracing log and kept here so the running view (and tests) can inspect
//! what went wrong.

use std::collections::VecDeque;
use std::time::SystemTime;

/// Where a recorded error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSource {
    ListFetch,
    DetailFetch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEntry {
    pub timestamp: SystemTime,
    pub source: DiagnosticSource,
    pub message: String,
}

/// Ring buffer of the most recent diagnostic entries.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    entries: VecDeque<DiagnosticEntry>,
    capacity: usize,
}

impl Diagnostics {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity: capacity.max(1),
        }
    }

    /// Record an entry, evicting the oldest when full.
    pub fn record(&mut self, source: DiagnosticSource, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(DiagnosticEntry {
            timestamp: SystemTime::now(),
            source,
            message: message.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&DiagnosticEntry> {
        self.entries.back()
    }

    pub fn entries(&self) -> impl Iterator<Item = &DiagnosticEntry> {
        self.entries.iter()
    }
}
