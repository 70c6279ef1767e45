//! Deprecation diagnostics.
//!
//! Deprecated configuration and helper calls never fail. They log a
//! warning through `log` and, when a [`DiagnosticSink`] is attached, report
//! a [`Deprecation`] to it so integrators can observe or assert on them.

use std::fmt;
use std::sync::{Arc, Mutex};

/// A single deprecation notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deprecation {
    /// What is deprecated (a helper name, a config key, ...).
    pub subject: String,
    /// Human-readable explanation and replacement.
    pub message: String,
}

impl fmt::Display for Deprecation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

/// Receives deprecation notices.
pub trait DiagnosticSink: Send + Sync {
    /// Record a deprecation.
    fn record(&self, deprecation: &Deprecation);
}

/// Deprecation reporter shared by the dispatcher and legacy helpers.
///
/// Cheap to clone.
#[derive(Clone, Default)]
pub struct Diagnostics {
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl Diagnostics {
    /// Log-only diagnostics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics that also report to `sink`.
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Report a deprecation.
    pub fn deprecated(&self, subject: impl Into<String>, message: impl Into<String>) {
        let deprecation = Deprecation {
            subject: subject.into(),
            message: message.into(),
        };
        log::warn!("DEPRECATION WARNING: {deprecation}");
        if let Some(sink) = &self.sink {
            sink.record(&deprecation);
        }
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

/// Sink that keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Deprecation>>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded notices, oldest first.
    pub fn entries(&self) -> Vec<Deprecation> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of recorded notices.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget all recorded notices.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, deprecation: &Deprecation) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(deprecation.clone());
    }
}

// ============================================================================
// Tests
// ============================================================================
