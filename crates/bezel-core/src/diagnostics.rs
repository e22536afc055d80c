//! Diagnostic events for recoverable failures.
//!
//! # Design
//! - Layout code never aborts; fallbacks are reported through a [`DiagnosticSink`].
//! - Sinks are injected so hosts choose the destination (tracing, browser console, tests).

use std::cell::RefCell;
use std::fmt::{self, Display, Formatter};

use crate::error::LookupError;

/// How loudly a diagnostic should be reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Unexpected input that was corrected.
    Warning,
    /// A required value was missing and a default was substituted.
    Error,
}

/// A recoverable failure observed while resolving or laying out a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// Unknown device identifier; the default specification was used.
    UnknownDeviceType {
        /// Identifier supplied by the caller.
        requested: String,
    },
    /// No specification reached the renderer; the default was used or a
    /// placeholder was shown.
    MissingSpecification,
    /// Scale was not a positive finite number; `1.0` was used.
    InvalidScale {
        /// Rejected value.
        value: f64,
    },
}

impl Diagnostic {
    /// Severity used when forwarding to a log backend.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::UnknownDeviceType { .. } | Self::InvalidScale { .. } => Severity::Warning,
            Self::MissingSpecification => Severity::Error,
        }
    }
}

impl From<LookupError> for Diagnostic {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::UnknownDeviceType { requested } => Self::UnknownDeviceType { requested },
            LookupError::MissingSpecification => Self::MissingSpecification,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDeviceType { requested } => write!(
                formatter,
                "invalid device type `{requested}`; falling back to default device"
            ),
            Self::MissingSpecification => {
                formatter.write_str("device specification missing; using default device")
            }
            Self::InvalidScale { value } => {
                write!(formatter, "invalid scale {value}; using 1")
            }
        }
    }
}

/// Receiver for diagnostics emitted during resolution and layout.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing` at the matching level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::UnknownDeviceType { requested } => {
                tracing::warn!(requested = %requested, "unknown device type; using default specification");
            }
            Diagnostic::MissingSpecification => {
                tracing::error!("device specification missing; using default specification");
            }
            Diagnostic::InvalidScale { value } => {
                tracing::warn!(value, "invalid scale; using 1.0");
            }
        }
    }
}

/// Keeps every diagnostic in memory; intended for tests and previews.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded diagnostics in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.borrow().clone()
    }

    /// Number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.events.borrow_mut().push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_follow_failure_kind() {
        assert_eq!(
            Diagnostic::UnknownDeviceType {
                requested: "foo".to_string()
            }
            .severity(),
            Severity::Warning
        );
        assert_eq!(Diagnostic::MissingSpecification.severity(), Severity::Error);
        assert_eq!(
            Diagnostic::InvalidScale { value: -1.0 }.severity(),
            Severity::Warning
        );
    }

    #[test]
    fn lookup_errors_convert_to_diagnostics() {
        let diagnostic = Diagnostic::from(LookupError::UnknownDeviceType {
            requested: "foo".to_string(),
        });
        assert_eq!(
            diagnostic.to_string(),
            "invalid device type `foo`; falling back to default device"
        );
        assert_eq!(
            Diagnostic::from(LookupError::MissingSpecification),
            Diagnostic::MissingSpecification
        );
    }

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        assert!(sink.is_empty());
        sink.emit(&Diagnostic::MissingSpecification);
        sink.emit(&Diagnostic::InvalidScale { value: 0.0 });
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.events()[0], Diagnostic::MissingSpecification);
    }

    #[test]
    fn tracing_sink_accepts_every_kind() {
        let sink = TracingSink;
        sink.emit(&Diagnostic::UnknownDeviceType {
            requested: "foo".to_string(),
        });
        sink.emit(&Diagnostic::MissingSpecification);
        sink.emit(&Diagnostic::InvalidScale { value: f64::NAN });
    }
}
