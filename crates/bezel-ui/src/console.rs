//! Browser console diagnostics sink.

use bezel_core::{Diagnostic, DiagnosticSink, Severity};
use gloo::console;

/// Writes diagnostics to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        let message = diagnostic.to_string();
        match diagnostic.severity() {
            Severity::Warning => console::warn!(message),
            Severity::Error => console::error!(message),
        }
    }
}
