//! Caller-supplied diagnostics sink.
//!
//! The library reports unmatched elements and malformed fields through [`Diagnostics`]
//! and never configures logging itself. [`TracingDiagnostics`] forwards to `tracing`;
//! a `Vec<Diagnostic>` collects reports for inspection.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One report about one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Id of the field the report is about.
    pub field_id: String,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(field_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field_id: field_id.into(),
            message: message.into(),
        }
    }

    pub fn error(field_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field_id: field_id.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.field_id, self.message)
    }
}

/// Receives diagnostics while a document is compiled.
pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Diagnostics for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to the `tracing` macros, one event per report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => {
                tracing::warn!(field = %diagnostic.field_id, "{}", diagnostic.message)
            }
            Severity::Error => {
                tracing::error!(field = %diagnostic.field_id, "{}", diagnostic.message)
            }
        }
    }
}
