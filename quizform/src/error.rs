//! Error types for field compilation and output formats

use thiserror::Error;

/// Errors that can occur while compiling or serializing form documents.
///
/// A block that is not a field header is not an error (it is `None`), and an unmatched
/// right-hand side is a warning diagnostic that still renders. Only genuinely broken
/// input or output lands here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// The field header parsed but a grammar could not be evaluated.
    #[error("Malformed field '{field}': {message}")]
    MalformedSpec { field: String, message: String },
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error while producing markup or serialized output
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

impl FormError {
    pub fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        FormError::MalformedSpec {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The field id an error is attached to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            FormError::MalformedSpec { field, .. } => Some(field),
            _ => None,
        }
    }
}
