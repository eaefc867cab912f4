//! Format trait definition
//!
//! This module defines the Format trait that all output formats implement. A format turns
//! a compiled [`FormDocument`] into text.

use crate::document::FormDocument;
use crate::error::FormError;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct CountFormat;
///
/// impl Format for CountFormat {
///     fn name(&self) -> &str {
///         "count"
///     }
///
///     fn serialize(&self, doc: &FormDocument) -> Result<String, FormError> {
///         Ok(doc.fields().count().to_string())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    /// Used for detecting the output format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize a compiled document
    fn serialize(&self, doc: &FormDocument) -> Result<String, FormError>;

    /// Serialize a compiled document, optionally using extra parameters.
    ///
    /// The default implementation accepts no parameters and delegates to
    /// [`Format::serialize`].
    fn serialize_with_options(
        &self,
        doc: &FormDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
