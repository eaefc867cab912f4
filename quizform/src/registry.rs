//! Format registry for format discovery and selection
//!
//! Formats are registered and retrieved by name, or detected from an output filename.

use crate::document::FormDocument;
use crate::error::FormError;
use crate::format::Format;
use std::collections::HashMap;

/// Registry of output formats
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let html = registry.serialize(&document, "html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        let mut names = self.list_formats();
        names.retain(|name| {
            self.formats
                .get(name)
                .is_some_and(|format| format.file_extensions().contains(&extension))
        });
        names.into_iter().next()
    }

    /// Serialize a document using the specified format
    pub fn serialize(&self, doc: &FormDocument, format: &str) -> Result<String, FormError> {
        self.get(format)?.serialize(doc)
    }

    /// Serialize a document using the specified format and options
    pub fn serialize_with_options(
        &self,
        doc: &FormDocument,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormError> {
        self.get(format)?.serialize_with_options(doc, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::formats::html::HtmlFormat::default());
        registry.register(crate::formats::json::JsonFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountFormat;

    impl Format for CountFormat {
        fn name(&self) -> &str {
            "count"
        }

        fn file_extensions(&self) -> &[&str] {
            &["count"]
        }

        fn serialize(&self, doc: &FormDocument) -> Result<String, FormError> {
            Ok(doc.fields().count().to_string())
        }
    }

    fn empty_document() -> FormDocument {
        FormDocument {
            title: "Doc".to_string(),
            slides: vec![],
        }
    }

    #[test]
    fn defaults_are_registered() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["html", "json"]);
        assert!(registry.has("html"));
        assert!(!registry.has("pdf"));
    }

    #[test]
    fn unknown_format_is_an_error() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.serialize(&empty_document(), "pdf"),
            Err(FormError::FormatNotFound("pdf".to_string()))
        );
    }

    #[test]
    fn custom_formats_and_detection() {
        let mut registry = FormatRegistry::new();
        registry.register(CountFormat);
        assert_eq!(
            registry.serialize(&empty_document(), "count"),
            Ok("0".to_string())
        );
        assert_eq!(
            registry.detect_format_from_filename("out/result.count"),
            Some("count".to_string())
        );
        assert_eq!(registry.detect_format_from_filename("result"), None);

        let defaults = FormatRegistry::default();
        assert_eq!(
            defaults.detect_format_from_filename("page.htm"),
            Some("html".to_string())
        );
    }

    #[test]
    fn default_format_rejects_parameters() {
        let registry = {
            let mut registry = FormatRegistry::new();
            registry.register(CountFormat);
            registry
        };
        let mut options = HashMap::new();
        options.insert("x".to_string(), "y".to_string());
        assert!(matches!(
            registry.serialize_with_options(&empty_document(), "count", &options),
            Err(FormError::NotSupported(_))
        ));
    }
}
