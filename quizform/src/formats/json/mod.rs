//! JSON format implementation
//!
//! Dumps the compiled document (slides, blocks, parsed specs, elements and markup) with
//! serde_json. With the `fields-only` parameter only the parsed fields are written, which
//! is what `quizform inspect` prints.

use crate::document::{FormDocument, Fragment};
use crate::error::FormError;
use crate::field::{Element, FieldSpec};
use crate::format::Format;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

#[derive(Serialize)]
struct FieldReport<'a> {
    spec: &'a FieldSpec,
    element: &'a Element,
}

impl<'a> From<&'a Fragment> for FieldReport<'a> {
    fn from(fragment: &'a Fragment) -> Self {
        Self {
            spec: &fragment.spec,
            element: &fragment.element,
        }
    }
}

/// Serialize only the parsed fields, in document order.
pub fn serialize_fields(doc: &FormDocument) -> Result<String, FormError> {
    let fields: Vec<FieldReport<'_>> = doc.fields().map(FieldReport::from).collect();
    serde_json::to_string_pretty(&fields)
        .map_err(|e| FormError::Serialization(format!("JSON serialization failed: {e}")))
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Compiled document as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, doc: &FormDocument) -> Result<String, FormError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormError::Serialization(format!("JSON serialization failed: {e}")))
    }

    fn serialize_with_options(
        &self,
        doc: &FormDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormError> {
        if options.keys().any(|key| key != "fields-only") {
            return Err(FormError::NotSupported(
                "json only accepts the 'fields-only' parameter".to_string(),
            ));
        }
        match options.get("fields-only").map(String::as_str) {
            Some("true") => serialize_fields(doc),
            _ => self.serialize(doc),
        }
    }
}
