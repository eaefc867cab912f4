//! HTML format implementation
//!
//! # Markup
//!
//! | Element          | Markup                                                          |
//! |------------------|-----------------------------------------------------------------|
//! | Field container  | `<div id="{id}" class="qf-field [qf-required]" data-code="{code}">` |
//! | Text             | `<label for="{id}-input">` + `<input type="text" size=..>`      |
//! | Textarea         | `<label for="{id}-input">` + `<textarea rows=..>`               |
//! | Radio / checkbox | `<span class="qf-choice [qf-correct]">` + input + `<label>`     |
//! | Select           | `<select>` opened by a disabled empty `<option>`                |
//! | Unmatched        | label only, container gets `qf-unmatched`                       |
//! | Slide with field | `<form id="{namespace}" class="qf-form">`                       |
//!
//! Choice ids are `{id}_{value}`; checkbox names are `{code}[]`, every other control
//! submits under the bare `code`.
//!
//! # Library Choice
//!
//! Field markup is an `html5ever`/`markup5ever_rcdom` tree serialized by html5ever.
//! Passthrough text is Markdown and goes through `comrak`.
//!
//! # CSS Classes
//!
//! `css/quizform.css` is embedded in every page and styles the classes above. Custom CSS
//! is appended after it.

mod serializer;

pub use serializer::{
    render_field, serialize_slide, serialize_to_html, wrap_form, HtmlOptions, CHOICE_CLASS,
    CORRECT_CLASS, FIELD_CLASS, FORM_CLASS, LABEL_CLASS, REQUIRED_CLASS, SLIDE_CLASS,
    UNMATCHED_CLASS,
};

use crate::document::FormDocument;
use crate::error::FormError;
use crate::format::Format;
use std::collections::HashMap;

/// Format implementation for standalone HTML pages
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 page with forms and embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn serialize(&self, doc: &FormDocument) -> Result<String, FormError> {
        serialize_to_html(doc, &self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &FormDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormError> {
        let mut html_options = self.options.clone();
        for (key, value) in options {
            match key.as_str() {
                "method" => html_options.form.method = value.clone(),
                "action" => html_options.form.action = value.clone(),
                "submit-label" => html_options.form.submit_label = value.clone(),
                other => {
                    return Err(FormError::NotSupported(format!(
                        "Unknown html parameter '{other}'"
                    )))
                }
            }
        }
        serialize_to_html(doc, &html_options)
    }
}
