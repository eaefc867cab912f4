//! Explicit knobs for compilation and publishing.
//!
//! Defaults live here rather than inline in the grammar so that hosts (and tests) can
//! change them; `quizform-config` maps its TOML sections onto these types.

/// Options consumed while classifying and rendering fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Row count of a textarea written as `[ ]`.
    pub default_textarea_rows: u32,
    /// Text of the disabled placeholder option that opens every select. Opaque to the
    /// core; translation is up to the host.
    pub placeholder_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_textarea_rows: 3,
            placeholder_label: String::new(),
        }
    }
}

impl RenderOptions {
    pub fn with_default_textarea_rows(mut self, rows: u32) -> Self {
        self.default_textarea_rows = rows;
        self
    }

    pub fn with_placeholder_label(mut self, label: impl Into<String>) -> Self {
        self.placeholder_label = label.into();
        self
    }
}

/// Attributes of the `<form>` container that wraps a slide with fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOptions {
    pub method: String,
    pub action: String,
    /// Submit button text. Empty means no button.
    pub submit_label: String,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            method: "post".to_string(),
            action: String::new(),
            submit_label: String::new(),
        }
    }
}

/// What the document transform does when a field fails with a malformed spec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole document on the first failure. Nothing is returned, so earlier
    /// fields are not published either.
    Strict,
    /// Report the failure, keep the offending block as plain text and carry on.
    #[default]
    Lenient,
}

impl FailurePolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "strict" => Some(FailurePolicy::Strict),
            "lenient" => Some(FailurePolicy::Lenient),
            _ => None,
        }
    }
}
