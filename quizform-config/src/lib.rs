//! Shared configuration loader for the quizform toolchain.
//!
//! `defaults/quizform.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`QuizformConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use quizform::{FailurePolicy, FormOptions, RenderOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/quizform.default.toml");

/// Top-level configuration consumed by quizform applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizformConfig {
    pub render: RenderConfig,
    pub form: FormConfig,
    pub document: DocumentConfig,
    #[serde(default)]
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub default_textarea_rows: u32,
    pub placeholder_label: String,
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions::default()
            .with_default_textarea_rows(config.default_textarea_rows)
            .with_placeholder_label(config.placeholder_label.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    pub method: String,
    pub action: String,
    pub submit_label: String,
}

impl From<&FormConfig> for FormOptions {
    fn from(config: &FormConfig) -> Self {
        FormOptions {
            method: config.method.clone(),
            action: config.action.clone(),
            submit_label: config.submit_label.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub policy: PolicyConfig,
    /// Document title; namespaces of the first slide derive from it.
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PolicyConfig {
    #[serde(rename = "strict")]
    Strict,
    #[serde(rename = "lenient")]
    Lenient,
}

impl From<PolicyConfig> for FailurePolicy {
    fn from(policy: PolicyConfig) -> Self {
        match policy {
            PolicyConfig::Strict => FailurePolicy::Strict,
            PolicyConfig::Lenient => FailurePolicy::Lenient,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HtmlConfig {
    /// Stylesheet appended after the built-in one in standalone pages.
    #[serde(default)]
    pub custom_css: Option<PathBuf>,
}

impl QuizformConfig {
    pub fn render_options(&self) -> RenderOptions {
        (&self.render).into()
    }

    pub fn form_options(&self) -> FormOptions {
        (&self.form).into()
    }

    pub fn policy(&self) -> FailurePolicy {
        self.document.policy.into()
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `("render.default_textarea_rows", 6)`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<QuizformConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QuizformConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render.default_textarea_rows, 3);
        assert_eq!(config.render.placeholder_label, "");
        assert_eq!(config.form.method, "post");
        assert_eq!(config.document.policy, PolicyConfig::Lenient);
        assert!(config.document.title.is_none());
        assert!(config.html.custom_css.is_none());
    }

    #[test]
    fn defaults_match_library_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render_options(), RenderOptions::default());
        assert_eq!(config.form_options(), FormOptions::default());
        assert_eq!(config.policy(), FailurePolicy::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("document.policy", "strict")
            .expect("override to apply")
            .set_override("render.default_textarea_rows", 7)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.policy(), FailurePolicy::Strict);
        assert_eq!(config.render_options().default_textarea_rows, 7);
    }

    #[test]
    fn unknown_policy_fails_to_build() {
        let result = Loader::new()
            .set_override("document.policy", "forgiving")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn layers_user_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quizform.toml");
        fs::write(
            &path,
            "[form]\nsubmit_label = \"Send\"\n\n[document]\ntitle = \"Final exam\"\n",
        )
        .unwrap();

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.form.submit_label, "Send");
        assert_eq!(config.form.method, "post");
        assert_eq!(config.document.title.as_deref(), Some("Final exam"));

        let missing = dir.path().join("missing.toml");
        assert!(Loader::new().with_file(&missing).build().is_err());
        assert!(Loader::new().with_optional_file(&missing).build().is_ok());
    }
}
