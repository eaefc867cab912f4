//! Data model for parsed question fields.
//!
//!     A field is born from one specification line (see [`crate::grammar::header`]), gets
//!     classified into an [`Element`] by the rule table, and is consumed by the renderer.
//!     Nothing here is retained across fields.

use serde::Serialize;

/// One parsed question definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// `<title>_<code>`, the identifier namespace of every DOM id this field emits.
    pub id: String,
    /// Submission name of the form control. Never empty, never contains whitespace.
    pub code: String,
    /// Human readable label, defaults to `code`.
    pub name: String,
    pub required: bool,
    /// Everything after the `=`, trimmed.
    pub rhs: String,
    /// The full text block the field was parsed from.
    pub raw_text: String,
}

impl FieldSpec {
    /// Identifier of the single control of text, textarea and select fields.
    pub fn control_id(&self) -> String {
        format!("{}-input", self.id)
    }

    /// Identifier of one choice within a set, suffixed with its value.
    pub fn item_id(&self, value: &str) -> String {
        format!("{}_{}", self.id, value)
    }
}

/// Pure classification of a right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    Text,
    Textarea,
    RadioSet,
    CheckboxSet,
    SelectInline,
    SelectMultiline,
    BareList,
    Unmatched,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Textarea => "textarea",
            ElementKind::RadioSet => "radio-set",
            ElementKind::CheckboxSet => "checkbox-set",
            ElementKind::SelectInline => "select-inline",
            ElementKind::SelectMultiline => "select-multiline",
            ElementKind::BareList => "bare-list",
            ElementKind::Unmatched => "unmatched",
        }
    }
}

/// One selectable choice within a radio, checkbox or select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Submission value.
    pub value: String,
    /// Display text.
    pub label: String,
    /// Preselected / checked by default.
    pub selected: bool,
    /// Marked as the correct answer. Styling hook only.
    pub correct: bool,
}

impl Item {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
            correct: false,
        }
    }

    /// An item whose value doubles as its label.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(text.clone(), text)
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn correct(mut self, correct: bool) -> Self {
        self.correct = correct;
        self
    }
}

/// Control type of a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChoiceControl {
    Radio,
    Checkbox,
}

impl ChoiceControl {
    /// The `type` attribute of the emitted input.
    pub fn input_type(&self) -> &'static str {
        match self {
            ChoiceControl::Radio => "radio",
            ChoiceControl::Checkbox => "checkbox",
        }
    }

    /// Submission name for a field code. Checkboxes submit arrays.
    pub fn submission_name(&self, code: &str) -> String {
        match self {
            ChoiceControl::Radio => code.to_string(),
            ChoiceControl::Checkbox => format!("{code}[]"),
        }
    }
}

/// A bare-list line: each line picks its own control type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub control: ChoiceControl,
    pub item: Item,
}

/// A classified element together with its resolved payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Element {
    Text { width: Option<u32> },
    Textarea { rows: u32 },
    RadioSet { items: Vec<Item> },
    CheckboxSet { items: Vec<Item> },
    SelectInline { items: Vec<Item> },
    SelectMultiline { items: Vec<Item> },
    BareList { entries: Vec<ListEntry> },
    Unmatched,
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Text { .. } => ElementKind::Text,
            Element::Textarea { .. } => ElementKind::Textarea,
            Element::RadioSet { .. } => ElementKind::RadioSet,
            Element::CheckboxSet { .. } => ElementKind::CheckboxSet,
            Element::SelectInline { .. } => ElementKind::SelectInline,
            Element::SelectMultiline { .. } => ElementKind::SelectMultiline,
            Element::BareList { .. } => ElementKind::BareList,
            Element::Unmatched => ElementKind::Unmatched,
        }
    }

    /// Items of the option-bearing kinds, in source order.
    pub fn items(&self) -> Vec<&Item> {
        match self {
            Element::RadioSet { items }
            | Element::CheckboxSet { items }
            | Element::SelectInline { items }
            | Element::SelectMultiline { items } => items.iter().collect(),
            Element::BareList { entries } => entries.iter().map(|entry| &entry.item).collect(),
            Element::Text { .. } | Element::Textarea { .. } | Element::Unmatched => Vec::new(),
        }
    }
}
