//! Element grammar rules
//!
//! The right-hand side of a field is classified by an ordered table of named rules. Some
//! grammars are prefixes of others (`[ ]` is a textarea, `[ ] A` a checkbox set), so the
//! order is part of the grammar:
//!
//!     1. textarea           [ ]  [   5]
//!     2. text               ___  ___[50]
//!     3. radio_set          (x) A () B
//!     4. checkbox_set       [x] A [ ] B
//!     5. select_inline      {BOS, [SFO], (NYC)}
//!     6. select_multiline   {            options on the following lines
//!     7. bare_list          (empty)      choices on the following lines
//!
//! Every rule is independently callable and answers `Ok(None)` when it does not apply.
//! If no rule applies the element is [`Element::Unmatched`].

use crate::error::FormError;
use crate::field::{Element, ElementKind, FieldSpec};
use crate::grammar::items::{parse_marked_items, parse_select_tokens, Marker};
use crate::grammar::multiline::{parse_list_lines, parse_select_lines};
use crate::modifier::MODIFIER_CLASS;
use crate::options::RenderOptions;
use once_cell::sync::Lazy;
use regex::Regex;

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub field: &'a FieldSpec,
    /// Trimmed right-hand side.
    pub rhs: &'a str,
    /// Lines of the block after the header.
    pub body: &'a [&'a str],
    pub options: &'a RenderOptions,
}

pub type RuleResult = Result<Option<Element>, FormError>;

/// A named element grammar.
pub struct Rule {
    pub name: &'static str,
    pub kind: ElementKind,
    pub apply: fn(&RuleInput<'_>) -> RuleResult,
}

/// The element grammars in dispatch order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "textarea",
        kind: ElementKind::Textarea,
        apply: textarea,
    },
    Rule {
        name: "text",
        kind: ElementKind::Text,
        apply: text,
    },
    Rule {
        name: "radio_set",
        kind: ElementKind::RadioSet,
        apply: radio_set,
    },
    Rule {
        name: "checkbox_set",
        kind: ElementKind::CheckboxSet,
        apply: checkbox_set,
    },
    Rule {
        name: "select_inline",
        kind: ElementKind::SelectInline,
        apply: select_inline,
    },
    Rule {
        name: "select_multiline",
        kind: ElementKind::SelectMultiline,
        apply: select_multiline,
    },
    Rule {
        name: "bare_list",
        kind: ElementKind::BareList,
        apply: bare_list,
    },
];

static TEXTAREA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[\s*(?P<rows>\d*)\s*\]$").unwrap());
static TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^_{3,}(?:\[\s*(?P<width>\d+)\s*\])?$").unwrap());
static RADIO_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\({MODIFIER_CLASS}\)")).unwrap());
static CHECKBOX_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\[{MODIFIER_CLASS}\]")).unwrap());
static SELECT_INLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{(?P<inner>.*)\}$").unwrap());

/// Classify a field by running [`RULES`] in order.
pub fn classify(
    field: &FieldSpec,
    body: &[&str],
    options: &RenderOptions,
) -> Result<Element, FormError> {
    let input = RuleInput {
        field,
        rhs: field.rhs.trim(),
        body,
        options,
    };
    for rule in RULES {
        if let Some(element) = (rule.apply)(&input)? {
            return Ok(element);
        }
    }
    Ok(Element::Unmatched)
}

/// Look up a rule by name.
pub fn rule(name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.name == name)
}

fn parse_dimension(input: &RuleInput<'_>, what: &str, digits: &str) -> Result<u32, FormError> {
    digits.parse::<u32>().map_err(|err| {
        FormError::malformed(
            &input.field.id,
            format!("{what} '{digits}' in '{}' is not usable: {err}", input.rhs),
        )
    })
}

pub fn textarea(input: &RuleInput<'_>) -> RuleResult {
    let Some(caps) = TEXTAREA.captures(input.rhs) else {
        return Ok(None);
    };
    let rows = match caps.name("rows").map(|m| m.as_str()) {
        Some(digits) if !digits.is_empty() => parse_dimension(input, "row count", digits)?,
        _ => input.options.default_textarea_rows,
    };
    Ok(Some(Element::Textarea { rows }))
}

pub fn text(input: &RuleInput<'_>) -> RuleResult {
    let Some(caps) = TEXT.captures(input.rhs) else {
        return Ok(None);
    };
    let width = caps
        .name("width")
        .map(|m| parse_dimension(input, "width", m.as_str()))
        .transpose()?;
    Ok(Some(Element::Text { width }))
}

pub fn radio_set(input: &RuleInput<'_>) -> RuleResult {
    if !RADIO_START.is_match(input.rhs) {
        return Ok(None);
    }
    Ok(Some(Element::RadioSet {
        items: parse_marked_items(input.rhs, Marker::Paren),
    }))
}

pub fn checkbox_set(input: &RuleInput<'_>) -> RuleResult {
    if !CHECKBOX_START.is_match(input.rhs) {
        return Ok(None);
    }
    Ok(Some(Element::CheckboxSet {
        items: parse_marked_items(input.rhs, Marker::Square),
    }))
}

pub fn select_inline(input: &RuleInput<'_>) -> RuleResult {
    let Some(caps) = SELECT_INLINE.captures(input.rhs) else {
        return Ok(None);
    };
    let inner = caps.name("inner").map_or("", |m| m.as_str());
    Ok(Some(Element::SelectInline {
        items: parse_select_tokens(inner),
    }))
}

pub fn select_multiline(input: &RuleInput<'_>) -> RuleResult {
    if input.rhs != "{" {
        return Ok(None);
    }
    Ok(Some(Element::SelectMultiline {
        items: parse_select_lines(input.body),
    }))
}

pub fn bare_list(input: &RuleInput<'_>) -> RuleResult {
    if !input.rhs.is_empty() {
        return Ok(None);
    }
    Ok(Some(Element::BareList {
        entries: parse_list_lines(input.body),
    }))
}
