//! Inline item parsers
//!
//! Extract choices written on the header line itself:
//!
//!     q = (x) Yes (=) No () Maybe             radio set, one tuple per marker
//!     q = [x] red -> Red [ ] blue -> Blue     checkbox set
//!     q = {BOS, [SFO], (NYC)}                 inline select, comma separated tokens

use crate::field::Item;
use crate::modifier::{Modifier, MODIFIER_CLASS};
use once_cell::sync::Lazy;
use regex::Regex;

/// Bracket pair used by a choice marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `( )`, radio style.
    Paren,
    /// `[ ]`, checkbox style.
    Square,
}

impl Marker {
    pub fn from_open(c: char) -> Option<Self> {
        match c {
            '(' => Some(Marker::Paren),
            '[' => Some(Marker::Square),
            _ => None,
        }
    }

    pub fn close(&self) -> char {
        match self {
            Marker::Paren => ')',
            Marker::Square => ']',
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Marker::Paren => &PAREN_MARKER,
            Marker::Square => &SQUARE_MARKER,
        }
    }
}

static PAREN_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\((?P<mod>{MODIFIER_CLASS})\)")).unwrap());
static SQUARE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\[(?P<mod>{MODIFIER_CLASS})\]")).unwrap());

/// Split `value -> label`. Without an arrow the text is both.
pub fn split_value_label(text: &str) -> (String, String) {
    match text.split_once("->") {
        Some((value, label)) => {
            let value = value.trim();
            let label = label.trim();
            match (value.is_empty(), label.is_empty()) {
                (true, _) => (label.to_string(), label.to_string()),
                (false, true) => (value.to_string(), value.to_string()),
                (false, false) => (value.to_string(), label.to_string()),
            }
        }
        None => {
            let text = text.trim();
            (text.to_string(), text.to_string())
        }
    }
}

/// Parse every `<marker><text>` tuple of a radio or checkbox right-hand side.
///
/// A tuple's text runs up to the next marker of the same kind. Tuples with no text are
/// dropped.
pub fn parse_marked_items(rhs: &str, marker: Marker) -> Vec<Item> {
    let markers: Vec<_> = marker.pattern().captures_iter(rhs).collect();
    let mut items = Vec::with_capacity(markers.len());

    for (index, caps) in markers.iter().enumerate() {
        let (Some(whole), Some(token)) = (caps.get(0), caps.name("mod")) else {
            continue;
        };
        let end = markers
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(rhs.len(), |m| m.start());
        let text = rhs[whole.end()..end].trim();
        if text.is_empty() {
            continue;
        }

        let modifier = Modifier::resolve(token.as_str());
        let (value, label) = split_value_label(text);
        items.push(
            Item::new(value, label)
                .selected(modifier.selected)
                .correct(modifier.correct),
        );
    }

    items
}

/// Parse the comma separated tokens between the braces of an inline select.
///
/// `(token)` and `[token]` both preselect the option; inline syntax has no separate
/// notion of a correct answer.
pub fn parse_select_tokens(inner: &str) -> Vec<Item> {
    inner
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let (text, selected) = match unwrap_marker(token) {
                Some(inner) => (inner, true),
                None => (token, false),
            };
            let (value, label) = split_value_label(text);
            if value.is_empty() {
                return None;
            }
            Some(Item::new(value, label).selected(selected))
        })
        .collect()
}

/// Strip a matching `(...)` or `[...]` pair around a token.
pub(crate) fn unwrap_marker(token: &str) -> Option<&str> {
    let marker = Marker::from_open(token.chars().next()?)?;
    token
        .get(1..)?
        .strip_suffix(marker.close())
        .map(str::trim)
}
