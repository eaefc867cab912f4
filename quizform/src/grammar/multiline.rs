//! Multiline item parsers
//!
//! Parse the body lines of a block whose header opened a multiline select (`q = {`) or a
//! bare list (`q =`). Line patterns are data, tried in declaration order; the first one
//! that matches wins and lines matching none are skipped.

use crate::field::{ChoiceControl, Item, ListEntry};
use crate::grammar::items::{split_value_label, Marker};
use crate::modifier::{Modifier, MODIFIER_CLASS};
use once_cell::sync::Lazy;
use regex::Regex;

/// What a matched line pattern implies for the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineMark {
    /// Wrapped in parentheses.
    Selected,
    /// Wrapped in square brackets.
    Correct,
    Plain,
}

/// Line grammar, in priority order.
const LINE_PATTERNS: &[(&str, LineMark, &str)] = &[
    (
        "selected_pair",
        LineMark::Selected,
        r"^\((?P<value>.+?)\s*->\s*(?P<label>.+)\)$",
    ),
    (
        "correct_pair",
        LineMark::Correct,
        r"^\[(?P<value>.+?)\s*->\s*(?P<label>.+)\]$",
    ),
    (
        "plain_pair",
        LineMark::Plain,
        r"^(?P<value>[^(\[].*?)\s*->\s*(?P<label>.+)$",
    ),
    ("selected_value", LineMark::Selected, r"^\((?P<value>.+)\)$"),
    ("correct_value", LineMark::Correct, r"^\[(?P<value>.+)\]$"),
    ("plain_value", LineMark::Plain, r"^(?P<value>[^(\[].*)$"),
];

static COMPILED_PATTERNS: Lazy<Vec<(&'static str, LineMark, Regex)>> = Lazy::new(|| {
    LINE_PATTERNS
        .iter()
        .map(|(name, mark, pattern)| (*name, *mark, Regex::new(pattern).unwrap()))
        .collect()
});

/// `(x) value -> label`, `[=] value`: a marker holding a modifier, followed by text.
static MODIFIED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?P<open>[(\[])(?P<mod>{MODIFIER_CLASS})(?P<close>[)\]])\s*(?P<text>\S.*)$"
    ))
    .unwrap()
});

/// Match one trimmed line against the line grammar.
fn match_line(line: &str) -> Option<(&'static str, LineMark, Item)> {
    COMPILED_PATTERNS.iter().find_map(|(name, mark, regex)| {
        let caps = regex.captures(line)?;
        let value = caps.name("value")?.as_str().trim();
        let label = caps.name("label").map_or(value, |m| m.as_str().trim());
        if value.is_empty() {
            return None;
        }
        Some((*name, *mark, Item::new(value, label)))
    })
}

/// Body lines of a multiline select. A line made of just `}` closes the block.
///
/// `(...)` lines are preselected and `[...]` lines are marked correct; unlike the inline
/// notation the two are kept apart.
pub fn parse_select_lines(lines: &[&str]) -> Vec<Item> {
    let mut items = Vec::new();
    for line in lines.iter().map(|line| line.trim()) {
        if line.is_empty() {
            continue;
        }
        if line == "}" {
            break;
        }
        if let Some((_, mark, item)) = match_line(line) {
            items.push(match mark {
                LineMark::Selected => item.selected(true),
                LineMark::Correct => item.correct(true),
                LineMark::Plain => item,
            });
        }
    }
    items
}

/// Body lines of a bare list.
///
/// The leading bracket of each line picks the control: `(` is a radio, `[` a checkbox.
/// A marker holding a modifier (`(x) Yes`) resolves flags through [`Modifier`]; a fully
/// wrapped line (`(yes -> Yes)`, `[no]`) is selected for parentheses and correct for
/// square brackets. Lines without a leading marker have no control type and are skipped.
pub fn parse_list_lines(lines: &[&str]) -> Vec<ListEntry> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter_map(parse_list_line)
        .collect()
}

fn parse_list_line(line: &str) -> Option<ListEntry> {
    let control = match Marker::from_open(line.chars().next()?)? {
        Marker::Paren => ChoiceControl::Radio,
        Marker::Square => ChoiceControl::Checkbox,
    };

    if let Some(caps) = MODIFIED_LINE.captures(line) {
        let open = caps.name("open")?.as_str();
        let close = caps.name("close")?.as_str();
        if matches!((open, close), ("(", ")") | ("[", "]")) {
            let modifier = Modifier::resolve(caps.name("mod")?.as_str());
            let (value, label) = split_value_label(caps.name("text")?.as_str());
            let item = Item::new(value, label)
                .selected(modifier.selected)
                .correct(modifier.correct);
            return Some(ListEntry { control, item });
        }
    }

    let (_, mark, item) = match_line(line)?;
    let item = match mark {
        LineMark::Selected => item.selected(true),
        LineMark::Correct => item.correct(true),
        LineMark::Plain => return None,
    };
    Some(ListEntry { control, item })
}
