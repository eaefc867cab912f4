//! Field header line grammar
//!
//!     <code> [-> <name>] [*]= [<rhs>]
//!
//! `code` is a run of word characters, `name` falls back to `code`, a `*` right before the
//! `=` marks the field as required, and `rhs` is whatever follows the `=`.

use crate::field::FieldSpec;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?P<code>\w+)\s*(?:->\s*(?P<name>[^=]*?))?\s*(?P<required>\*)?=(?P<rhs>.*)$",
    )
    .unwrap()
});

/// Parse a single candidate line. `None` means the line is not a field header.
///
/// `raw_text` of the returned spec is the line itself; [`parse_block`] replaces it with
/// the whole block.
pub fn parse_header(line: &str, title: &str) -> Option<FieldSpec> {
    let caps = HEADER.captures(line)?;
    let code = caps.name("code")?.as_str().to_string();
    let name = caps
        .name("name")
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(&code)
        .to_string();
    let rhs = caps.name("rhs").map_or("", |m| m.as_str()).trim().to_string();

    Some(FieldSpec {
        id: format!("{title}_{code}"),
        required: caps.name("required").is_some(),
        name,
        rhs,
        raw_text: line.to_string(),
        code,
    })
}

/// Parse a text block: the first line is the header, the rest is the body handed to the
/// multiline parsers.
///
/// Body lines are never reinterpreted as new headers, so `b = ___` inside a select body is
/// an option, not a field.
pub fn parse_block<'a>(block: &'a str, title: &str) -> Option<(FieldSpec, Vec<&'a str>)> {
    let mut lines = block.lines();
    let first = lines.next()?;
    let mut spec = parse_header(first, title)?;
    spec.raw_text = block.to_string();
    Some((spec, lines.collect()))
}
