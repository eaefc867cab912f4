//! Document transform
//!
//!     A host document is Markdown-ish plaintext. It is cut into slides at ATX headings and
//!     each slide into paragraph-like blocks at blank lines. Every block is offered to the
//!     field grammar; blocks that are fields are replaced by their markup, everything else
//!     is passed through untouched.
//!
//!     source ──split──▶ slides ──render_block──▶ FormDocument (fragments in source order)
//!
//!     The transform is pure: it returns new values and never mutates a host tree. Fenced
//!     code blocks are passed through whole, so examples of the syntax inside ``` fences
//!     are not compiled.
//!
//! Failure Policy
//!
//!     A field that fails with [`FormError::MalformedSpec`] is always reported to the
//!     diagnostics sink. Under [`FailurePolicy::Strict`] the whole transform fails and no
//!     document is produced; under [`FailurePolicy::Lenient`] the block stays as plain text
//!     and the rest of the document is compiled normally.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::FormError;
use crate::field::{Element, ElementKind, FieldSpec};
use crate::formats::html::render_field;
use crate::grammar::{classify, parse_block};
use crate::options::{FailurePolicy, RenderOptions};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Namespace used when a title slugifies to nothing.
const FALLBACK_NAMESPACE: &str = "form";

/// A compiled field: the parsed spec, its classification and the emitted markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    pub spec: FieldSpec,
    pub element: Element,
    pub markup: String,
}

impl Fragment {
    pub fn kind(&self) -> ElementKind {
        self.element.kind()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum Block {
    /// Passed through to the host unchanged.
    Text(String),
    Field(Fragment),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub title: String,
    /// Slug of the title, unique within the document. Prefix of every field id.
    pub namespace: String,
    pub blocks: Vec<Block>,
}

impl Slide {
    pub fn has_fields(&self) -> bool {
        self.fields().next().is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = &Fragment> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Field(fragment) => Some(fragment),
            Block::Text(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormDocument {
    pub title: String,
    pub slides: Vec<Slide>,
}

impl FormDocument {
    pub fn fields(&self) -> impl Iterator<Item = &Fragment> {
        self.slides.iter().flat_map(|slide| slide.fields())
    }
}

/// Compile one text block.
///
/// Returns `Ok(None)` when the block is not a field header. An unmatched right-hand side
/// still yields a label-only fragment and reports one warning naming the offending text.
pub fn render_block(
    block: &str,
    title: &str,
    options: &RenderOptions,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Option<Fragment>, FormError> {
    let Some((spec, body)) = parse_block(block, title) else {
        return Ok(None);
    };

    let element = classify(&spec, &body, options)?;
    tracing::debug!(field = %spec.id, kind = element.kind().as_str(), "classified field");
    if element == Element::Unmatched {
        diagnostics.report(Diagnostic::warning(
            &spec.id,
            format!("unmatched element '{}', rendering label only", spec.rhs),
        ));
    }

    let markup = render_field(&spec, &element, options)?;
    Ok(Some(Fragment {
        spec,
        element,
        markup,
    }))
}

/// Compile a whole document.
pub fn transform(
    source: &str,
    title: &str,
    options: &RenderOptions,
    policy: FailurePolicy,
    diagnostics: &mut dyn Diagnostics,
) -> Result<FormDocument, FormError> {
    let mut namespaces = Namespaces::default();
    let mut slides = Vec::new();

    for raw in split_slides(source, title) {
        let namespace = namespaces.claim(&raw.title);
        let mut seen_codes = HashSet::new();
        let mut blocks = Vec::with_capacity(raw.blocks.len());

        for raw_block in raw.blocks {
            if !raw_block.candidate {
                blocks.push(Block::Text(raw_block.text));
                continue;
            }
            match render_block(&raw_block.text, &namespace, options, diagnostics) {
                Ok(Some(fragment)) => {
                    if !seen_codes.insert(fragment.spec.code.clone()) {
                        diagnostics.report(Diagnostic::warning(
                            &fragment.spec.id,
                            format!(
                                "field code '{}' is used more than once on this slide",
                                fragment.spec.code
                            ),
                        ));
                    }
                    blocks.push(Block::Field(fragment));
                }
                Ok(None) => blocks.push(Block::Text(raw_block.text)),
                Err(err) => {
                    let field = err.field().unwrap_or(namespace.as_str()).to_string();
                    diagnostics.report(Diagnostic::error(field, err.to_string()));
                    match policy {
                        FailurePolicy::Strict => return Err(err),
                        FailurePolicy::Lenient => blocks.push(Block::Text(raw_block.text)),
                    }
                }
            }
        }

        slides.push(Slide {
            title: raw.title,
            namespace,
            blocks,
        });
    }

    let document = FormDocument {
        title: title.to_string(),
        slides,
    };
    tracing::debug!(
        slides = document.slides.len(),
        fields = document.fields().count(),
        "compiled document"
    );
    Ok(document)
}

/// Turn a title into an identifier-safe slug.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        FALLBACK_NAMESPACE.to_string()
    } else {
        slug
    }
}

/// Hands out slide namespaces, suffixing repeats with `-2`, `-3`, ...
///
/// A suffixed name is never one already handed out, even when another heading slugs to it.
#[derive(Debug, Default)]
struct Namespaces {
    used: HashSet<String>,
    suffixes: HashMap<String, usize>,
}

impl Namespaces {
    fn claim(&mut self, title: &str) -> String {
        let slug = slugify(title);
        if self.used.insert(slug.clone()) {
            return slug;
        }
        let suffix = self.suffixes.entry(slug.clone()).or_insert(1);
        loop {
            *suffix += 1;
            let candidate = format!("{slug}-{suffix}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawBlock {
    pub text: String,
    /// Whether the block may be a field. Headings and fenced code may not.
    pub candidate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawSlide {
    pub title: String,
    pub blocks: Vec<RawBlock>,
}

impl RawSlide {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }
}

fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.len() - line.trim_start_matches('#').len();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }
    Some(rest.trim().trim_end_matches('#').trim())
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Cut a document into slides and blocks.
pub(crate) fn split_slides(source: &str, document_title: &str) -> Vec<RawSlide> {
    let mut slides = vec![RawSlide::new(document_title)];
    let mut current = String::new();
    let mut in_fence = false;

    fn flush(slides: &mut [RawSlide], current: &mut String, candidate: bool) {
        let text = current.trim_end_matches('\n');
        if !text.trim().is_empty() {
            if let Some(slide) = slides.last_mut() {
                slide.blocks.push(RawBlock {
                    text: text.to_string(),
                    candidate,
                });
            }
        }
        current.clear();
    }

    for line in source.lines() {
        if in_fence {
            current.push_str(line);
            current.push('\n');
            if is_fence(line) {
                in_fence = false;
                flush(&mut slides, &mut current, false);
            }
            continue;
        }

        if is_fence(line) {
            flush(&mut slides, &mut current, true);
            in_fence = true;
            current.push_str(line);
            current.push('\n');
        } else if let Some(title) = heading_text(line) {
            flush(&mut slides, &mut current, true);
            slides.push(RawSlide::new(title));
            current.push_str(line);
            flush(&mut slides, &mut current, false);
        } else if line.trim().is_empty() {
            flush(&mut slides, &mut current, true);
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    flush(&mut slides, &mut current, !in_fence);

    if slides.len() > 1 && slides[0].blocks.is_empty() {
        slides.remove(0);
    }
    slides
}
