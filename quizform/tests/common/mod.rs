//! Shared helpers for the integration tests.

use quizform::{
    render_block, transform, Diagnostic, FailurePolicy, FormDocument, Fragment, RenderOptions,
};

/// Compile one block under the `quiz` namespace, collecting diagnostics.
pub fn field(block: &str) -> (Fragment, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let fragment = render_block(block, "quiz", &RenderOptions::default(), &mut diagnostics)
        .expect("block to compile")
        .expect("block to be a field");
    (fragment, diagnostics)
}

/// Compile a whole document leniently.
pub fn document(source: &str, title: &str) -> (FormDocument, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let doc = transform(
        source,
        title,
        &RenderOptions::default(),
        FailurePolicy::Lenient,
        &mut diagnostics,
    )
    .expect("lenient transform to succeed");
    (doc, diagnostics)
}
