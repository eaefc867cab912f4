//! Full page serialization (document → HTML).

use crate::common::document;
use quizform::formats::html::{HtmlFormat, HtmlOptions};
use quizform::{Format, FormOptions, FormatRegistry};
use std::collections::HashMap;

const QUIZ: &str = "\
Welcome to the **weekly** quiz.

# Part one

name -> Your name *= ___[40]

Some prose between fields.

# Part two

Nothing to answer here.

# Part one

q = (x) A () B
";

#[test]
fn test_page_structure() {
    let (doc, diagnostics) = document(QUIZ, "Weekly Quiz");
    assert!(diagnostics.is_empty());

    let html = HtmlFormat::default().serialize(&doc).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Weekly Quiz</title>"));
    assert!(html.contains("<div class=\"qf-document\">"));
    assert!(html.contains(".qf-field"));
    assert!(html.contains("<p>Welcome to the <strong>weekly</strong> quiz.</p>"));
}

#[test]
fn test_slides_and_forms() {
    let (doc, _) = document(QUIZ, "Weekly Quiz");
    let namespaces: Vec<_> = doc.slides.iter().map(|s| s.namespace.as_str()).collect();
    assert_eq!(
        namespaces,
        vec!["weekly-quiz", "part-one", "part-two", "part-one-2"]
    );

    let html = HtmlFormat::default().serialize(&doc).unwrap();
    assert!(html.contains("<form id=\"part-one\" class=\"qf-form\" method=\"post\">"));
    assert!(html.contains("<form id=\"part-one-2\" class=\"qf-form\" method=\"post\">"));
    assert!(!html.contains("<form id=\"part-two\""));
    assert!(!html.contains("<form id=\"weekly-quiz\""));
    assert!(html.contains("<section class=\"qf-slide\" data-slide=\"part-two\">"));
    assert!(html.contains("id=\"part-one_name\""));
    assert!(html.contains("id=\"part-one-2_q_A\""));

    let prose = html.find("Some prose between fields.").unwrap();
    let field = html.find("id=\"part-one_name\"").unwrap();
    assert!(field < prose);
}

#[test]
fn test_form_options_and_custom_css() {
    let (doc, _) = document("q = ___\n", "Quiz");
    let options = HtmlOptions::new(FormOptions {
        method: "get".to_string(),
        action: "/answers".to_string(),
        submit_label: "Submit".to_string(),
    })
    .with_custom_css(".qf-field { color: teal; }".to_string());

    let html = HtmlFormat::new(options).serialize(&doc).unwrap();
    assert!(html.contains("<form id=\"quiz\" class=\"qf-form\" method=\"get\" action=\"/answers\">"));
    assert!(html.contains("<button type=\"submit\">Submit</button>"));
    assert!(html.contains(".qf-field { color: teal; }"));
}

#[test]
fn test_registry_parameters() {
    let (doc, _) = document("q = ___\n", "Quiz");
    let registry = FormatRegistry::default();

    let mut params = HashMap::new();
    params.insert("submit-label".to_string(), "Go".to_string());
    let html = registry.serialize_with_options(&doc, "html", &params).unwrap();
    assert!(html.contains("<button type=\"submit\">Go</button>"));

    params.insert("theme".to_string(), "dark".to_string());
    assert!(registry.serialize_with_options(&doc, "html", &params).is_err());
}

#[test]
fn test_fenced_code_is_left_alone() {
    let (doc, _) = document("```\nq = ___\n```\n", "Quiz");
    assert_eq!(doc.fields().count(), 0);
    let html = HtmlFormat::default().serialize(&doc).unwrap();
    assert!(html.contains("<pre><code>q = ___\n</code></pre>"));
}
