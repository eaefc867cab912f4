//! Element classification through the public entry points.

use crate::common::field;
use quizform::{Element, ElementKind, Item, Severity};

#[test]
fn empty_rhs_is_an_empty_bare_list() {
    for code in ["code", "q1", "snake_case"] {
        let (fragment, diagnostics) = field(&format!("{code} = "));
        assert_eq!(fragment.element, Element::BareList { entries: vec![] });
        assert_eq!(fragment.spec.code, code);
        assert!(diagnostics.is_empty());
    }
}

#[test]
fn required_radio_set_with_modifiers() {
    let (fragment, _) = field("q -> Pick one *= (x) A (=) B () C");
    assert!(fragment.spec.required);
    assert_eq!(fragment.spec.name, "Pick one");
    assert_eq!(
        fragment.element,
        Element::RadioSet {
            items: vec![
                Item::plain("A").selected(true),
                Item::plain("B").correct(true),
                Item::plain("C"),
            ]
        }
    );
}

#[test]
fn text_width_is_optional() {
    let (fragment, _) = field("q = ___[50]");
    assert_eq!(fragment.element, Element::Text { width: Some(50) });
    let (fragment, _) = field("q = ___");
    assert_eq!(fragment.element, Element::Text { width: None });
}

#[test]
fn textarea_rows_default_to_three() {
    let (fragment, _) = field("q = [   5]");
    assert_eq!(fragment.element, Element::Textarea { rows: 5 });
    let (fragment, _) = field("q = [ ]");
    assert_eq!(fragment.element, Element::Textarea { rows: 3 });
}

#[test]
fn inline_select_collapses_brackets_into_selected() {
    let (fragment, _) = field("q = {BOS, [SFO], (NYC)}");
    assert_eq!(
        fragment.element,
        Element::SelectInline {
            items: vec![
                Item::plain("BOS"),
                Item::plain("SFO").selected(true),
                Item::plain("NYC").selected(true),
            ]
        }
    );
}

#[test]
fn multiline_select_distinguishes_selected_from_correct() {
    let (fragment, _) =
        field("q = {\n    (NYC -> New York City)\n    [SFO -> San Francisco]\n    BOS -> Boston\n}");
    assert_eq!(
        fragment.element,
        Element::SelectMultiline {
            items: vec![
                Item::new("NYC", "New York City").selected(true),
                Item::new("SFO", "San Francisco").correct(true),
                Item::new("BOS", "Boston"),
            ]
        }
    );
}

#[test]
fn bare_list_lines_pick_their_control() {
    let (fragment, _) = field("q -> Which apply? =\n    (x) one\n    [=] two\n    [] three");
    let Element::BareList { entries } = &fragment.element else {
        panic!("expected a bare list, got {:?}", fragment.element);
    };
    let controls: Vec<_> = entries.iter().map(|e| e.control.input_type()).collect();
    assert_eq!(controls, vec!["radio", "checkbox", "checkbox"]);
    assert!(entries[0].item.selected);
    assert!(entries[1].item.correct);
    assert_eq!(entries[2].item.value, "three");
}

#[test]
fn unknown_rhs_degrades_to_label_only() {
    let (fragment, diagnostics) = field("q -> Mystery = ???");
    assert_eq!(fragment.kind(), ElementKind::Unmatched);
    assert!(fragment.markup.contains("<span class=\"qf-label\">Mystery</span>"));
    assert!(!fragment.markup.contains("<input"));
    assert!(!fragment.markup.contains("<select"));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].field_id, "quiz_q");
    assert!(diagnostics[0].message.contains("???"));
}

#[test]
fn lettered_and_numbered_markers_keep_their_controls() {
    let (fragment, diagnostics) = field("fruit -> Fruit = (a) Apple (b) Banana");
    assert_eq!(
        fragment.element,
        Element::RadioSet {
            items: vec![Item::plain("Apple"), Item::plain("Banana")]
        }
    );
    assert!(fragment.markup.contains("<input type=\"radio\" id=\"quiz_fruit_Apple\" name=\"fruit\""));
    assert!(diagnostics.is_empty());

    let (fragment, _) = field("n = [1] One [2] Two");
    assert_eq!(fragment.kind(), ElementKind::CheckboxSet);
    assert_eq!(fragment.markup.matches("name=\"n[]\"").count(), 2);

    let (fragment, _) = field("yn = (o) Yes (o) No");
    assert_eq!(fragment.kind(), ElementKind::RadioSet);
    assert_eq!(fragment.element.items().len(), 2);
}

#[test]
fn multiline_select_skips_unrecognized_body_lines() {
    let (fragment, diagnostics) = field("q = {\n    (x] broken\n    (a -> b\n    BOS -> Boston\n}");
    assert_eq!(
        fragment.element,
        Element::SelectMultiline {
            items: vec![Item::new("BOS", "Boston")]
        }
    );
    assert!(diagnostics.is_empty());
}
