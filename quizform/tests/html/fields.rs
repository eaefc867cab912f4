//! Field markup through `render_block`.

use crate::common::field;
use insta::assert_snapshot;
use quizform::formats::html::render_field;
use quizform::{Element, FieldSpec, Item, RenderOptions};

#[test]
fn test_required_radio_set() {
    let (fragment, _) = field("q -> Pick one *= (x) A (=) B () C");
    assert_snapshot!(fragment.markup, @r#"<div id="quiz_q" class="qf-field qf-required" data-code="q"><span class="qf-label">Pick one</span><span class="qf-choice"><input type="radio" id="quiz_q_A" name="q" value="A" checked=""><label for="quiz_q_A">A</label></span><span class="qf-choice qf-correct"><input type="radio" id="quiz_q_B" name="q" value="B"><label for="quiz_q_B">B</label></span><span class="qf-choice"><input type="radio" id="quiz_q_C" name="q" value="C"><label for="quiz_q_C">C</label></span></div>"#);
}

#[test]
fn test_inline_select() {
    let (fragment, _) = field("city = {BOS, [SFO], (NYC)}");
    assert_snapshot!(fragment.markup, @r#"<div id="quiz_city" class="qf-field" data-code="city"><label class="qf-label" for="quiz_city-input">city</label><select id="quiz_city-input" name="city"><option value="" disabled=""></option><option value="BOS">BOS</option><option value="SFO" selected="">SFO</option><option value="NYC" selected="">NYC</option></select></div>"#);
}

#[test]
fn test_textarea_default_rows() {
    let (fragment, _) = field("essay -> Explain = [ ]");
    assert_snapshot!(fragment.markup, @r#"<div id="quiz_essay" class="qf-field" data-code="essay"><label class="qf-label" for="quiz_essay-input">Explain</label><textarea id="quiz_essay-input" name="essay" rows="3"></textarea></div>"#);
}

#[test]
fn test_checkbox_set_names_and_ids() {
    let (fragment, _) = field("langs = [x] Rust [ ] C [=] Go");
    let html = fragment.markup;
    assert_eq!(html.matches("name=\"langs[]\"").count(), 3);
    assert!(html.contains("id=\"quiz_langs_Rust\" name=\"langs[]\" value=\"Rust\" checked=\"\""));
    assert!(html.contains("<span class=\"qf-choice qf-correct\"><input type=\"checkbox\" id=\"quiz_langs_Go\""));
}

#[test]
fn test_multiline_select_marks_correct_options() {
    let (fragment, _) =
        field("city -> City = {\n  (NYC -> New York City)\n  [SFO -> San Francisco]\n  BOS -> Boston\n}");
    let html = fragment.markup;
    assert!(html.contains("<option value=\"\" disabled=\"\"></option>"));
    assert!(html.contains("<option value=\"NYC\" selected=\"\">New York City</option>"));
    assert!(html.contains("<option value=\"SFO\" class=\"qf-correct\">San Francisco</option>"));
    assert!(html.contains("<option value=\"BOS\">Boston</option>"));
}

#[test]
fn test_value_and_label_split_in_inline_items() {
    let (fragment, _) = field("q = (x) y -> Yes () n -> No");
    let html = fragment.markup;
    assert!(html.contains("id=\"quiz_q_y\" name=\"q\" value=\"y\" checked=\"\""));
    assert!(html.contains("<label for=\"quiz_q_y\">Yes</label>"));
    assert!(html.contains("<label for=\"quiz_q_n\">No</label>"));
}

#[test]
fn test_same_spec_renders_identically() {
    let spec = FieldSpec {
        id: "quiz_q".to_string(),
        code: "q".to_string(),
        name: "Q".to_string(),
        required: true,
        rhs: "{a, (b)}".to_string(),
        raw_text: "q *= {a, (b)}".to_string(),
    };
    let element = Element::SelectInline {
        items: vec![Item::plain("a"), Item::plain("b").selected(true)],
    };
    let options = RenderOptions::default();
    let first = render_field(&spec, &element, &options).unwrap();
    let second = render_field(&spec, &element, &options).unwrap();
    assert_eq!(first, second);
}
