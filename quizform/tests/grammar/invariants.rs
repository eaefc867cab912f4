//! Property tests over generated field specifications.

use quizform::{render_block, RenderOptions};
use proptest::prelude::*;

fn code() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

fn values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z]{1,6}", 1..5)
}

fn markers() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(vec!["", "x", "=", "X=", " "]), 5)
}

fn inline_set(open: char, close: char, values: &[String], mods: &[&str]) -> String {
    values
        .iter()
        .zip(mods.iter().cycle())
        .map(|(value, modifier)| format!("{open}{modifier}{close} {value}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn markup(block: &str) -> String {
    let mut diagnostics = Vec::new();
    render_block(block, "quiz", &RenderOptions::default(), &mut diagnostics)
        .expect("block to compile")
        .expect("block to be a field")
        .markup
}

fn submission_names(markup: &str) -> Vec<&str> {
    markup
        .split("name=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

proptest! {
    #[test]
    fn rendering_is_deterministic(code in code(), values in values(), mods in markers()) {
        let block = format!("{code} -> Question *= {}", inline_set('(', ')', &values, &mods));
        prop_assert_eq!(markup(&block), markup(&block));
    }

    #[test]
    fn checkbox_names_carry_the_array_suffix(code in code(), values in values(), mods in markers()) {
        let block = format!("{code} = {}", inline_set('[', ']', &values, &mods));
        let html = markup(&block);
        let names = submission_names(&html);
        prop_assert_eq!(names.len(), values.len());
        let expected = format!("{code}[]");
        for name in names {
            prop_assert_eq!(name, expected.as_str());
        }
    }

    #[test]
    fn radio_and_text_names_are_bare(code in code(), values in values(), mods in markers()) {
        let radio = markup(&format!("{code} = {}", inline_set('(', ')', &values, &mods)));
        let text = markup(&format!("{code} = ___"));
        let textarea = markup(&format!("{code} = [ ]"));
        for html in [&radio, &text, &textarea] {
            for name in submission_names(html) {
                prop_assert_eq!(name, code.as_str());
            }
        }
    }
}
