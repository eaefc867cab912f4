//! Per-item modifier tokens.
//!
//! A modifier is the short token inside a choice marker, e.g. the `x` in `(x) Yes` or the
//! `X=` in `[X=] Both`. Matching is case-insensitive: `x` preselects the item, `=` marks it
//! as the correct answer. Any other marker character (`(a) Apple`, `[1] One`) is a plain
//! item.

/// Contents of a choice marker: up to three flag characters, or any single character
/// other than a bracket.
pub(crate) const MODIFIER_CLASS: &str = r"(?:[xX= ]{0,3}|[^()\[\]])";

/// Resolved flags of a modifier token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifier {
    pub selected: bool,
    pub correct: bool,
}

impl Modifier {
    /// Resolve a token. The caller's string is never touched; folding happens on a copy.
    pub fn resolve(token: &str) -> Self {
        let normalized = token.to_lowercase();
        Self {
            selected: normalized.contains('x'),
            correct: normalized.contains('='),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_sets_nothing() {
        assert_eq!(Modifier::resolve(""), Modifier::default());
        assert_eq!(Modifier::resolve(" "), Modifier::default());
    }

    #[test]
    fn flags_are_case_insensitive_and_combine() {
        assert_eq!(
            Modifier::resolve("x"),
            Modifier {
                selected: true,
                correct: false
            }
        );
        assert_eq!(
            Modifier::resolve("="),
            Modifier {
                selected: false,
                correct: true
            }
        );
        assert_eq!(
            Modifier::resolve("X="),
            Modifier {
                selected: true,
                correct: true
            }
        );
    }

    #[test]
    fn other_characters_are_plain() {
        assert_eq!(Modifier::resolve("a"), Modifier::default());
        assert_eq!(Modifier::resolve("1"), Modifier::default());
    }

    #[test]
    fn caller_token_is_left_untouched() {
        let token = String::from("X");
        let _ = Modifier::resolve(&token);
        assert_eq!(token, "X");
    }
}
