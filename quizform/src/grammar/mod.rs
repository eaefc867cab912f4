//! The question specification language.
//!
//!     header     parse_header / parse_block      one field header per text block
//!     rules      classify, RULES                 ordered element grammars
//!     items      inline item tuples and select tokens
//!     multiline  body lines of multiline selects and bare lists
//!
//! All of it is pure: text in, typed values out.

pub mod header;
pub mod items;
pub mod multiline;
pub mod rules;

pub use header::{parse_block, parse_header};
pub use rules::{classify, Rule, RuleInput, RULES};
