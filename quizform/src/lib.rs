//! Question specifications to interactive form markup
//!
//!     This crate compiles compact, line-oriented question specifications written inside
//!     a document's paragraphs into HTML form fields:
//!
//!         name -> Your name *= ___[40]
//!         essay = [   5]
//!         q -> Pick one = (x) A (=) B () C
//!         city = {BOS, [SFO], (NYC)}
//!
//!     Every paragraph whose first line is a field header is replaced by the markup of
//!     one field; every other paragraph is left alone.
//!
//! Architecture
//!
//!     Leaves first:
//!     .
//!     ├── modifier.rs          # (x) / [=] / X= tokens → selected / correct flags
//!     ├── field.rs             # FieldSpec, Element, Item: the data model
//!     ├── grammar
//!     │   ├── header.rs        # <code> [-> <name>] [*]= <rhs>
//!     │   ├── rules.rs         # ordered element grammars (the dispatcher)
//!     │   ├── items.rs         # inline choice tuples and select tokens
//!     │   └── multiline.rs     # body lines of multiline selects and bare lists
//!     ├── formats
//!     │   ├── html             # markup renderer, forms and standalone pages
//!     │   └── json             # serde dump of the compiled document
//!     ├── document.rs          # slides, blocks, per-field results, failure policy
//!     ├── diagnostics.rs       # caller-supplied sink for warnings and errors
//!     ├── options.rs           # explicit defaults (textarea rows, placeholder, form)
//!     ├── format.rs            # Format trait
//!     └── registry.rs          # FormatRegistry
//!
//!     This is a pure lib: it never reads files, prints, or configures logging. Hosts
//!     (quizform-cli) do that and pass options and a diagnostics sink in.
//!
//! Testing
//!
//!     Unit tests live next to each module. Integration tests are under tests/ with one
//!     directory per area, included from tests/lib.rs.

pub mod diagnostics;
pub mod document;
pub mod error;
pub mod field;
pub mod format;
pub mod formats;
pub mod grammar;
pub mod modifier;
pub mod options;
pub mod registry;

pub use diagnostics::{Diagnostic, Diagnostics, Severity, TracingDiagnostics};
pub use document::{render_block, transform, Block, FormDocument, Fragment, Slide};
pub use error::FormError;
pub use field::{ChoiceControl, Element, ElementKind, FieldSpec, Item, ListEntry};
pub use format::Format;
pub use modifier::Modifier;
pub use options::{FailurePolicy, FormOptions, RenderOptions};
pub use registry::FormatRegistry;

