//! Syntax highlighting
//!
//! A single-pass regex classifier, not a lexer: each language compiles one
//! alternation pattern whose named alternatives map to style categories, and
//! the highlighter walks non-overlapping matches to produce a sparse span
//! list covering the whole text.

pub mod highlighter;
pub mod languages;
pub mod patterns;
pub mod scheduler;
pub mod spans;

pub use highlighter::highlight;
pub use languages::{LanguageId, LanguageProfile};
pub use patterns::SyntaxPattern;
pub use scheduler::{style_for, HighlightScheduler, QUIET_PERIOD};
pub use spans::{HighlightTag, StyleSpan, StyleSpans};
