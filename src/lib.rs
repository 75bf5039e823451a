//! CodePad core - the engine behind a multi-tab code/text editor
//!
//! This crate provides the reusable, GUI-free core of the editor: the
//! document/tab model, regex-driven syntax highlighting with debounced
//! restyling, the drafts (session) persistence format, and the release
//! update checker. The windowing shell consumes these through the types
//! re-exported below.

pub mod autosave;
pub mod config;
pub mod config_paths;
pub mod model;
pub mod search;
pub mod session;
pub mod syntax;
pub mod tracing;
pub mod update_check;

// Re-export commonly used types
pub use config::EditorConfig;
pub use model::{Document, DocumentId, EditMode, EditorArea};
pub use session::DraftRecord;
pub use syntax::{highlight, HighlightTag, LanguageId, StyleSpan, StyleSpans};
pub use update_check::ReleaseInfo;
