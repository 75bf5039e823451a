//! Editor model - documents and the tab arena that owns them

pub mod document;
pub mod editor_area;

pub use document::{Document, EditMode, FileEncoding, LineEnding};
pub use editor_area::{CloseDecision, ClosePrompt, DocumentId, EditorArea};
