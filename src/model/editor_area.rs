//! Editor area - the arena of open documents and their tab order
//!
//! Documents are owned by a table keyed by a stable [`DocumentId`] and are
//! always looked up by id, never carried as opaque attachments on UI nodes.
//! Closing dirty documents goes through the [`ClosePrompt`] gate: the only
//! user-facing confirmation in the core, and the only place where "cancel"
//! can abort an operation - including a whole-application exit sweep.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::EditorConfig;
use super::document::Document;

/// Unique identifier for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// Outcome of the unsaved-changes confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// Save the document, then proceed with the close
    Save,
    /// Discard changes and proceed
    Discard,
    /// Abort the close entirely
    Cancel,
}

/// Shell-side collaborator for the close gate
///
/// `confirm_close` shows the three-way unsaved-changes dialog;
/// `save_path_for` shows a save dialog for documents without a backing
/// file (returning `None` when the user dismisses it).
pub trait ClosePrompt {
    fn confirm_close(&mut self, title: &str) -> CloseDecision;
    fn save_path_for(&mut self, title: &str) -> Option<PathBuf>;
}

/// The set of open documents, in tab order
#[derive(Debug, Default)]
pub struct EditorArea {
    documents: HashMap<DocumentId, Document>,
    tab_order: Vec<DocumentId>,
    active: Option<DocumentId>,
    next_document_id: u64,
    untitled_counter: u32,
    /// Set on any edit; cleared after a successful session save
    session_dirty: bool,
}

impl EditorArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, assigning it an id and making it the active tab
    pub fn add_document(&mut self, mut doc: Document) -> DocumentId {
        self.next_document_id += 1;
        let id = DocumentId(self.next_document_id);
        doc.id = Some(id);
        self.documents.insert(id, doc);
        self.tab_order.push(id);
        self.active = Some(id);
        id
    }

    /// Create a new untitled document seeded from the configured defaults
    pub fn new_untitled(&mut self, config: &EditorConfig) -> DocumentId {
        self.untitled_counter += 1;
        let mut doc = Document::new();
        doc.untitled_name = Some(if self.untitled_counter == 1 {
            "Untitled".to_string()
        } else {
            format!("Untitled-{}", self.untitled_counter)
        });
        doc.encoding = config.default_encoding;
        doc.line_ending = config.default_line_ending;
        self.add_document(doc)
    }

    /// Open a file as a new tab
    pub fn open_file(&mut self, path: PathBuf, config: &EditorConfig) -> anyhow::Result<DocumentId> {
        let mut doc = Document::from_file(path)?;
        doc.encoding = config.default_encoding;
        doc.line_ending = config.default_line_ending;
        Ok(self.add_document(doc))
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    pub fn document_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.get_mut(&id)
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active
    }

    pub fn set_active(&mut self, id: DocumentId) {
        if self.documents.contains_key(&id) {
            self.active = Some(id);
        }
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active.and_then(|id| self.documents.get(&id))
    }

    /// Number of open tabs
    pub fn tab_count(&self) -> usize {
        self.tab_order.len()
    }

    /// Document ids in tab order
    pub fn tab_order(&self) -> &[DocumentId] {
        &self.tab_order
    }

    /// Documents in tab order
    pub fn documents_in_order(&self) -> impl Iterator<Item = &Document> {
        self.tab_order
            .iter()
            .filter_map(move |id| self.documents.get(id))
    }

    /// Apply an edit coming from the text widget
    ///
    /// Replaces the document's buffer and flags the session for autosave.
    pub fn apply_edit(&mut self, id: DocumentId, new_text: &str) {
        if let Some(doc) = self.documents.get_mut(&id) {
            doc.set_text(new_text);
            self.session_dirty = true;
        }
    }

    /// Toggle a document between highlighted code and plain text
    ///
    /// The shell mirrors this on the document's scheduler (attach/detach)
    /// and restyles immediately.
    pub fn set_mode(&mut self, id: DocumentId, mode: super::document::EditMode) {
        if let Some(doc) = self.documents.get_mut(&id) {
            doc.mode = mode;
            self.session_dirty = true;
        }
    }

    /// Switch a document's active language
    ///
    /// The shell restyles immediately; the debounce is not involved.
    pub fn set_language(&mut self, id: DocumentId, language: crate::syntax::LanguageId) {
        if let Some(doc) = self.documents.get_mut(&id) {
            doc.language = language;
            self.session_dirty = true;
        }
    }

    pub fn session_dirty(&self) -> bool {
        self.session_dirty
    }

    pub fn mark_session_dirty(&mut self) {
        self.session_dirty = true;
    }

    pub fn clear_session_dirty(&mut self) {
        self.session_dirty = false;
    }

    /// Close a tab, gated by the unsaved-changes confirmation
    ///
    /// Returns true when the tab was closed. A clean document closes
    /// silently; a dirty one asks the prompt. `Save` writes the file first
    /// (asking the prompt for a path if the document has none) and keeps
    /// the tab open if the save fails or is dismissed.
    pub fn request_close(&mut self, id: DocumentId, prompt: &mut dyn ClosePrompt) -> bool {
        if !self.may_discard(id, prompt) {
            return false;
        }
        self.remove_document(id);
        self.session_dirty = true;
        true
    }

    /// Confirm every dirty tab ahead of application exit
    ///
    /// Sweeps tabs in order; the first `Cancel` (or failed save) aborts the
    /// whole exit. Tabs stay open either way - on success the caller
    /// snapshots the session and terminates.
    pub fn request_exit(&mut self, prompt: &mut dyn ClosePrompt) -> bool {
        for id in self.tab_order.clone() {
            if !self.may_discard(id, prompt) {
                tracing::debug!("Exit aborted at document {:?}", id);
                return false;
            }
        }
        true
    }

    /// Run the close gate for one document without removing it
    fn may_discard(&mut self, id: DocumentId, prompt: &mut dyn ClosePrompt) -> bool {
        let Some(doc) = self.documents.get_mut(&id) else {
            return true;
        };
        if !doc.is_modified {
            return true;
        }
        match prompt.confirm_close(&doc.display_name()) {
            CloseDecision::Cancel => false,
            CloseDecision::Discard => true,
            CloseDecision::Save => {
                if doc.file_path.is_none() {
                    match prompt.save_path_for(&doc.display_name()) {
                        Some(path) => doc.file_path = Some(path),
                        // Dismissing the save dialog aborts the close
                        None => return false,
                    }
                }
                match doc.save() {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::warn!("Save before close failed: {:#}", e);
                        false
                    }
                }
            }
        }
    }

    fn remove_document(&mut self, id: DocumentId) {
        self.documents.remove(&id);
        if let Some(pos) = self.tab_order.iter().position(|&d| d == id) {
            self.tab_order.remove(pos);
            if self.active == Some(id) {
                // Activate the neighbor that slid into this slot, or the
                // new last tab
                self.active = self
                    .tab_order
                    .get(pos)
                    .or_else(|| self.tab_order.last())
                    .copied();
            }
        }
    }
}
