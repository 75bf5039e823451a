//! Document model - represents the text buffer and file state

use anyhow::Context;
use ropey::Rope;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::editor_area::DocumentId;
use crate::syntax::LanguageId;

/// UTF-8 byte order mark
pub const BOM_UTF8: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// UTF-16 little-endian byte order mark
pub const BOM_UTF16_LE: [u8; 2] = [0xFF, 0xFE];
/// UTF-16 big-endian byte order mark
pub const BOM_UTF16_BE: [u8; 2] = [0xFE, 0xFF];

/// File encoding attached to a document
///
/// Carried as document metadata and surfaced in the status bar; newly
/// created documents inherit the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileEncoding {
    /// Platform default ("ANSI") code page
    Ansi,
    #[default]
    Utf8,
    Utf8Bom,
    Utf16LeBom,
    Utf16BeBom,
}

impl FileEncoding {
    /// Status-bar label
    pub fn label(&self) -> &'static str {
        match self {
            FileEncoding::Ansi => "ANSI",
            FileEncoding::Utf8 => "UTF-8",
            FileEncoding::Utf8Bom => "UTF-8 BOM",
            FileEncoding::Utf16LeBom => "UTF-16 LE BOM",
            FileEncoding::Utf16BeBom => "UTF-16 BE BOM",
        }
    }

    /// Byte order mark this encoding writes, if any
    pub fn bom(&self) -> Option<&'static [u8]> {
        match self {
            FileEncoding::Ansi | FileEncoding::Utf8 => None,
            FileEncoding::Utf8Bom => Some(&BOM_UTF8),
            FileEncoding::Utf16LeBom => Some(&BOM_UTF16_LE),
            FileEncoding::Utf16BeBom => Some(&BOM_UTF16_BE),
        }
    }
}

/// Line ending attached to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
    Cr,
}

impl LineEnding {
    /// Status-bar label
    pub fn label(&self) -> &'static str {
        match self {
            LineEnding::Crlf => "Windows (CRLF)",
            LineEnding::Lf => "Unix (LF)",
            LineEnding::Cr => "Mac (CR)",
        }
    }

    /// The byte sequence this line ending writes
    pub fn sequence(&self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
        }
    }
}

/// Whether a document renders with highlighting or as plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Code,
    Text,
}

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique identifier (set when added to EditorArea)
    pub id: Option<DocumentId>,

    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Display name for untitled documents (e.g., "Untitled", "Untitled-2")
    pub untitled_name: Option<String>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Plain text or highlighted code
    pub mode: EditMode,
    /// Active language for syntax highlighting
    pub language: LanguageId,
    /// File encoding metadata
    pub encoding: FileEncoding,
    /// Line ending metadata
    pub line_ending: LineEnding,
    /// Document revision counter (incremented on each edit)
    /// Used by the shell to discard stale restyle results
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            id: None,
            buffer: Rope::from(""),
            file_path: None,
            untitled_name: None,
            is_modified: false,
            mode: EditMode::Code,
            language: LanguageId::default(),
            encoding: FileEncoding::default(),
            line_ending: LineEnding::default(),
            revision: 0,
        }
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            ..Self::new()
        }
    }

    /// Load a document from a file path
    ///
    /// Detects the language from the extension; text-like extensions open
    /// in plain-text mode.
    pub fn from_file(path: PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut doc = Self::with_text(&content);
        match LanguageId::detect_from_path(&path) {
            Some(language) => {
                doc.language = language;
                doc.mode = EditMode::Code;
            }
            None => doc.mode = EditMode::Text,
        }
        doc.file_path = Some(path);
        Ok(doc)
    }

    /// Name shown in the tab: file name, or the untitled placeholder
    pub fn display_name(&self) -> String {
        if let Some(path) = &self.file_path {
            if let Some(name) = path.file_name() {
                return name.to_string_lossy().to_string();
            }
        }
        self.untitled_name
            .clone()
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Full buffer contents as an owned string
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Buffer length in bytes (the authoritative length for style spans)
    pub fn len_bytes(&self) -> usize {
        self.buffer.len_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len_bytes() == 0
    }

    /// Replace the whole buffer, marking the document dirty
    pub fn set_text(&mut self, text: &str) {
        self.buffer = Rope::from(text);
        self.touch();
    }

    /// Insert text at a char index, marking the document dirty
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        self.buffer.insert(char_idx, text);
        self.touch();
    }

    /// Remove a char range, marking the document dirty
    pub fn remove(&mut self, char_range: std::ops::Range<usize>) {
        self.buffer.remove(char_range);
        self.touch();
    }

    fn touch(&mut self) {
        self.is_modified = true;
        self.revision += 1;
    }

    /// Write the buffer to the document's path as UTF-8
    ///
    /// Clears the modified flag and re-detects the language from the saved
    /// path (staying in plain-text mode for text-like extensions only when
    /// already in text mode).
    pub fn save(&mut self) -> anyhow::Result<()> {
        let path = self
            .file_path
            .clone()
            .context("Document has no file path")?;
        std::fs::write(&path, self.text())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        self.is_modified = false;
        if self.mode == EditMode::Code {
            if let Some(language) = LanguageId::detect_from_path(&path) {
                self.language = language;
            }
        }
        tracing::info!("Saved {}", path.display());
        Ok(())
    }

    /// True when the document belongs in a session snapshot
    ///
    /// A document with empty text and no backing file has nothing worth
    /// restoring.
    pub fn is_worth_persisting(&self) -> bool {
        !self.is_empty() || self.file_path.is_some()
    }

    // === Status-bar statistics ===

    pub fn char_count(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    pub fn word_count(&self) -> usize {
        self.text().split_whitespace().count()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
