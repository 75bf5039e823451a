//! Drafts (session) persistence
//!
//! All open tabs are serialized to a single versioned, line-oriented blob:
//! a `DRAFTS_V1` marker line, then five lines per record (title, source
//! path, code-mode flag, language id, full content) followed by a `---`
//! separator. Free-form fields are base64-encoded so embedded newlines and
//! the separator token can never break the framing.
//!
//! Persistence is best-effort: saving returns a plain `bool` and never
//! surfaces I/O errors, and a failed write cannot corrupt a previous
//! snapshot (the file is written to a sibling temp file and renamed into
//! place). Loading tolerates truncated trailing records and corrupt fields;
//! anything worse degrades to "no session".

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::{Path, PathBuf};

use crate::config::EditorConfig;
use crate::model::{Document, EditMode, EditorArea};
use crate::syntax::LanguageId;

/// First line of every drafts file
pub const VERSION_MARKER: &str = "DRAFTS_V1";
/// Line written between records
pub const RECORD_SEPARATOR: &str = "---";

/// Title given to restored records whose stored title is blank
const PLACEHOLDER_TITLE: &str = "Untitled";

/// One persisted tab
///
/// A disposable projection of a live document; owns no reference back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRecord {
    pub title: String,
    /// Source path, empty string for untitled drafts
    pub file_path: String,
    pub code_mode: bool,
    pub language: String,
    pub content: String,
}

/// Project the open documents into draft records
///
/// Documents with empty text and no backing file are excluded - there is
/// nothing meaningful to restore for them.
pub fn snapshot(area: &EditorArea) -> Vec<DraftRecord> {
    area.documents_in_order()
        .filter(|doc| doc.is_worth_persisting())
        .map(|doc| DraftRecord {
            title: doc.display_name(),
            file_path: doc
                .file_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default(),
            code_mode: doc.mode == EditMode::Code,
            language: doc.language.as_str().to_string(),
            content: doc.text(),
        })
        .collect()
}

/// Serialize records to the versioned blob
pub fn encode(records: &[DraftRecord]) -> String {
    let mut out = String::new();
    out.push_str(VERSION_MARKER);
    out.push('\n');
    for record in records {
        out.push_str(&encode_field(&record.title));
        out.push('\n');
        out.push_str(&encode_field(&record.file_path));
        out.push('\n');
        out.push_str(if record.code_mode { "1" } else { "0" });
        out.push('\n');
        out.push_str(&encode_field(&record.language));
        out.push('\n');
        out.push_str(&encode_field(&record.content));
        out.push('\n');
        out.push_str(RECORD_SEPARATOR);
        out.push('\n');
    }
    out
}

/// Parse a blob back into records
///
/// Returns `None` for an empty blob or a wrong version marker. Records are
/// read five lines at a time; a truncated trailing group is simply
/// dropped.
pub fn decode(blob: &str) -> Option<Vec<DraftRecord>> {
    let lines: Vec<&str> = blob.lines().collect();
    if lines.is_empty() || lines[0] != VERSION_MARKER {
        return None;
    }

    let mut records = Vec::new();
    let mut i = 1;
    while i + 4 < lines.len() {
        let title = decode_field(lines[i]);
        let file_path = decode_field(lines[i + 1]);
        let code_mode = lines[i + 2] != "0";
        let language = decode_field(lines[i + 3]);
        let content = decode_field(lines[i + 4]);
        i += 5;
        if lines.get(i) == Some(&RECORD_SEPARATOR) {
            i += 1;
        }
        records.push(DraftRecord {
            title,
            file_path,
            code_mode,
            language,
            content,
        });
    }
    Some(records)
}

/// Reconstruct documents from restored records
///
/// Blank titles get a placeholder, blank languages fall back to the
/// default, and a draft with content but no backing file is marked
/// modified - it exists only in the snapshot.
pub fn restore(records: Vec<DraftRecord>, config: &EditorConfig) -> EditorArea {
    let mut area = EditorArea::new();
    for record in records {
        let mut doc = Document::with_text(&record.content);
        doc.encoding = config.default_encoding;
        doc.line_ending = config.default_line_ending;
        doc.mode = if record.code_mode {
            EditMode::Code
        } else {
            EditMode::Text
        };
        doc.language = LanguageId::from_id(&record.language).unwrap_or_default();
        if record.file_path.trim().is_empty() {
            doc.untitled_name = Some(if record.title.trim().is_empty() {
                PLACEHOLDER_TITLE.to_string()
            } else {
                record.title
            });
            doc.is_modified = !record.content.is_empty();
        } else {
            doc.file_path = Some(PathBuf::from(record.file_path));
        }
        area.add_document(doc);
    }
    if let Some(first) = area.tab_order().first().copied() {
        area.set_active(first);
    }
    area.clear_session_dirty();
    area
}

/// Write records to a drafts file
///
/// An empty record set deletes the file instead. Returns false on any I/O
/// failure; the caller treats this as best-effort.
pub fn write_drafts(path: &Path, records: &[DraftRecord]) -> bool {
    if records.is_empty() {
        let _ = std::fs::remove_file(path);
        return true;
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("Failed to create drafts directory: {}", e);
            return false;
        }
    }

    // Write-then-rename so a failed write never clobbers the old snapshot
    let tmp = match path.file_name() {
        Some(name) => path.with_file_name(format!("{}.tmp", name.to_string_lossy())),
        None => return false,
    };
    if let Err(e) = std::fs::write(&tmp, encode(records)) {
        tracing::warn!("Failed to write drafts: {}", e);
        let _ = std::fs::remove_file(&tmp);
        return false;
    }
    if let Err(e) = std::fs::rename(&tmp, path) {
        tracing::warn!("Failed to replace drafts file: {}", e);
        let _ = std::fs::remove_file(&tmp);
        return false;
    }
    tracing::debug!("Saved {} draft(s) to {}", records.len(), path.display());
    true
}

/// Read records from a drafts file; `None` when absent or unusable
pub fn read_drafts(path: &Path) -> Option<Vec<DraftRecord>> {
    let blob = std::fs::read_to_string(path).ok()?;
    decode(&blob)
}

/// Snapshot the editor area to the standard drafts location
pub fn save_session(area: &EditorArea) -> bool {
    let Some(path) = crate::config_paths::drafts_file() else {
        tracing::debug!("No data directory available, skipping session save");
        return false;
    };
    write_drafts(&path, &snapshot(area))
}

/// Load the session from the standard location, falling back to the
/// legacy directory used by older releases
///
/// A file that decodes to zero records counts as no session.
pub fn load_session() -> Option<Vec<DraftRecord>> {
    let primary = crate::config_paths::drafts_file()?;
    if primary.exists() {
        return read_drafts(&primary).filter(|records| !records.is_empty());
    }
    let legacy = crate::config_paths::legacy_drafts_file()?;
    if legacy.exists() {
        tracing::info!("Restoring session from legacy location {}", legacy.display());
        return read_drafts(&legacy).filter(|records| !records.is_empty());
    }
    None
}

fn encode_field(s: &str) -> String {
    BASE64.encode(s.as_bytes())
}

/// A corrupt field decodes to an empty string rather than failing the load
fn decode_field(s: &str) -> String {
    if s.trim().is_empty() {
        return String::new();
    }
    BASE64
        .decode(s.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}
