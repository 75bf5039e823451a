//! Debounced restyle scheduling
//!
//! Each open document owns one `HighlightScheduler`. Edits restart a
//! single-shot quiet-period deadline; when it elapses with no further edits
//! the shell runs exactly one highlight pass over the document's current
//! text. Everything happens on the UI/event thread: the scheduler is plain
//! state the event loop polls, so no two passes for one document can ever
//! be in flight at once.

use std::time::{Duration, Instant};

use crate::model::EditMode;

use super::highlighter::highlight;
use super::languages::LanguageId;
use super::spans::StyleSpans;

/// Delay after the last edit before a restyle runs
pub const QUIET_PERIOD: Duration = Duration::from_millis(200);

/// Per-document debounce state
#[derive(Debug)]
pub struct HighlightScheduler {
    mode: EditMode,
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl Default for HighlightScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightScheduler {
    /// New scheduler in code mode with the standard quiet period
    pub fn new() -> Self {
        Self {
            mode: EditMode::Code,
            quiet_period: QUIET_PERIOD,
            deadline: None,
        }
    }

    /// Override the quiet period (tests use short delays)
    pub fn with_quiet_period(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            ..Self::new()
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Attach the edit subscription
    ///
    /// The caller must follow up with one immediate highlight pass (use
    /// [`style_for`]).
    pub fn enter_code_mode(&mut self) {
        self.mode = EditMode::Code;
        self.deadline = None;
    }

    /// Detach the edit subscription and drop any pending restyle
    ///
    /// The caller must clear the rendered styles to a single untagged run
    /// covering the full text.
    pub fn enter_text_mode(&mut self) {
        self.mode = EditMode::Text;
        self.deadline = None;
    }

    /// An edit happened; restart the quiet-period timer
    ///
    /// No-op in text mode, where the subscription is detached.
    pub fn note_edit(&mut self, now: Instant) {
        if self.mode == EditMode::Code {
            self.deadline = Some(now + self.quiet_period);
        }
    }

    /// True while a restyle is scheduled but not yet due
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending restyle becomes due, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if the quiet period has elapsed
    ///
    /// Returns true at most once per elapsed quiet period; the caller then
    /// runs one highlight pass with the document's current text.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending restyle (document closing, language switch)
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Compute the spans a document should render in the given mode
///
/// Text mode is a single untagged run over the full text; code mode is one
/// synchronous highlight pass with the language's pattern.
pub fn style_for(text: &str, mode: EditMode, language: LanguageId) -> StyleSpans {
    match mode {
        EditMode::Text => StyleSpans::unstyled(text.len()),
        EditMode::Code => highlight(text, &language.profile().pattern),
    }
}
