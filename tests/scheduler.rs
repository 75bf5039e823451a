//! Highlight scheduler tests
//!
//! Drives the per-document debounce state machine with simulated clocks:
//! burst coalescing, final-text semantics, and mode transitions.

use std::time::{Duration, Instant};

use codepad::model::{Document, EditMode};
use codepad::syntax::{highlight, style_for, HighlightScheduler, LanguageId, QUIET_PERIOD};

// ========================================================================
// Debounce coalescing
// ========================================================================

#[test]
fn test_burst_of_edits_produces_exactly_one_pass() {
    let mut doc = Document::new();
    let mut sched = HighlightScheduler::new();
    let start = Instant::now();
    let mut passes = 0;

    // The user types "return" one keystroke at a time, 50ms apart
    for (i, prefix) in ["r", "re", "ret", "retu", "retur", "return"]
        .iter()
        .enumerate()
    {
        let now = start + Duration::from_millis(50 * i as u64);
        doc.set_text(prefix);
        sched.note_edit(now);
        // Event loop polls on every tick; nothing fires mid-burst
        if sched.fire(now) {
            passes += 1;
        }
    }

    // Quiet period elapses after the last keystroke
    let after = start + Duration::from_millis(50 * 5) + QUIET_PERIOD;
    if sched.fire(after) {
        passes += 1;
        let spans = style_for(&doc.text(), sched.mode(), doc.language);
        // The pass sees the final text, not an intermediate prefix
        assert_eq!(spans.total_len(), "return".len());
    }

    assert_eq!(passes, 1);
    // Fully quiesced: later polls stay silent
    assert!(!sched.fire(after + QUIET_PERIOD));
}

#[test]
fn test_separate_bursts_each_get_a_pass() {
    let mut sched = HighlightScheduler::new();
    let start = Instant::now();

    sched.note_edit(start);
    assert!(sched.fire(start + QUIET_PERIOD));

    let later = start + QUIET_PERIOD * 10;
    sched.note_edit(later);
    assert!(sched.fire(later + QUIET_PERIOD));
}

#[test]
fn test_fire_uses_deadline_of_latest_edit() {
    let mut sched = HighlightScheduler::new();
    let start = Instant::now();
    sched.note_edit(start);
    sched.note_edit(start + Duration::from_millis(150));
    // The first edit's deadline has passed, but the timer restarted
    assert!(!sched.fire(start + QUIET_PERIOD));
    assert!(sched.fire(start + Duration::from_millis(150) + QUIET_PERIOD));
}

// ========================================================================
// Mode transitions
// ========================================================================

#[test]
fn test_text_mode_clears_styles_and_detaches() {
    let text = "while (true) { run(); }";
    let mut sched = HighlightScheduler::new();
    let now = Instant::now();
    sched.note_edit(now);

    sched.enter_text_mode();
    assert_eq!(sched.mode(), EditMode::Text);
    // Pending restyle is dropped with the subscription
    assert!(!sched.fire(now + QUIET_PERIOD));

    let cleared = style_for(text, sched.mode(), LanguageId::Java);
    assert_eq!(cleared.len(), 1);
    assert_eq!(cleared.as_slice()[0].len, text.len());
    assert_eq!(cleared.as_slice()[0].tag, None);

    // Edits while detached never schedule anything
    sched.note_edit(now + QUIET_PERIOD * 2);
    assert!(!sched.pending());
}

#[test]
fn test_reentering_code_mode_rehighlights_deterministically() {
    let text = "while (true) { run(); }";
    let mut sched = HighlightScheduler::new();
    let reference = highlight(text, &LanguageId::Java.profile().pattern);

    sched.enter_text_mode();
    sched.enter_code_mode();
    assert_eq!(sched.mode(), EditMode::Code);

    // Entering code mode runs one immediate pass over the current text
    let repass = style_for(text, sched.mode(), LanguageId::Java);
    assert_eq!(repass, reference);
    assert_eq!(repass.total_len(), text.len());
}

#[test]
fn test_language_switch_pass_is_synchronous() {
    // Switching profile does not go through the debounce: the caller
    // restyles immediately with the new language.
    let text = "def f(): pass";
    let as_java = style_for(text, EditMode::Code, LanguageId::Java);
    let as_python = style_for(text, EditMode::Code, LanguageId::Python);
    assert_eq!(as_java.total_len(), as_python.total_len());
    assert_ne!(as_java, as_python);
}

#[test]
fn test_cancel_on_close_is_leak_free() {
    let mut sched = HighlightScheduler::new();
    let now = Instant::now();
    sched.note_edit(now);
    assert!(sched.pending());
    sched.cancel();
    assert!(!sched.pending());
    assert!(sched.next_deadline().is_none());
}
