//! Best-effort session autosave
//!
//! A fixed-period recurring task the event loop polls. Each time the
//! period elapses it saves the session - but only when something actually
//! changed since the last save. Canceled at shutdown, after the shell's
//! final synchronous save.

use std::time::{Duration, Instant};

use crate::model::EditorArea;
use crate::session;

/// Time between autosave attempts
pub const AUTOSAVE_PERIOD: Duration = Duration::from_secs(30);

/// Recurring autosave schedule
#[derive(Debug)]
pub struct Autosave {
    period: Duration,
    next_run: Option<Instant>,
}

impl Autosave {
    /// Start the schedule with the standard period
    pub fn new(now: Instant) -> Self {
        Self::with_period(now, AUTOSAVE_PERIOD)
    }

    pub fn with_period(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next_run: Some(now + period),
        }
    }

    pub fn is_active(&self) -> bool {
        self.next_run.is_some()
    }

    /// Stop the schedule (process shutdown)
    pub fn cancel(&mut self) {
        self.next_run = None;
    }

    /// Consume an elapsed period, rescheduling the next one
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_run {
            Some(deadline) if now >= deadline => {
                self.next_run = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Poll the schedule and save the session when due and dirty
    ///
    /// Returns true when a save actually ran and succeeded.
    pub fn run(&mut self, now: Instant, area: &mut EditorArea) -> bool {
        if !self.fire(now) || !area.session_dirty() {
            return false;
        }
        if session::save_session(area) {
            area.clear_session_dirty();
            true
        } else {
            false
        }
    }
}
