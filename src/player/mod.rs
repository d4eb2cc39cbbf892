//! Step sequencer / player
//!
//! Holds the sequence for the active operation and a cursor into it. Moving the
//! cursor never recomputes anything: each step is a self-contained snapshot, so
//! stepping backward simply shows the earlier snapshot again.
//!
//! # States
//!
//! ```text
//! Idle ──start──▶ Ready ──toggle_auto──▶ AutoPlaying
//!                   ▲                         │
//!                   └──pause / exhausted──────┘
//! ```
//!
//! Auto-play arms exactly one timer at a time. Installing a new sequence or
//! pausing cancels it, and a tick whose id is not the armed one is ignored, so a
//! late tick can never move the cursor of a sequence it was not scheduled for.

pub mod scheduler;

use crate::snapshot::{Step, StepSequence};
use scheduler::{Scheduler, TimerId};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Coarse player state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Ready,
    AutoPlaying,
}

/// Outcome of a player command; none of these are errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Cursor moved forward
    Advanced,
    /// Cursor moved backward
    Retreated,
    /// Already on the last step
    SequenceExhausted,
    /// Already on the first step
    AtStart,
    /// No sequence installed
    NothingToDo,
    AutoStarted,
    AutoPaused,
    /// Manual rewinds are refused while auto-playing
    Busy,
    /// Tick from a cancelled or replaced timer
    StaleTick,
}

pub struct Player<S: Scheduler> {
    sequence: Option<StepSequence>,
    cursor: usize,
    /// Currently armed auto-play tick
    armed: Option<TimerId>,
    interval: Duration,
    scheduler: S,
}

impl<S: Scheduler> Player<S> {
    pub fn new(scheduler: S, interval: Duration) -> Self {
        Player {
            sequence: None,
            cursor: 0,
            armed: None,
            interval,
            scheduler,
        }
    }

    pub fn state(&self) -> PlayerState {
        match (&self.sequence, self.armed) {
            (None, _) => PlayerState::Idle,
            (Some(_), None) => PlayerState::Ready,
            (Some(_), Some(_)) => PlayerState::AutoPlaying,
        }
    }

    pub fn is_auto_playing(&self) -> bool {
        self.armed.is_some()
    }

    /// Cancel auto-play and rewind before a new sequence replaces this one
    pub fn new_operation(&mut self) {
        self.disarm();
        self.cursor = 0;
    }

    /// Install `sequence` and show its first step
    pub fn start(&mut self, sequence: StepSequence) {
        self.new_operation();
        if sequence.is_empty() {
            debug!(operation = sequence.operation(), "Ignoring empty sequence");
            self.sequence = None;
            return;
        }
        debug!(
            operation = sequence.operation(),
            steps = sequence.len(),
            "Installed step sequence"
        );
        self.sequence = Some(sequence);
    }

    /// Drop the sequence entirely
    pub fn clear(&mut self) {
        self.new_operation();
        self.sequence = None;
    }

    /// Advance one step; allowed while auto-playing
    pub fn next(&mut self) -> PlayerStatus {
        let status = self.advance();
        if self.is_auto_playing() && self.at_end() {
            self.disarm();
        }
        status
    }

    /// Go back one step
    pub fn previous(&mut self) -> PlayerStatus {
        if self.sequence.is_none() {
            return PlayerStatus::NothingToDo;
        }
        if self.is_auto_playing() {
            return PlayerStatus::Busy;
        }
        if self.cursor == 0 {
            return PlayerStatus::AtStart;
        }
        self.cursor -= 1;
        trace!(cursor = self.cursor, "Stepped backward");
        PlayerStatus::Retreated
    }

    pub fn jump_to_start(&mut self) -> PlayerStatus {
        if self.sequence.is_none() {
            return PlayerStatus::NothingToDo;
        }
        if self.is_auto_playing() {
            return PlayerStatus::Busy;
        }
        if self.cursor == 0 {
            return PlayerStatus::AtStart;
        }
        self.cursor = 0;
        PlayerStatus::Retreated
    }

    pub fn jump_to_end(&mut self) -> PlayerStatus {
        let Some(last) = self.last_index() else {
            return PlayerStatus::NothingToDo;
        };
        if self.is_auto_playing() {
            return PlayerStatus::Busy;
        }
        if self.cursor == last {
            return PlayerStatus::SequenceExhausted;
        }
        self.cursor = last;
        PlayerStatus::Advanced
    }

    /// Start or pause auto-play
    pub fn toggle_auto(&mut self) -> PlayerStatus {
        if self.sequence.is_none() {
            return PlayerStatus::NothingToDo;
        }
        if self.is_auto_playing() {
            return self.pause_auto();
        }
        if self.at_end() {
            return PlayerStatus::SequenceExhausted;
        }
        let id = self.scheduler.schedule(self.interval);
        self.armed = Some(id);
        debug!(timer = id, cursor = self.cursor, "Auto-play started");
        PlayerStatus::AutoStarted
    }

    /// Stop ticking; the cursor stays where it is
    pub fn pause_auto(&mut self) -> PlayerStatus {
        if self.armed.is_none() {
            return PlayerStatus::NothingToDo;
        }
        self.disarm();
        debug!(cursor = self.cursor, "Auto-play paused");
        PlayerStatus::AutoPaused
    }

    /// Deliver a fired tick
    pub fn on_timer(&mut self, id: TimerId) -> PlayerStatus {
        if self.armed != Some(id) {
            warn!(timer = id, "Ignoring stale tick");
            return PlayerStatus::StaleTick;
        }
        self.armed = None;

        let status = self.advance();
        if status == PlayerStatus::Advanced && !self.at_end() {
            self.armed = Some(self.scheduler.schedule(self.interval));
        } else {
            debug!(cursor = self.cursor, "Auto-play finished");
        }
        status
    }

    pub fn current(&self) -> Option<&Step> {
        self.sequence.as_ref()?.get(self.cursor)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.sequence.as_ref().map(|_| self.cursor)
    }

    pub fn len(&self) -> usize {
        self.sequence.as_ref().map_or(0, StepSequence::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sequence(&self) -> Option<&StepSequence> {
        self.sequence.as_ref()
    }

    pub fn at_end(&self) -> bool {
        self.last_index() == Some(self.cursor)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn advance(&mut self) -> PlayerStatus {
        let Some(last) = self.last_index() else {
            return PlayerStatus::NothingToDo;
        };
        if self.cursor >= last {
            return PlayerStatus::SequenceExhausted;
        }
        self.cursor += 1;
        trace!(cursor = self.cursor, "Stepped forward");
        PlayerStatus::Advanced
    }

    fn last_index(&self) -> Option<usize> {
        self.sequence
            .as_ref()
            .and_then(|sequence| sequence.len().checked_sub(1))
    }

    fn disarm(&mut self) {
        if let Some(id) = self.armed.take() {
            self.scheduler.cancel(id);
        }
    }
}
