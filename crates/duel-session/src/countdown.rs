//! Forfeit countdown.
//!
//! A pure state machine over whole seconds. The host drives it by sending
//! one tick per configured interval while it is active.

use serde::{Deserialize, Serialize};

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// The countdown was not running; nothing changed.
    Idle,
    /// One second elapsed; this many remain.
    Running(u32),
    /// The last second elapsed and the countdown stopped.
    Finished,
}

/// A countdown over a forfeit's duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    active: bool,
}

impl Countdown {
    /// An inactive countdown of `seconds`.
    pub fn new(seconds: u32) -> Self {
        Self {
            duration: seconds,
            remaining: seconds,
            active: false,
        }
    }

    /// Start or resume. Returns false if already running or finished.
    pub fn start(&mut self) -> bool {
        if self.active || self.remaining == 0 {
            return false;
        }
        self.active = true;
        true
    }

    /// Pause. Returns false if not running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> CountdownTick {
        if !self.active {
            return CountdownTick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
            CountdownTick::Finished
        } else {
            CountdownTick::Running(self.remaining)
        }
    }

    /// Replace with an inactive countdown of `seconds`.
    pub fn reset(&mut self, seconds: u32) {
        *self = Self::new(seconds);
    }

    /// Total seconds.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Seconds left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether ticks currently count down.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the countdown ran out.
    pub fn is_finished(&self) -> bool {
        self.duration > 0 && self.remaining == 0
    }

    /// Whether the countdown was ever started.
    pub fn has_started(&self) -> bool {
        self.active || self.remaining < self.duration
    }

    /// Remaining time as `m:ss`.
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }
}

/// Format seconds as `m:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
