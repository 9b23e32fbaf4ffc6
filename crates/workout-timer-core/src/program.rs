//! The [`Program`] contract shared by every timing engine.
//!
//! Exactly one program is active at a time. The owner holds it as a
//! `Box<dyn Program>` and replaces it wholesale when the user configures a
//! new workout, so engines never need to support partial reconfiguration.
//!
//! # Lifecycle
//!
//! ```text
//! ┌───────┐  start   ┌─────────┐  toggle_pause  ┌────────┐
//! │ Ready │─────────>│ Running │<──────────────>│ Paused │
//! └───────┘          └─────────┘                └────────┘
//!                       │   ↑
//!          final next() │   │ toggle_pause (re-arm)
//!                       ↓   │
//!                    ┌────────┐
//!                    │  Done  │   (interval timer only)
//!                    └────────┘
//! ```

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Lifecycle state shared by all program variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramState {
    /// Configured but not started.
    Ready,
    /// Clock is advancing.
    Running,
    /// Clock is frozen.
    Paused,
    /// All rounds completed. Never reached by a stopwatch.
    Done,
}

impl fmt::Display for ProgramState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
            Self::Done => "DONE",
        };
        f.write_str(label)
    }
}

/// How an interval timer behaves when an interval runs out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Advance to the next interval as soon as time expires.
    #[default]
    Auto,
    /// Keep counting into overflow until the user advances.
    Manual,
}

impl Mode {
    /// Parse the lowercase name used in commands and config.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(Self::Auto),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

/// Where an interval timer is within its workout.
///
/// Indices are zero-based. `rounds == 0` means the workout loops forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Index of the current interval.
    pub interval: usize,
    /// Number of intervals per round.
    pub intervals: usize,
    /// Index of the current round.
    pub round: u32,
    /// Configured number of rounds, `0` for unlimited.
    pub rounds: u32,
}

/// A running countdown, interval workout or stopwatch.
///
/// Methods never fail: commands that make no sense in the current state are
/// no-ops. All methods are synchronous and do no I/O.
pub trait Program: fmt::Debug + Send {
    /// Advance the clock by `elapsed`. No-op unless [`ProgramState::Running`].
    fn tick(&mut self, elapsed: Duration);

    /// Transition `Ready -> Running`. No-op in any other state.
    fn start(&mut self);

    /// Flip between running and paused.
    fn toggle_pause(&mut self);

    /// Explicit advance to the next segment.
    fn next(&mut self);

    /// Current lifecycle state.
    fn state(&self) -> ProgramState;

    /// Duration to render. Always non-negative.
    fn time_display(&self) -> Duration;

    /// True if the engine has run past its target without terminating.
    fn is_overflow(&self) -> bool;

    /// True if remaining time is in `(0, threshold)`.
    fn is_low_time(&self, _threshold: Duration) -> bool {
        false
    }

    /// True if [`Program::time_display`] is an elapsed quantity rather than
    /// a remaining one.
    fn counts_up(&self) -> bool;

    /// Interval and round counters. `None` for engines without them.
    fn position(&self) -> Option<Position> {
        None
    }

    /// Recorded laps, oldest first.
    fn laps(&self) -> &[Duration] {
        &[]
    }

    /// Running time across all laps. `None` for engines that count down.
    fn total_elapsed(&self) -> Option<Duration> {
        None
    }

    /// Add time to the current segment.
    fn add_time(&mut self, _amount: Duration) {}

    /// Remove time from the current segment.
    fn subtract_time(&mut self, _amount: Duration) {}

    /// Step back to the previous segment.
    fn back(&mut self) {}
}
