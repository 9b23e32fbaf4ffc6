//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine. Events are delivered one at a time by the
//! runtime; the App never reads the clock or the terminal itself.

use std::time::Duration;

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick carrying the wall-clock time since the previous tick.
    Tick(Duration),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}
