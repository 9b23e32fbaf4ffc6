//! Application side-effects.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw the screen.
    Render,

    /// Ring the terminal bell (low-time entry or workout complete).
    Bell,

    /// Quit the application.
    Quit,
}
