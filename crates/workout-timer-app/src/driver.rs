//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::{future::Future, ops::Sub, time::Duration};

use crate::{App, AppEvent};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in the terminal and under test.
///
/// # Implementations
///
/// - **TUI**: crossterm for terminal events, ratatui for drawing
/// - **Tests**: scripted events and a virtual clock
///
/// # Associated Types
///
/// - [`Error`](Driver::Error): Platform-specific error type
/// - [`Instant`](Driver::Instant): Time representation (real or virtual)
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Time instant type. Enables virtual time in tests.
    type Instant: Copy + Ord + Send + Sync + Sub<Output = Duration>;

    /// Wait briefly for the next input event.
    ///
    /// Returns `None` if no event arrived within the driver's tick period, so
    /// the runtime can keep the clock moving.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Current time instant.
    fn now(&self) -> Self::Instant;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Ring the bell.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn bell(&mut self) -> Result<(), Self::Error>;

    /// Release terminal resources.
    fn stop(&mut self);
}
