//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering.

use std::{
    io::{self, Stdout, Write, stdout},
    time::{Duration, Instant},
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::{App, AppEvent, Driver, KeyInput, ui};

/// Terminal bell.
const BEL: &[u8] = b"\x07";

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Puts the terminal in raw mode on the alternate screen for its lifetime
/// and restores it on [`Driver::stop`] or drop.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    tick_rate: Duration,
    active: bool,
}

impl TerminalDriver {
    /// Enter raw mode and the alternate screen.
    ///
    /// `tick_rate` bounds how long [`Driver::poll_event`] waits for input.
    pub fn new(tick_rate: Duration) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, tick_rate, active: true })
    }

    /// Convert a crossterm key event to `KeyInput`.
    fn convert_key(event: KeyEvent) -> Option<KeyInput> {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char(c) => Some(KeyInput::Ctrl(c)),
                _ => None,
            };
        }

        match event.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;
    type Instant = Instant;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        Ok(Self::convert_key(key_event).map(AppEvent::Key))
                    },
                    Some(Ok(Event::Resize(cols, rows))) => Ok(Some(AppEvent::Resize(cols, rows))),
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    _ => Ok(None),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(self.tick_rate) => Ok(None),
        }
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    fn bell(&mut self) -> Result<(), Self::Error> {
        let backend = self.terminal.backend_mut();
        backend.write_all(BEL)?;
        backend.flush()?;
        Ok(())
    }

    fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Err(e) = disable_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {e}");
        }
        if let Err(e) = stdout().execute(LeaveAlternateScreen) {
            tracing::warn!("Failed to leave alternate screen: {e}");
        }
        if let Err(e) = self.terminal.show_cursor() {
            tracing::warn!("Failed to show cursor: {e}");
        }
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
