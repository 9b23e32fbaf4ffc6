//! UI-facing state owned by the App.
//!
//! [`AppState`] is the status-line view of the active program, and
//! [`PromptState`] owns the command line text and cursor.

use std::fmt;

use workout_timer_core::ProgramState;

use crate::KeyInput;

/// Top-level status shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// No program installed yet.
    Unconfigured,
    /// Program installed, not started.
    Ready,
    /// Program clock advancing.
    Running,
    /// Program clock frozen.
    Paused,
    /// Workout finished.
    Done,
}

impl From<Option<ProgramState>> for AppState {
    fn from(state: Option<ProgramState>) -> Self {
        match state {
            None => Self::Unconfigured,
            Some(ProgramState::Ready) => Self::Ready,
            Some(ProgramState::Running) => Self::Running,
            Some(ProgramState::Paused) => Self::Paused,
            Some(ProgramState::Done) => Self::Done,
        }
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unconfigured => "UNCONFIGURED",
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
            Self::Done => "DONE",
        };
        f.write_str(label)
    }
}

/// Command prompt state.
///
/// The cursor is a character index, not a byte offset, so multi-byte input
/// edits cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptState {
    /// Whether the prompt is visible and capturing keys.
    open: bool,
    /// Text typed so far.
    buffer: String,
    /// Cursor position in characters.
    cursor: usize,
    /// Error from the last submitted command. Cleared on the next edit.
    error: Option<String>,
}

impl PromptState {
    /// Create a closed, empty prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the prompt is capturing keys.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Error from the last submitted command.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Show the prompt. Existing text is kept.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the prompt and discard its text and error.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Record a command failure to show under the prompt.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Apply an editing key. Returns `false` for keys the prompt ignores.
    pub fn edit(&mut self, key: KeyInput) -> bool {
        let len = self.buffer.chars().count();
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.buffer.insert(at, c);
                self.cursor += 1;
            },
            KeyInput::Backspace => {
                if self.cursor == 0 {
                    return true;
                }
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.buffer.remove(at);
            },
            KeyInput::Delete => {
                if self.cursor < len {
                    let at = self.byte_offset(self.cursor);
                    self.buffer.remove(at);
                }
            },
            KeyInput::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyInput::Right => self.cursor = (self.cursor + 1).min(len),
            KeyInput::Home => self.cursor = 0,
            KeyInput::End => self.cursor = len,
            KeyInput::Ctrl(_)
            | KeyInput::Enter
            | KeyInput::Tab
            | KeyInput::Esc
            | KeyInput::Up
            | KeyInput::Down => return false,
        }
        self.error = None;
        true
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.buffer.char_indices().nth(chars).map_or(self.buffer.len(), |(i, _)| i)
    }
}
