//! Terminal-agnostic keyboard input.

use std::borrow::Cow;

/// Keyboard input abstraction.
///
/// Decouples application logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic testing of the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Character pressed with Control held.
    Ctrl(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Tab key.
    Tab,
    /// Escape key (close prompt or help).
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
}

impl KeyInput {
    /// Name used as the keybinding table key.
    ///
    /// Printable characters name themselves, except space which is
    /// `"space"`. Control chords are `"ctrl+<c>"`.
    pub fn name(self) -> Cow<'static, str> {
        match self {
            Self::Char(' ') => Cow::Borrowed("space"),
            Self::Char(c) => Cow::Owned(c.to_string()),
            Self::Ctrl(c) => Cow::Owned(format!("ctrl+{c}")),
            Self::Enter => Cow::Borrowed("enter"),
            Self::Backspace => Cow::Borrowed("backspace"),
            Self::Delete => Cow::Borrowed("delete"),
            Self::Tab => Cow::Borrowed("tab"),
            Self::Esc => Cow::Borrowed("esc"),
            Self::Left => Cow::Borrowed("left"),
            Self::Right => Cow::Borrowed("right"),
            Self::Up => Cow::Borrowed("up"),
            Self::Down => Cow::Borrowed("down"),
            Self::Home => Cow::Borrowed("home"),
            Self::End => Cow::Borrowed("end"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names() {
        assert_eq!(KeyInput::Char(' ').name(), "space");
        assert_eq!(KeyInput::Char('+').name(), "+");
        assert_eq!(KeyInput::Char(':').name(), ":");
        assert_eq!(KeyInput::Ctrl('c').name(), "ctrl+c");
        assert_eq!(KeyInput::Enter.name(), "enter");
        assert_eq!(KeyInput::Esc.name(), "esc");
    }
}
