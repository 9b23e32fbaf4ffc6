//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod clock;
mod help;
mod prompt;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::App;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const STATUS_HEIGHT: u16 = 1;
    const CLOCK_MIN_HEIGHT: u16 = 1;

    let prompt_height = prompt::height(app.prompt());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(CLOCK_MIN_HEIGHT),
            Constraint::Length(prompt_height),
        ])
        .split(frame.area());

    let [status_area, clock_area, prompt_area] = chunks.as_ref() else {
        return;
    };

    status::render(frame, app, *status_area);
    clock::render(frame, app, *clock_area);
    if prompt_height > 0 {
        prompt::render(frame, app.prompt(), *prompt_area);
    }

    if app.show_help() {
        help::render(frame, app, frame.area());
    }
}
