//! Command prompt
//!
//! One input line with cursor, plus an error line when the last command
//! failed.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::PromptState;

const PROMPT_PREFIX: &str = ": ";
const PROMPT_WIDTH: u16 = 2;

/// Rows needed for the prompt, zero when closed.
pub fn height(prompt: &PromptState) -> u16 {
    match (prompt.is_open(), prompt.error()) {
        (false, _) => 0,
        (true, None) => 1,
        (true, Some(_)) => 2,
    }
}

/// Render the prompt.
pub fn render(frame: &mut Frame, prompt: &PromptState, area: Rect) {
    let mut lines = vec![Line::from(format!("{PROMPT_PREFIX}{}", prompt.buffer()))];
    if let Some(error) = prompt.error() {
        lines.push(Line::styled(error.to_string(), Style::default().fg(Color::Red)));
    }

    frame.render_widget(Paragraph::new(lines), area);

    let max_x = area.x.saturating_add(area.width.saturating_sub(1));
    let cursor_x = area.x.saturating_add(PROMPT_WIDTH).saturating_add(prompt.cursor() as u16);
    frame.set_cursor_position((cursor_x.min(max_x), area.y));
}
