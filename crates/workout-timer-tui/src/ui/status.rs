//! Status bar
//!
//! Displays program state, position within the workout and lap summary.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use workout_timer_core::Position;

use crate::{App, AppState, glyphs};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let state_span = Span::styled(
        state.to_string(),
        Style::default().fg(state_color(state)).add_modifier(Modifier::BOLD),
    );

    let mut spans = vec![Span::raw(" "), state_span];

    if let Some(program) = app.program() {
        let mut detail = String::new();
        if let Some(position) = program.position() {
            detail.push_str(&format_position(position));
        }
        if let Some(last) = program.laps().last() {
            let count = program.laps().len();
            detail.push_str(&format!(" | Laps: {count} (last {})", glyphs::format_clock(*last, true)));
        }
        if let Some(total) = program.total_elapsed() {
            detail.push_str(&format!(" | Total {}", glyphs::format_clock(total, true)));
        }
        if program.is_overflow() {
            detail.push_str(" | OVER");
        }
        spans.push(Span::styled(detail, Style::default().fg(Color::Gray)));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn state_color(state: AppState) -> Color {
    match state {
        AppState::Unconfigured => Color::Gray,
        AppState::Ready => Color::Cyan,
        AppState::Running => Color::White,
        AppState::Paused => Color::Yellow,
        AppState::Done => Color::Green,
    }
}

/// `" | Interval 2/3 | Round 1/8"`, with `∞` for unlimited rounds.
pub fn format_position(position: Position) -> String {
    let rounds = if position.rounds == 0 { "∞".to_string() } else { position.rounds.to_string() };
    format!(
        " | Interval {}/{} | Round {}/{rounds}",
        position.interval + 1,
        position.intervals,
        position.round + 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_one_based() {
        let position = Position { interval: 1, intervals: 3, round: 0, rounds: 8 };
        assert_eq!(format_position(position), " | Interval 2/3 | Round 1/8");
    }

    #[test]
    fn unlimited_rounds() {
        let position = Position { interval: 0, intervals: 1, round: 4, rounds: 0 };
        assert_eq!(format_position(position), " | Interval 1/1 | Round 5/∞");
    }
}
