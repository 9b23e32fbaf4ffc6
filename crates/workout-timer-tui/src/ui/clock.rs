//! Clock area
//!
//! Big digits centered in the main area, or a hint when nothing is
//! configured.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use workout_timer_core::Program;

use crate::{
    App, AppState,
    glyphs::{self, GLYPH_HEIGHT},
};

const HINT: &str = "Press : to configure or ? for help";

/// Render the clock.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(program) = app.program() else {
        let [hint_area] = Layout::vertical([Constraint::Length(1)]).flex(Flex::Center).areas(area);
        let hint = Paragraph::new(HINT)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(hint, hint_area);
        return;
    };

    let text = glyphs::format_clock(program.time_display(), program.counts_up());
    let lines: Vec<Line> = glyphs::big_digits(&text).into_iter().map(Line::from).collect();

    let [digits_area] = Layout::vertical([Constraint::Length(GLYPH_HEIGHT as u16)])
        .flex(Flex::Center)
        .areas(area);

    let paragraph =
        Paragraph::new(lines).alignment(Alignment::Center).style(clock_style(app, program));
    frame.render_widget(paragraph, digits_area);
}

fn clock_style(app: &App, program: &dyn Program) -> Style {
    let style = Style::default();
    match app.state() {
        AppState::Done => style.fg(Color::Green),
        _ if program.is_overflow() => style.fg(Color::Red),
        _ if app.is_low_time() => style.fg(Color::Yellow),
        AppState::Paused => style.fg(Color::White).add_modifier(Modifier::DIM),
        _ => style.fg(Color::White),
    }
}
