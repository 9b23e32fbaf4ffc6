//! Help overlay
//!
//! Lists the active keybindings and the command grammar in a centered
//! popup.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::App;

const COMMANDS: [(&str, &str); 9] = [
    ("set <d>... [xN] [auto|manual]", "configure intervals (90 or 1:30)"),
    ("stopwatch, sw", "count up with laps"),
    ("start", "start the program"),
    ("pause, resume", "toggle pause"),
    ("next, lap", "next interval or record lap"),
    ("back", "previous interval"),
    ("add [d], subtract [d]", "adjust the current interval"),
    ("help", "toggle this help"),
    ("quit, q", "exit"),
];

const POPUP_WIDTH: u16 = 64;

/// Render the help popup over `area`.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Cyan);

    let mut lines = vec![Line::styled("Keys", heading)];
    for (key, command) in &app.config().keybindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<8}"), key_style),
            Span::raw(command.clone()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<8}", "ctrl+c"), key_style),
        Span::raw("quit"),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<8}", "esc"), key_style),
        Span::raw("close prompt or help"),
    ]));

    lines.push(Line::raw(""));
    lines.push(Line::styled("Commands", heading));
    for (syntax, description) in COMMANDS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {syntax:<30}"), key_style),
            Span::raw(description),
        ]));
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let [popup] = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(POPUP_WIDTH)]).flex(Flex::Center).areas(popup);

    let block = Block::default().borders(Borders::ALL).title(" Help ");
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
