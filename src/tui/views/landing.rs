//! Landing view

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const TAGLINE: &str = "Tell your money where to go, instead of wondering where it went.";

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Go Budgeting",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " Let's plan a budget ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    if app.storage.drafts.exists() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "A saved plan is waiting. Press r to resume it.",
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
