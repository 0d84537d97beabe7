//! TUI Views module
//!
//! One view per wizard step, plus the step indicator, the status bar and
//! the overlays (help and notices).

pub mod allocation;
pub mod configuration;
pub mod identity;
pub mod landing;
pub mod status_bar;
pub mod summary;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::setup::Step;

use super::app::App;
use super::layout::{centered_rect_fixed, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_step_indicator(frame, app.wizard.step(), layout.header);

    match app.wizard.step() {
        Step::Landing => landing::render(frame, app, layout.main),
        Step::Identity => identity::render(frame, app, layout.main),
        Step::Configuration => configuration::render(frame, app, layout.main),
        Step::Allocation => allocation::render(frame, app, layout.main),
        Step::Summary => summary::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.show_help {
        render_help(frame, app.wizard.step());
    }

    if let Some(notification) = app.notifications.current() {
        let height = if notification.is_blocking() { 7 } else { 5 };
        let area = centered_rect_fixed(60, height, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

fn render_step_indicator(frame: &mut Frame, current: Step, area: Rect) {
    let mut spans = vec![Span::styled(
        " Go Budgeting  ",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];

    for step in Step::ALL {
        let style = if step == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if step < current {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!(" {}. {} ", step.number(), step.title()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}  ", key), Style::default().fg(Color::Cyan)),
        Span::raw(description.to_string()),
    ])
}

fn help_lines(step: Step) -> Vec<Line<'static>> {
    let mut lines = vec![
        key_line("Ctrl+C", "Quit"),
        key_line("Esc", "Previous step"),
        Line::from(""),
    ];
    let specific: &[(&str, &str)] = match step {
        Step::Landing => &[("Enter", "Let's plan a budget"), ("r", "Resume saved plan")],
        Step::Identity => &[
            ("Tab", "Next field"),
            ("Space", "Toggle checkbox"),
            ("Enter", "Activate button"),
        ],
        Step::Configuration => &[
            ("Up/Down", "Move between fields"),
            ("Left/Right", "Change value"),
            ("Enter", "Edit date / continue"),
            ("Del", "Clear date"),
        ],
        Step::Allocation => &[
            ("Tab", "Next category"),
            ("Arrows", "Move between cells"),
            ("Enter", "Edit cell"),
            ("a / d", "Add / remove row"),
            ("s", "Save progress"),
            ("n", "Show dashboard"),
        ],
        Step::Summary => &[
            ("f", "Change export format"),
            ("e", "Export report"),
            ("s", "Save progress"),
        ],
    };
    lines.extend(specific.iter().map(|(k, d)| key_line(k, d)));
    lines
}

fn render_help(frame: &mut Frame, step: Step) {
    let area = centered_rect_fixed(50, 14, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Help: {} ", step.title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(step))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Bordered block with the title style shared by every step
pub(crate) fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
}

/// Tip cards stacked in a column
pub(crate) fn tip_lines(tips: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (heading, body) in tips {
        lines.push(Line::from(Span::styled(
            *heading,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            *body,
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    lines
}
