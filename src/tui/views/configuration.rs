//! Configuration view
//!
//! Interval, dates, region and household on the left; the household
//! scenario tips on the right; the validation banner under the form.

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{household_choice, App, ConfigField, EditTarget, InputMode};
use crate::tui::layout::FormLayout;

use super::{tip_lines, titled_block};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = FormLayout::new(area);
    render_form(frame, app, layout.form);
    render_scenario(frame, app, layout.tips);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = app.wizard.configuration();
    let config = form.config();

    let block = titled_block("Plan Setup");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(ConfigField::ALL.len() as u16 * 2), Constraint::Min(2)])
        .split(inner);

    let mut lines = Vec::new();
    for field in ConfigField::ALL {
        let focused = field == app.config_field;
        let value = match field {
            ConfigField::Interval => choice(config.interval.map(|i| i.label().to_string())),
            ConfigField::Start => date_value(app, EditTarget::StartDate, config.dates.start()),
            ConfigField::End => date_value(app, EditTarget::EndDate, config.dates.end()),
            ConfigField::Region => choice(config.geo.region().map(|r| r.name().to_string())),
            ConfigField::Currency => choice(
                config
                    .geo
                    .currency()
                    .map(|c| format!("{} ({})", c.code(), c.symbol())),
            ),
            ConfigField::Household => household_choice(config.household),
            ConfigField::Continue => String::new(),
        };

        let line = if field == ConfigField::Continue {
            let style = if !form.is_ready() {
                Style::default().fg(Color::DarkGray)
            } else if focused {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
            };
            Line::from(Span::styled(" Continue to allocation ", style))
        } else {
            let label_style = if focused {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Cyan)
            };
            Line::from(vec![
                Span::styled(format!("{:<11}", field.label()), label_style),
                Span::raw("  "),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        };
        lines.push(line);
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let mut status = Vec::new();
    if let Some(banner) = form.banner() {
        status.push(Line::from(Span::styled(
            format!("⚠ {}", banner),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(span) = config.dates.span_days() {
        status.push(Line::from(Span::styled(
            format!("Span: {} days", span),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(status).wrap(Wrap { trim: true }), chunks[1]);
}

fn choice(value: Option<String>) -> String {
    match value {
        Some(v) => format!("◀ {} ▶", v),
        None => "◀ choose ▶".to_string(),
    }
}

fn date_value(app: &App, target: EditTarget, date: Option<NaiveDate>) -> String {
    if app.input_mode == InputMode::Editing && app.edit_target == Some(target) {
        return format!("{}_", app.editor.value());
    }
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "YYYY-MM-DD".to_string())
}

fn render_scenario(frame: &mut Frame, app: &App, area: Rect) {
    let scenario = app.wizard.configuration().config().household.scenario();

    let mut lines = vec![
        Line::from(Span::styled(
            scenario.subtitle,
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];
    let tips: Vec<_> = scenario.tips.iter().map(|t| (t.heading, t.body)).collect();
    lines.extend(tip_lines(&tips));

    let paragraph = Paragraph::new(lines)
        .block(titled_block(scenario.title))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
