//! Summary dashboard view
//!
//! Grouped planned/actual bar chart, the expense share breakdown and the
//! totals table, all drawn from the report that an export would write.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph, Row, Table},
    Frame,
};

use crate::display::report::share_lines;
use crate::export::BudgetReport;
use crate::services::BudgetSummary;
use crate::tui::app::App;
use crate::tui::layout::SummaryLayout;

use super::titled_block;

const PLANNED_COLOR: Color = Color::LightBlue;
const ACTUAL_COLOR: Color = Color::Magenta;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let report = match app.wizard.report() {
        Ok(report) => report,
        Err(e) => {
            frame.render_widget(Paragraph::new(e.to_string()), area);
            return;
        }
    };
    let summary = report.summary();
    let layout = SummaryLayout::new(area);

    let heading = vec![
        Line::from(Span::styled(
            report.title(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(report.subtitle(), Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(
        Paragraph::new(heading).alignment(Alignment::Center),
        layout.heading,
    );

    render_bars(frame, &summary, layout.bars);
    render_shares(frame, &summary, layout.shares);
    render_table(frame, app, &report, layout.table);
}

fn render_bars(frame: &mut Frame, summary: &BudgetSummary, area: Rect) {
    let mut chart = BarChart::default()
        .block(titled_block("Planned vs Actual"))
        .bar_width(4)
        .bar_gap(0)
        .group_gap(3);

    for (label, planned, actual) in summary.bar_series() {
        let bars = [
            Bar::default()
                .value(planned.units().max(0) as u64)
                .text_value(String::new())
                .style(Style::default().fg(PLANNED_COLOR)),
            Bar::default()
                .value(actual.units().max(0) as u64)
                .text_value(String::new())
                .style(Style::default().fg(ACTUAL_COLOR)),
        ];
        chart = chart.data(BarGroup::default().label(Line::from(label)).bars(&bars));
    }

    frame.render_widget(chart, area);
}

fn render_shares(frame: &mut Frame, summary: &BudgetSummary, area: Rect) {
    let bar_width = area.width.saturating_sub(16).max(4) as usize;
    let mut lines: Vec<Line> = share_lines(summary, bar_width)
        .into_iter()
        .map(Line::from)
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("■ Planned  ", Style::default().fg(PLANNED_COLOR)),
        Span::styled("■ Actual", Style::default().fg(ACTUAL_COLOR)),
    ]));

    frame.render_widget(
        Paragraph::new(lines).block(titled_block("Where the income went")),
        area,
    );
}

fn render_table(frame: &mut Frame, app: &App, report: &BudgetReport, area: Rect) {
    let header = Row::new(vec!["Category", "Planned", "Actual"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let mut rows: Vec<Row> = report
        .totals
        .iter()
        .map(|t| {
            Row::new(vec![
                t.category.label().to_string(),
                report.money(t.planned),
                report.money(t.actual),
            ])
        })
        .collect();

    let remaining_color = if report.remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };
    rows.push(
        Row::new(vec![
            "Remaining".to_string(),
            String::new(),
            report.money(report.remaining),
        ])
        .style(
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
    );

    let title = format!("Totals  (export as {})", app.export_format.label());
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .block(titled_block(&title));

    frame.render_widget(table, area);
}
