//! Allocation view
//!
//! The four category tables with live totals and the allocation tips.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::models::{AmountField, BudgetCategory};
use crate::services::BudgetSummary;
use crate::tui::app::{AllocationColumn, AllocationCursor, App, EditTarget, InputMode};

use super::{tip_lines, titled_block};

const ALLOCATION_TIPS: [(&str, &str); 4] = [
    ("Growth Analysis", "Track exactly how much your Digital Assets grow."),
    ("Debt Control", "Monitoring Mortgage & Interests helps."),
    ("Fixed Protection", "Ensure Taxes & Utilities don't exceed limits."),
    ("Emergency Safety", "Watch your Fund progress reach 100%."),
];

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(area);

    let summary = BudgetSummary::from_sheet(app.wizard.sheet());

    let tables = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(columns[0]);

    for (category, table_area) in BudgetCategory::ALL.iter().zip(tables.iter()) {
        render_category(frame, app, &summary, *category, *table_area);
    }

    render_sidebar(frame, app, &summary, columns[1]);
}

fn render_category(
    frame: &mut Frame,
    app: &App,
    summary: &BudgetSummary,
    category: BudgetCategory,
    area: Rect,
) {
    let symbol = app.wizard.committed().currency_symbol();
    let active = app.cursor.category == category;
    let totals = summary.totals_for(category);

    let header = Row::new(vec!["Description", "Planned", "Actual"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows = app
        .wizard
        .sheet()
        .rows(category)
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let cell = |column: AllocationColumn, text: String| {
                let here = AllocationCursor {
                    category,
                    row: index,
                    column,
                };
                let editing = app.input_mode == InputMode::Editing
                    && app.edit_target == Some(EditTarget::Cell(here));
                if editing {
                    Cell::from(format!("{}_", app.editor.value()))
                        .style(Style::default().fg(Color::Black).bg(Color::Yellow))
                } else if active && app.cursor == here {
                    Cell::from(text).style(Style::default().fg(Color::Black).bg(Color::Cyan))
                } else {
                    Cell::from(text)
                }
            };
            let amount = |field: AmountField| {
                let value = item.amount(field);
                if value.is_zero() {
                    String::new()
                } else {
                    value.format_with_symbol(symbol)
                }
            };
            Row::new(vec![
                cell(AllocationColumn::Description, item.description.clone()),
                cell(AllocationColumn::Amount(AmountField::Planned), amount(AmountField::Planned)),
                cell(AllocationColumn::Amount(AmountField::Actual), amount(AmountField::Actual)),
            ])
        });

    let title = format!(
        "{}  (planned {}, actual {})",
        category.label(),
        totals.planned.format_with_symbol(symbol),
        totals.actual.format_with_symbol(symbol)
    );
    let mut block = titled_block(&title);
    if active {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn render_sidebar(frame: &mut Frame, app: &App, summary: &BudgetSummary, area: Rect) {
    let symbol = app.wizard.committed().currency_symbol();
    let remaining_color = if summary.remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} plan", app.wizard.committed().interval_label()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::raw("Remaining: "),
            Span::styled(
                summary.remaining.format_with_symbol(symbol),
                Style::default()
                    .fg(remaining_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(tip_lines(&ALLOCATION_TIPS));

    if !app.wizard.sheet().has_meaningful_data() {
        lines.push(Line::from(Span::styled(
            "Add a description and an amount to continue.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(titled_block("Smart Allocation"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
