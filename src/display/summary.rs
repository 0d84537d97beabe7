//! Summary table formatting
//!
//! Renders the per-category totals and the remaining balance as a table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::export::report::BudgetReport;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Planned")]
    planned: String,
    #[tabled(rename = "Actual")]
    actual: String,
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Planned")]
    planned: String,
    #[tabled(rename = "Actual")]
    actual: String,
}

/// Category totals followed by the remaining balance
pub fn format_summary_table(report: &BudgetReport) -> String {
    let mut rows: Vec<SummaryRow> = report
        .totals
        .iter()
        .map(|t| SummaryRow {
            category: t.category.label().to_string(),
            planned: report.money(t.planned),
            actual: report.money(t.actual),
        })
        .collect();

    rows.push(SummaryRow {
        category: "Remaining".to_string(),
        planned: String::new(),
        actual: report.money(report.remaining),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Every filled line item
pub fn format_item_table(report: &BudgetReport) -> String {
    if report.rows.is_empty() {
        return "No line items entered.".to_string();
    }

    let rows = report.rows.iter().map(|r| ItemRow {
        category: r.category.label(),
        description: super::report::truncate(&r.description, 32),
        planned: report.money(r.planned),
        actual: report.money(r.actual),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
        .to_string()
}
