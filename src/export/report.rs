//! The budget report: everything an exported document shows
//!
//! A report is a plain snapshot, built once from the user, the committed
//! configuration and the budget sheet, then rendered into any format.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{
    ActiveUser, BudgetCategory, BudgetSheet, HouseholdMode, LineItem, Money, PlanningConfig,
};
use crate::services::aggregate::{BudgetSummary, CategoryTotals};

use super::ExportFormat;

/// One line item with its category
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub category: BudgetCategory,
    pub description: String,
    pub planned: Money,
    pub actual: Money,
}

/// Snapshot of a finished plan
#[derive(Debug, Clone, Serialize)]
pub struct BudgetReport {
    pub generated_at: DateTime<Utc>,
    pub display_name: String,
    pub interval: String,
    pub household: HouseholdMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip)]
    pub currency_symbol: &'static str,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub totals: Vec<CategoryTotals>,
    pub remaining: Money,
    pub rows: Vec<ReportRow>,
}

impl BudgetReport {
    pub fn new(user: &ActiveUser, config: &PlanningConfig, sheet: &BudgetSheet) -> Self {
        let summary = BudgetSummary::from_sheet(sheet);
        let rows = sheet
            .iter()
            .filter(|(_, item)| !item.is_blank())
            .map(|(category, item)| ReportRow::from_item(category, item))
            .collect();

        Self {
            generated_at: Utc::now(),
            display_name: user.display_name(),
            interval: config.interval_label().to_string(),
            household: config.household,
            region: config.geo.region().map(|r| r.to_string()),
            currency: config.geo.currency().map(|c| c.to_string()),
            currency_symbol: config.currency_symbol(),
            start: config.dates.start(),
            end: config.dates.end(),
            totals: summary.totals.to_vec(),
            remaining: summary.remaining,
            rows,
        }
    }

    /// "<Interval> Dashboard"
    pub fn title(&self) -> String {
        format!("{} Dashboard", self.interval)
    }

    /// "Summary for <name> - <start> to <end>"
    pub fn subtitle(&self) -> String {
        format!(
            "Summary for {} - {} to {}",
            self.display_name,
            format_date(self.start),
            format_date(self.end)
        )
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(self.currency_symbol)
    }

    pub fn summary(&self) -> BudgetSummary {
        let mut totals = BudgetCategory::ALL.map(CategoryTotals::empty);
        for (slot, total) in totals.iter_mut().zip(self.totals.iter()) {
            *slot = *total;
        }
        BudgetSummary {
            totals,
            remaining: self.remaining,
        }
    }
}

impl ReportRow {
    fn from_item(category: BudgetCategory, item: &LineItem) -> Self {
        Self {
            category,
            description: item.description.clone(),
            planned: item.planned,
            actual: item.actual,
        }
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

/// `<display name>_Budget_Report.<ext>`, with path separators replaced
pub fn report_file_name(display_name: &str, format: ExportFormat) -> String {
    let safe: String = display_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c => c,
        })
        .collect();
    format!("{}_Budget_Report.{}", safe, format.extension())
}
