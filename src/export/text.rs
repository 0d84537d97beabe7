//! Plain-text report export
//!
//! A single-page document: headings, the summary table, text bar charts
//! and the itemized list.

use std::io::Write;

use crate::display::report::{double_separator, format_header, grouped_bar_lines, separator, share_lines};
use crate::display::summary::{format_item_table, format_summary_table};
use crate::error::{BudgetError, BudgetResult};

use super::report::BudgetReport;

const PAGE_WIDTH: usize = 64;
const BAR_WIDTH: usize = 30;

/// Render the report as a text page
pub fn render_text(report: &BudgetReport) -> String {
    let summary = report.summary();
    let mut out = String::new();

    out.push_str(&double_separator(PAGE_WIDTH));
    out.push('\n');
    out.push_str(&format_header(&report.title(), PAGE_WIDTH));
    out.push('\n');
    out.push_str(&format_header(&report.subtitle(), PAGE_WIDTH));
    out.push('\n');
    out.push_str(&double_separator(PAGE_WIDTH));
    out.push_str("\n\n");

    let mut facts = vec![format!("Household: {}", report.household)];
    if let (Some(region), Some(currency)) = (&report.region, &report.currency) {
        facts.push(format!("Region: {} ({})", region, currency));
    }
    out.push_str(&facts.join("   "));
    out.push_str("\n\n");

    out.push_str(&format_summary_table(report));
    out.push_str("\n\n");

    out.push_str("Planned vs Actual\n");
    out.push_str(&separator(PAGE_WIDTH));
    out.push('\n');
    for line in grouped_bar_lines(&summary, report.currency_symbol, BAR_WIDTH) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');

    out.push_str("Where the income went\n");
    out.push_str(&separator(PAGE_WIDTH));
    out.push('\n');
    for line in share_lines(&summary, BAR_WIDTH) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');

    out.push_str("Line items\n");
    out.push_str(&format_item_table(report));
    out.push_str("\n\n");

    out.push_str(&format!(
        "Generated {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    out
}

/// Write the text page
pub fn write_text<W: Write>(report: &BudgetReport, writer: &mut W) -> BudgetResult<()> {
    writer
        .write_all(render_text(report).as_bytes())
        .map_err(|e| BudgetError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActiveUser, BudgetSheet, HouseholdMode, IntervalKind, PlanningConfig, Region, UserProfile};

    #[test]
    fn test_text_page_sections() {
        let user = ActiveUser::created(UserProfile::new("", "", "guest@example.com"));
        let mut config = PlanningConfig::with_household(HouseholdMode::Family);
        config.interval = Some(IntervalKind::Weekly);
        config.select_region(Some(Region::Japan));
        let report = BudgetReport::new(&user, &config, &BudgetSheet::default());

        let page = render_text(&report);
        assert!(page.contains("Weekly Dashboard"));
        assert!(page.contains("Summary for Guest User - - to -"));
        assert!(page.contains("Household: Family"));
        assert!(page.contains("Region: Japan (JPY)"));
        assert!(page.contains("Planned vs Actual"));
        assert!(page.contains("Rem"));
        assert!(page.contains("No line items entered."));
    }
}
