//! CSV report export
//!
//! One row per line item, then one total row per category and a final
//! remaining-balance row. Amounts are plain decimals without a symbol.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};

use super::report::BudgetReport;

fn csv_err(e: csv::Error) -> BudgetError {
    BudgetError::Export(e.to_string())
}

/// Write the report as CSV
pub fn write_csv<W: Write>(report: &BudgetReport, writer: &mut W) -> BudgetResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(["Kind", "Category", "Description", "Planned", "Actual"])
        .map_err(csv_err)?;

    for row in &report.rows {
        out.write_record([
            "item",
            row.category.label(),
            row.description.as_str(),
            &row.planned.to_string(),
            &row.actual.to_string(),
        ])
        .map_err(csv_err)?;
    }

    for total in &report.totals {
        out.write_record([
            "total",
            total.category.label(),
            "",
            &total.planned.to_string(),
            &total.actual.to_string(),
        ])
        .map_err(csv_err)?;
    }

    out.write_record(["remaining", "", "", "", &report.remaining.to_string()])
        .map_err(csv_err)?;

    out.flush().map_err(|e| BudgetError::Export(e.to_string()))
}
