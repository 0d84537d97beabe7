//! JSON report export
//!
//! Wraps the report with a schema version so downstream tools can tell
//! report layouts apart.

use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};

use super::report::BudgetReport;

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

#[derive(Serialize)]
pub(crate) struct VersionedReport<'a> {
    pub schema_version: &'static str,
    pub app_version: &'static str,
    #[serde(flatten)]
    pub report: &'a BudgetReport,
}

impl<'a> VersionedReport<'a> {
    pub fn new(report: &'a BudgetReport) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            report,
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn write_json<W: Write>(report: &BudgetReport, writer: &mut W) -> BudgetResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &VersionedReport::new(report))
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))
}
