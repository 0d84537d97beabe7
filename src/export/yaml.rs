//! YAML report export

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};

use super::json::VersionedReport;
use super::report::BudgetReport;

/// Write the report as YAML with a short comment header
pub fn write_yaml<W: Write>(report: &BudgetReport, writer: &mut W) -> BudgetResult<()> {
    let map_err = |e: std::io::Error| BudgetError::Export(e.to_string());

    writeln!(writer, "# Go Budgeting Report").map_err(map_err)?;
    writeln!(writer, "# {}", report.title()).map_err(map_err)?;
    writeln!(writer, "# {}", report.subtitle()).map_err(map_err)?;
    writeln!(writer).map_err(map_err)?;

    serde_yaml::to_writer(writer, &VersionedReport::new(report))
        .map_err(|e| BudgetError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActiveUser, BudgetSheet, IntervalKind, PlanningConfig, UserProfile};

    #[test]
    fn test_yaml_header_and_body() {
        let user = ActiveUser::returning(UserProfile::new("Bo", "Chen", "bo@example.com"));
        let mut config = PlanningConfig::default();
        config.interval = Some(IntervalKind::Annual);
        let report = BudgetReport::new(&user, &config, &BudgetSheet::default());

        let mut out = Vec::new();
        write_yaml(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# Go Budgeting Report"));
        assert!(text.contains("# Annual Dashboard"));
        assert!(text.contains("bo@example.com"));
    }
}
