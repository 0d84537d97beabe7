//! Report export for Go Budgeting
//!
//! A report is rendered completely in memory and then written with an
//! atomic rename, so a failed export never leaves a partial file behind.
//!
//! - Text: single-page summary with text charts
//! - JSON: machine-readable report with a schema version
//! - CSV: spreadsheet-friendly rows and totals
//! - YAML: human-readable report

pub mod csv;
pub mod json;
pub mod report;
pub mod text;
pub mod yaml;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::audit::{AuditEntry, AuditEvent};
use crate::error::{BudgetError, BudgetResult};
use crate::storage::{write_atomic, Storage};

pub use json::REPORT_SCHEMA_VERSION;
pub use report::{report_file_name, BudgetReport, ReportRow};

/// Output format of an exported report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Csv,
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Yaml => "yaml",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "JSON",
            Self::Csv => "CSV",
            Self::Yaml => "YAML",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Text => Self::Json,
            Self::Json => Self::Csv,
            Self::Csv => Self::Yaml,
            Self::Yaml => Self::Text,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Render a report into bytes
pub fn render(report: &BudgetReport, format: ExportFormat) -> BudgetResult<Vec<u8>> {
    let mut buffer = Vec::new();
    match format {
        ExportFormat::Text => text::write_text(report, &mut buffer)?,
        ExportFormat::Json => json::write_json(report, &mut buffer)?,
        ExportFormat::Csv => csv::write_csv(report, &mut buffer)?,
        ExportFormat::Yaml => yaml::write_yaml(report, &mut buffer)?,
    }
    Ok(buffer)
}

/// Render and write a report into `dir`, returning the written path
///
/// Any failure is reported as [`BudgetError::Export`] and logged; no file
/// is left behind. Once the file is written the export succeeds even if the
/// audit log cannot be appended.
pub fn export_report(
    storage: &Storage,
    report: &BudgetReport,
    format: ExportFormat,
    dir: &Path,
) -> BudgetResult<PathBuf> {
    let file_name = report_file_name(&report.display_name, format);
    let path = dir.join(&file_name);

    let result = render(report, format).and_then(|bytes| write_atomic(&path, &bytes));

    match result {
        Ok(()) => {
            storage.record_audit(
                &AuditEntry::new(AuditEvent::ReportExported, path.display().to_string())
                    .with_detail(format.label()),
            );
            Ok(path)
        }
        Err(e) => {
            let message = match e {
                BudgetError::Export(msg) | BudgetError::Storage(msg) | BudgetError::Io(msg) => msg,
                other => other.to_string(),
            };
            storage.record_audit(
                &AuditEntry::new(AuditEvent::ExportFailed, file_name).with_detail(message.clone()),
            );
            Err(BudgetError::Export(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::{ActiveUser, BudgetSheet, PlanningConfig, UserProfile};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, BudgetReport) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let user = ActiveUser::created(UserProfile::new("Sam", "Lee", "sam@example.com"));
        let report = BudgetReport::new(&user, &PlanningConfig::default(), &BudgetSheet::default());
        (temp_dir, storage, report)
    }

    #[test]
    fn test_export_each_format() {
        let (temp, storage, report) = setup();
        let dir = temp.path().join("exports");

        for format in [
            ExportFormat::Text,
            ExportFormat::Json,
            ExportFormat::Csv,
            ExportFormat::Yaml,
        ] {
            let path = export_report(&storage, &report, format, &dir).unwrap();
            assert_eq!(
                path.file_name().unwrap().to_str().unwrap(),
                format!("Sam Lee_Budget_Report.{}", format.extension())
            );
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log.len(), 4);
        assert!(log.iter().all(|e| e.event == AuditEvent::ReportExported));
    }

    #[test]
    fn test_failed_export_leaves_no_file() {
        let (temp, storage, report) = setup();
        // A file where the export directory should be
        let blocker = temp.path().join("blocked");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = export_report(&storage, &report, ExportFormat::Csv, &blocker).unwrap_err();
        assert!(matches!(err, BudgetError::Export(_)));
        assert!(err.to_string().ends_with("Please try again."));
        assert!(!blocker.join("Sam Lee_Budget_Report.csv").exists());

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log.last().unwrap().event, AuditEvent::ExportFailed);
    }

    #[test]
    fn test_default_format() {
        assert_eq!(ExportFormat::default(), ExportFormat::Text);
        assert_eq!(ExportFormat::Yaml.next(), ExportFormat::Text);
    }

    #[test]
    fn test_written_report_survives_audit_failure() {
        let (temp, storage, report) = setup();
        std::fs::create_dir_all(storage.paths().audit_log()).unwrap();
        let dir = temp.path().join("exports");

        let path = export_report(&storage, &report, ExportFormat::Json, &dir).unwrap();
        assert!(path.exists());
        assert!(path.ends_with("Sam Lee_Budget_Report.json"));
    }
}
