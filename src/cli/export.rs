//! CLI command for report export
//!
//! Exports the saved draft the same way the dashboard's download action
//! does.

use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::export::{export_report, BudgetReport, ExportFormat};
use crate::storage::Storage;

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Directory to write the report into
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Export the saved draft as a report
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> BudgetResult<()> {
    let draft = storage.drafts.load()?;
    let report = BudgetReport::new(&draft.user, &draft.config, &draft.sheet);

    let format = args.format.unwrap_or(settings.default_export_format);
    let dir = args
        .output
        .unwrap_or_else(|| settings.export_dir(storage.paths()));

    let path = export_report(storage, &report, format, &dir)?;
    println!("Exported {} report to {}", format.label(), path.display());
    Ok(())
}
