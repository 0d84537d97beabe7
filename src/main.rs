use anyhow::Result;
use clap::{Parser, Subcommand};

use go_budgeting::cli::{
    handle_export_command, handle_log_command, handle_plan_command, handle_profile_command,
    ExportArgs, PlanCommands, ProfileCommands,
};
use go_budgeting::config::{paths::BudgetPaths, settings::Settings};
use go_budgeting::storage::Storage;

#[derive(Parser)]
#[command(
    name = "gobudget",
    version,
    about = "Terminal budgeting wizard",
    long_about = "Go Budgeting walks you from a profile through a planning interval, \
                  date range and region to an itemized budget and a summary dashboard. \
                  Tell your money where to go, instead of wondering where it went."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the planning wizard (default)
    #[command(alias = "ui")]
    Tui,

    /// Profile management commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Check a plan configuration or inspect the saved draft
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Export the saved draft as a report
    Export(ExportArgs),

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => go_budgeting::tui::run_tui(&storage, &settings)?,
        Commands::Profile(cmd) => handle_profile_command(&storage, cmd)?,
        Commands::Plan(cmd) => handle_plan_command(&storage, cmd)?,
        Commands::Export(args) => handle_export_command(&storage, &settings, args)?,
        Commands::Log { count } => handle_log_command(&storage, count)?,
        Commands::Config => {
            println!("Go Budgeting Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Profiles:         {}", paths.profiles_file().display());
            println!("Saved draft:      {}", paths.draft_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Export directory: {}", settings.export_dir(&paths).display());
            println!();
            println!("Settings:");
            println!("  Banner dismiss:  {}s", settings.alert_dismiss_secs);
            println!("  Tick rate:       {}ms", settings.tick_rate_ms);
            println!("  Export format:   {}", settings.default_export_format);
            println!("  Household:       {}", settings.default_household);
        }
    }

    Ok(())
}
