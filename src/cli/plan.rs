//! Plan CLI commands
//!
//! Check a planning configuration without the TUI, and inspect or discard
//! the saved draft.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::export::text::render_text;
use crate::export::BudgetReport;
use crate::models::{Currency, HouseholdMode, IntervalKind, PlanningConfig, Region};
use crate::services::validation;
use crate::storage::Storage;

/// Plan subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Validate an interval, a date range and a region
    Check {
        /// Interval kind (weekly, monthly, 6months, annual)
        #[arg(short, long)]
        interval: Option<IntervalKind>,
        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<NaiveDate>,
        /// End date (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<NaiveDate>,
        /// Region name (e.g. India, USA, UK)
        #[arg(short, long)]
        region: Option<Region>,
        /// Currency code (e.g. INR, USD, GBP)
        #[arg(short, long)]
        currency: Option<Currency>,
        /// Household mode (single, couple, family)
        #[arg(long, default_value = "single")]
        household: HouseholdMode,
    },
    /// List the interval kinds and their allowed spans
    Intervals,
    /// Show the saved draft as a report
    Show,
    /// Delete the saved draft
    Discard,
}

/// Handle a plan command
pub fn handle_plan_command(storage: &Storage, cmd: PlanCommands) -> BudgetResult<()> {
    match cmd {
        PlanCommands::Check {
            interval,
            start,
            end,
            region,
            currency,
            household,
        } => {
            let mut config = PlanningConfig::with_household(household);
            config.interval = interval;
            config.set_start(start);
            config.set_end(end).map_err(BudgetError::RangeInvalid)?;
            if let Some(region) = region {
                config.select_region(Some(region));
            }
            if let Some(currency) = currency {
                config.select_currency(Some(currency));
            }
            handle_check(&config)
        }
        PlanCommands::Intervals => {
            for kind in IntervalKind::ALL {
                let bounds = kind.bounds();
                let span = match bounds.max_days {
                    Some(max) => format!("{}-{} days", bounds.min_days, max),
                    None => format!("{}+ days", bounds.min_days),
                };
                println!("{:<10} {:<10} {}", kind.key(), kind.label(), span);
            }
            Ok(())
        }
        PlanCommands::Show => {
            let draft = storage.drafts.load()?;
            let report = BudgetReport::new(&draft.user, &draft.config, &draft.sheet);
            print!("{}", render_text(&report));
            println!(
                "Draft saved {}",
                draft.saved_at.format("%Y-%m-%d %H:%M UTC")
            );
            Ok(())
        }
        PlanCommands::Discard => {
            if storage.drafts.remove()? {
                println!("Discarded saved draft.");
            } else {
                println!("No saved draft.");
            }
            Ok(())
        }
    }
}

fn handle_check(config: &PlanningConfig) -> BudgetResult<()> {
    if let Some(span) = config.dates.span_days() {
        println!("Span:      {} days", span);
    }
    if let (Some(region), Some(currency)) = (config.geo.region(), config.geo.currency()) {
        println!("Region:    {} ({} {})", region, currency, currency.symbol());
    }
    println!("Household: {}", config.household);

    if let Some(warning) = validation::span_warning(config) {
        return Err(BudgetError::RangeInvalid(warning));
    }

    let missing = validation::missing_fields(config);
    if missing.is_empty() {
        println!("Ready: {} plan can continue to allocation.", config.interval_label());
    } else {
        println!("Not ready, still missing: {}", missing.join(", "));
    }
    Ok(())
}
