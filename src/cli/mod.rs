//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod export;
pub mod plan;
pub mod profile;

pub use audit::handle_log_command;
pub use export::{handle_export_command, ExportArgs};
pub use plan::{handle_plan_command, PlanCommands};
pub use profile::{handle_profile_command, ProfileCommands};
