//! Go Budgeting - a terminal budgeting wizard
//!
//! The wizard collects who is planning, a planning configuration (interval,
//! date range, region and household) and itemized budget entries, then shows
//! a summary dashboard that can be exported as a single report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, intervals, regions, the budget sheet)
//! - `services`: Configuration validation, aggregation, profiles, alerts
//! - `storage`: JSON file storage for profiles and the saved draft
//! - `audit`: Audit logging system
//! - `setup`: The wizard state machine and its step forms
//! - `export`: Report rendering (text, JSON, CSV, YAML)
//! - `display`: Text tables and charts for the CLI and text reports
//! - `cli`: Non-interactive commands
//! - `tui`: The terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use go_budgeting::config::{paths::BudgetPaths, settings::Settings};
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod setup;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
