//! Core data models for Go Budgeting
//!
//! This module contains the data structures of the planning domain: the
//! planning configuration, the budget sheet and its line items, and the
//! user profiles the wizard runs for.

pub mod budget;
pub mod category;
pub mod date_range;
pub mod household;
pub mod interval;
pub mod line_item;
pub mod money;
pub mod plan;
pub mod profile;
pub mod region;

pub use budget::BudgetSheet;
pub use category::BudgetCategory;
pub use date_range::DateRange;
pub use household::{HouseholdMode, Scenario, ScenarioTip};
pub use interval::{IntervalKind, RangeWarning, SpanBounds};
pub use line_item::{AmountField, LineItem};
pub use money::{Money, MoneyParseError};
pub use plan::PlanningConfig;
pub use profile::{ActiveUser, ProfileId, UserProfile};
pub use region::{Currency, GeoSelection, Region};
