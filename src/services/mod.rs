//! Service layer for Go Budgeting
//!
//! Business logic on top of the models and the storage layer: validating
//! the planning configuration, aggregating the budget sheet, managing
//! profiles and timing the validation banner.

pub mod aggregate;
pub mod alert;
pub mod profile;
pub mod validation;

pub use aggregate::{BudgetSummary, CategoryTotals, ShareSlice};
pub use alert::{Dismissal, TransientAlert};
pub use profile::ProfileService;
