//! The planning wizard
//!
//! Walks a user from the landing page through identity, plan setup and
//! budget entry to the summary dashboard.

pub mod steps;
pub mod wizard;

pub use wizard::{CommitOutcome, Step, Wizard};
