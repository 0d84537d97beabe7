//! Display formatting for terminal output
//!
//! Tables for profiles and budget summaries, plus the text bar charts used
//! by the text report.

pub mod profile;
pub mod report;
pub mod summary;

pub use profile::{format_profile_details, format_profile_list};
pub use summary::{format_item_table, format_summary_table};
