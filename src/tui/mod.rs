//! Terminal User Interface module
//!
//! Drives the planning wizard with ratatui: one view per step, a status bar
//! and overlays for help and notices.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
