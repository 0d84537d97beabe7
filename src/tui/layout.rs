//! Layout definitions for the TUI
//!
//! Every step shares a header with the step indicator, a main area and a
//! one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Step indicator
    pub header: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Step indicator
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// A form beside a column of tips
pub struct FormLayout {
    pub form: Rect,
    pub tips: Rect,
}

impl FormLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        Self {
            form: chunks[0],
            tips: chunks[1],
        }
    }
}

/// Layout for the summary dashboard
pub struct SummaryLayout {
    /// Title and subtitle
    pub heading: Rect,
    /// Grouped planned/actual bars
    pub bars: Rect,
    /// Share of income per expense category
    pub shares: Rect,
    /// Totals table
    pub table: Rect,
}

impl SummaryLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Heading
                Constraint::Percentage(50), // Charts
                Constraint::Min(8),         // Table
            ])
            .split(area);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[1]);

        Self {
            heading: vertical[0],
            bars: charts[0],
            shares: charts[1],
            table: vertical[2],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect_fixed(60, 8, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_app_layout_reserves_status_line() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.main.height, 20);
    }
}
