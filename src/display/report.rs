//! Text chart and layout helpers for terminal and text reports

use crate::services::aggregate::BudgetSummary;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// A horizontal bar of `width` cells, filled in proportion to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Center a title in a field of the given width
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate to a number of characters, ending in an ellipsis when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Planned vs actual bars per category, one pair of lines each
pub fn grouped_bar_lines(summary: &BudgetSummary, symbol: &str, width: usize) -> Vec<String> {
    let max = summary
        .bar_series()
        .iter()
        .map(|(_, planned, actual)| planned.cents().max(actual.cents()))
        .max()
        .unwrap_or(0) as f64;

    summary
        .bar_series()
        .into_iter()
        .flat_map(|(label, planned, actual)| {
            [
                format!(
                    "{:<4} plan {} {}",
                    label,
                    format_bar(planned.cents() as f64, max, width),
                    planned.format_with_symbol(symbol)
                ),
                format!(
                    "{:<4} act  {} {}",
                    "",
                    format_bar(actual.cents() as f64, max, width),
                    actual.format_with_symbol(symbol)
                ),
            ]
        })
        .collect()
}

/// Expense and remainder shares as percentage bars
pub fn share_lines(summary: &BudgetSummary, width: usize) -> Vec<String> {
    summary
        .share_percentages()
        .into_iter()
        .map(|(label, pct)| {
            format!(
                "{:<5} {} {:>6}",
                label,
                format_bar(pct, 100.0, width),
                format_percentage(pct)
            )
        })
        .collect()
}
