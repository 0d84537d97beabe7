//! Configuration validation
//!
//! Classifies a date span against the chosen interval and decides whether a
//! planning configuration is complete enough to continue to the budget
//! sheet.

use chrono::NaiveDate;

use crate::models::date_range::span_days;
use crate::models::{IntervalKind, PlanningConfig, RangeWarning};

/// Check a span against an interval's allowed band
pub fn check_span(interval: IntervalKind, start: NaiveDate, end: NaiveDate) -> Option<RangeWarning> {
    let days = span_days(start, end);
    if interval.bounds().contains(days) {
        None
    } else {
        Some(RangeWarning::SpanOutOfBounds(interval))
    }
}

/// The span warning for a configuration, once interval and both dates are set
pub fn span_warning(config: &PlanningConfig) -> Option<RangeWarning> {
    let interval = config.interval?;
    let (start, end) = config.dates.bounds()?;
    check_span(interval, start, end)
}

/// Interval, both dates and a region chosen, with no span violation
pub fn is_ready(config: &PlanningConfig) -> bool {
    config.interval.is_some()
        && config.dates.is_complete()
        && config.geo.region().is_some()
        && span_warning(config).is_none()
}

/// What is still missing before the configuration can be committed
pub fn missing_fields(config: &PlanningConfig) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if config.interval.is_none() {
        missing.push("interval");
    }
    if config.dates.start().is_none() {
        missing.push("start date");
    }
    if config.dates.end().is_none() {
        missing.push("end date");
    }
    if config.geo.region().is_none() {
        missing.push("region");
    }
    missing
}
