//! Planning date range
//!
//! The end date is never earlier than the start date, and moving the start
//! date always forgets the end date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::interval::RangeWarning;

/// Start and end of the planning window; either may still be unset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Both dates, once both are chosen
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }

    pub fn is_complete(&self) -> bool {
        self.bounds().is_some()
    }

    /// Set the start date and clear any accepted end date
    pub fn set_start(&mut self, start: Option<NaiveDate>) {
        self.start = start;
        self.end = None;
    }

    /// Accept an end date unless it precedes the start date
    ///
    /// A rejected end date leaves the range untouched.
    pub fn set_end(&mut self, end: Option<NaiveDate>) -> Result<(), RangeWarning> {
        if let (Some(start), Some(end)) = (self.start, end) {
            if end < start {
                return Err(RangeWarning::EndBeforeStart);
            }
        }
        self.end = end;
        Ok(())
    }

    /// Distance between the two dates in whole days
    pub fn span_days(&self) -> Option<i64> {
        self.bounds().map(|(start, end)| span_days(start, end))
    }
}

/// Absolute distance between two calendar dates in days
///
/// Calendar dates carry no time of day, so the ceiling of the fractional
/// distance is the whole-day distance itself.
pub fn span_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_span_days() {
        assert_eq!(span_days(date(2025, 1, 1), date(2025, 1, 8)), 7);
        assert_eq!(span_days(date(2025, 1, 8), date(2025, 1, 1)), 7);
        assert_eq!(span_days(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(span_days(date(2025, 1, 1), date(2025, 1, 1)), 0);
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut range = DateRange::default();
        range.set_start(Some(date(2025, 3, 10)));
        range.set_end(Some(date(2025, 3, 20))).unwrap();

        let err = range.set_end(Some(date(2025, 3, 1))).unwrap_err();
        assert_eq!(err, RangeWarning::EndBeforeStart);
        assert_eq!(range.end(), Some(date(2025, 3, 20)));
    }

    #[test]
    fn test_same_day_end_accepted() {
        let mut range = DateRange::default();
        range.set_start(Some(date(2025, 3, 10)));
        assert!(range.set_end(Some(date(2025, 3, 10))).is_ok());
        assert_eq!(range.span_days(), Some(0));
    }

    #[test]
    fn test_changing_start_clears_end() {
        let mut range = DateRange::default();
        range.set_start(Some(date(2025, 3, 10)));
        range.set_end(Some(date(2025, 3, 20))).unwrap();
        assert!(range.is_complete());

        range.set_start(Some(date(2025, 3, 11)));
        assert_eq!(range.end(), None);
        assert!(!range.is_complete());
    }

    #[test]
    fn test_end_without_start_is_kept() {
        let mut range = DateRange::default();
        range.set_end(Some(date(2025, 3, 20))).unwrap();
        assert_eq!(range.end(), Some(date(2025, 3, 20)));
        assert_eq!(range.span_days(), None);
    }
}
