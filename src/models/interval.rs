//! Tracking intervals and their allowed date spans
//!
//! Each interval kind accepts a fixed band of day spans. The bands are kept
//! in one table so the classification and the messages cannot drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The budgeting cadence the user plans against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalKind {
    Weekly,
    Monthly,
    #[serde(rename = "6months")]
    SixMonths,
    Annual,
}

/// Inclusive band of allowed spans, in days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanBounds {
    pub min_days: i64,
    /// `None` means unbounded above
    pub max_days: Option<i64>,
}

impl SpanBounds {
    pub fn contains(&self, days: i64) -> bool {
        days >= self.min_days && self.max_days.map_or(true, |max| days <= max)
    }
}

impl IntervalKind {
    /// All interval kinds in display order
    pub const ALL: [IntervalKind; 4] = [
        IntervalKind::Weekly,
        IntervalKind::Monthly,
        IntervalKind::SixMonths,
        IntervalKind::Annual,
    ];

    /// Allowed span for this interval
    pub const fn bounds(&self) -> SpanBounds {
        match self {
            Self::Weekly => SpanBounds {
                min_days: 0,
                max_days: Some(7),
            },
            Self::Monthly => SpanBounds {
                min_days: 8,
                max_days: Some(31),
            },
            Self::SixMonths => SpanBounds {
                min_days: 32,
                max_days: Some(180),
            },
            Self::Annual => SpanBounds {
                min_days: 181,
                max_days: None,
            },
        }
    }

    /// Message shown when a date span falls outside [`Self::bounds`]
    pub const fn violation_message(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly must be ≤ 7 days.",
            Self::Monthly => "Monthly must be 8-31 days.",
            Self::SixMonths => "6 Months must be 32-180 days.",
            Self::Annual => "Annual must be > 180 days.",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::SixMonths => "6 Months",
            Self::Annual => "Annual",
        }
    }

    /// Stable identifier used on the command line and in saved files
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::SixMonths => "6months",
            Self::Annual => "annual",
        }
    }
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for IntervalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "6months" | "six-month" | "six-months" | "6m" | "half-year" => Ok(Self::SixMonths),
            "annual" | "yearly" | "year" | "y" => Ok(Self::Annual),
            other => Err(format!(
                "Unknown interval '{}'. Use weekly, monthly, 6months or annual",
                other
            )),
        }
    }
}

/// A problem with the chosen date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeWarning {
    /// The span does not fit the interval's band
    SpanOutOfBounds(IntervalKind),
    /// The end date precedes the start date
    EndBeforeStart,
}

impl RangeWarning {
    pub fn message(&self) -> &'static str {
        match self {
            Self::SpanOutOfBounds(interval) => interval.violation_message(),
            Self::EndBeforeStart => "Select the date from starting date.",
        }
    }
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RangeWarning {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_edges() {
        assert!(IntervalKind::Weekly.bounds().contains(0));
        assert!(IntervalKind::Weekly.bounds().contains(7));
        assert!(!IntervalKind::Weekly.bounds().contains(8));

        assert!(!IntervalKind::Monthly.bounds().contains(7));
        assert!(IntervalKind::Monthly.bounds().contains(8));
        assert!(IntervalKind::Monthly.bounds().contains(31));
        assert!(!IntervalKind::Monthly.bounds().contains(32));

        assert!(!IntervalKind::SixMonths.bounds().contains(31));
        assert!(IntervalKind::SixMonths.bounds().contains(32));
        assert!(IntervalKind::SixMonths.bounds().contains(180));
        assert!(!IntervalKind::SixMonths.bounds().contains(181));

        assert!(!IntervalKind::Annual.bounds().contains(180));
        assert!(IntervalKind::Annual.bounds().contains(181));
        assert!(IntervalKind::Annual.bounds().contains(10_000));
    }

    #[test]
    fn test_bands_do_not_overlap() {
        for days in 0..400 {
            let matching = IntervalKind::ALL
                .iter()
                .filter(|kind| kind.bounds().contains(days))
                .count();
            assert_eq!(matching, 1, "span {} should fit exactly one interval", days);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("weekly".parse::<IntervalKind>().unwrap(), IntervalKind::Weekly);
        assert_eq!("6months".parse::<IntervalKind>().unwrap(), IntervalKind::SixMonths);
        assert_eq!("Six-Month".parse::<IntervalKind>().unwrap(), IntervalKind::SixMonths);
        assert_eq!("ANNUAL".parse::<IntervalKind>().unwrap(), IntervalKind::Annual);
        assert!("fortnightly".parse::<IntervalKind>().is_err());
    }

    #[test]
    fn test_serde_keys() {
        assert_eq!(
            serde_json::to_string(&IntervalKind::SixMonths).unwrap(),
            "\"6months\""
        );
        assert_eq!(
            serde_json::from_str::<IntervalKind>("\"monthly\"").unwrap(),
            IntervalKind::Monthly
        );
    }

    #[test]
    fn test_warning_messages() {
        assert_eq!(
            RangeWarning::SpanOutOfBounds(IntervalKind::SixMonths).message(),
            "6 Months must be 32-180 days."
        );
        assert_eq!(
            RangeWarning::EndBeforeStart.to_string(),
            "Select the date from starting date."
        );
    }
}
