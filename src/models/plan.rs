//! Planning configuration chosen on the configuration step

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date_range::DateRange;
use super::household::HouseholdMode;
use super::interval::{IntervalKind, RangeWarning};
use super::region::{Currency, GeoSelection, Region};

/// Interval, dates, region/currency and household mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanningConfig {
    #[serde(default)]
    pub interval: Option<IntervalKind>,
    #[serde(default)]
    pub dates: DateRange,
    #[serde(default)]
    pub geo: GeoSelection,
    #[serde(default)]
    pub household: HouseholdMode,
}

impl PlanningConfig {
    pub fn with_household(household: HouseholdMode) -> Self {
        Self {
            household,
            ..Self::default()
        }
    }

    pub fn set_start(&mut self, start: Option<NaiveDate>) {
        self.dates.set_start(start);
    }

    pub fn set_end(&mut self, end: Option<NaiveDate>) -> Result<(), RangeWarning> {
        self.dates.set_end(end)
    }

    pub fn select_region(&mut self, region: Option<Region>) {
        self.geo.select_region(region);
    }

    pub fn select_currency(&mut self, currency: Option<Currency>) {
        self.geo.select_currency(currency);
    }

    /// Currency symbol for formatting, empty before a region is chosen
    pub fn currency_symbol(&self) -> &'static str {
        self.geo.currency().map_or("", |c| c.symbol())
    }

    /// Interval label, or a neutral fallback before one is chosen
    pub fn interval_label(&self) -> &'static str {
        self.interval.map_or("Budget", |i| i.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let config = PlanningConfig::default();
        assert_eq!(config.interval, None);
        assert!(!config.dates.is_complete());
        assert!(config.geo.is_empty());
        assert_eq!(config.household, HouseholdMode::Single);
        assert_eq!(config.currency_symbol(), "");
    }

    #[test]
    fn test_region_sets_symbol() {
        let mut config = PlanningConfig::default();
        config.select_region(Some(Region::Uk));
        assert_eq!(config.currency_symbol(), "£");
        config.select_currency(Some(Currency::Inr));
        assert_eq!(config.geo.region(), Some(Region::India));
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut config = PlanningConfig::with_household(HouseholdMode::Couple);
        config.interval = Some(IntervalKind::Monthly);
        config.set_start(NaiveDate::from_ymd_opt(2025, 1, 1));
        config.set_end(NaiveDate::from_ymd_opt(2025, 1, 31)).unwrap();
        config.select_region(Some(Region::Canada));

        let json = serde_json::to_string(&config).unwrap();
        let back: PlanningConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
