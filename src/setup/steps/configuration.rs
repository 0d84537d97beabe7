//! Configuration step
//!
//! Holds the planning configuration being edited together with the
//! validation banner. Every edit to the interval or the dates re-runs the
//! span check; the banner text follows the result.

use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::models::{
    Currency, HouseholdMode, IntervalKind, PlanningConfig, RangeWarning, Region,
};
use crate::services::validation;
use crate::services::TransientAlert;

#[derive(Debug, Clone)]
pub struct ConfigurationForm {
    config: PlanningConfig,
    alert: TransientAlert,
}

impl ConfigurationForm {
    /// Start editing from a previously committed configuration
    pub fn new(saved: PlanningConfig, dismiss_after: Duration) -> Self {
        Self {
            config: saved,
            alert: TransientAlert::new(dismiss_after),
        }
    }

    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }

    pub fn into_config(self) -> PlanningConfig {
        self.config
    }

    pub fn set_interval(&mut self, interval: Option<IntervalKind>, now: Instant) {
        self.config.interval = interval;
        self.revalidate(now);
    }

    /// Set the start date; the end date is cleared along with the banner
    pub fn set_start(&mut self, start: Option<NaiveDate>, now: Instant) {
        self.config.set_start(start);
        self.alert.clear();
        self.revalidate(now);
    }

    /// Set the end date, refusing one that precedes the start date
    pub fn set_end(&mut self, end: Option<NaiveDate>, now: Instant) -> Result<(), RangeWarning> {
        if let Err(warning) = self.config.set_end(end) {
            self.alert.show(warning.message(), now);
            return Err(warning);
        }
        self.revalidate(now);
        Ok(())
    }

    pub fn select_region(&mut self, region: Option<Region>) {
        self.config.select_region(region);
    }

    pub fn select_currency(&mut self, currency: Option<Currency>) {
        self.config.select_currency(currency);
    }

    pub fn set_household(&mut self, household: HouseholdMode) {
        self.config.household = household;
    }

    fn revalidate(&mut self, now: Instant) {
        if let Some(warning) = validation::span_warning(&self.config) {
            self.alert.show(warning.message(), now);
        } else if self.config.interval.is_some() && self.config.dates.is_complete() {
            self.alert.clear();
        }
    }

    /// Let a due banner dismissal fire; true when the banner was hidden
    pub fn tick(&mut self, now: Instant) -> bool {
        self.alert.tick(now)
    }

    /// Text of the banner, while it is showing
    pub fn banner(&self) -> Option<&str> {
        self.alert.message()
    }

    pub fn alert(&self) -> &TransientAlert {
        &self.alert
    }

    /// Current span violation, whether or not the banner is still up
    pub fn span_warning(&self) -> Option<RangeWarning> {
        validation::span_warning(&self.config)
    }

    pub fn is_ready(&self) -> bool {
        validation::is_ready(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn form() -> ConfigurationForm {
        ConfigurationForm::new(PlanningConfig::default(), Duration::from_secs(5))
    }

    #[test]
    fn test_span_violation_shows_banner() {
        let now = Instant::now();
        let mut form = form();
        form.set_interval(Some(IntervalKind::Weekly), now);
        form.set_start(date(2025, 1, 1), now);
        form.set_end(date(2025, 1, 20), now).unwrap();

        assert_eq!(form.banner(), Some("Weekly must be ≤ 7 days."));
        assert!(!form.is_ready());

        form.set_interval(Some(IntervalKind::Monthly), now);
        assert_eq!(form.banner(), None);
    }

    #[test]
    fn test_end_before_start_rejected_with_message() {
        let now = Instant::now();
        let mut form = form();
        form.set_start(date(2025, 2, 10), now);
        form.set_end(date(2025, 2, 20), now).unwrap();

        let err = form.set_end(date(2025, 2, 1), now).unwrap_err();
        assert_eq!(err, RangeWarning::EndBeforeStart);
        assert_eq!(form.banner(), Some("Select the date from starting date."));
        assert_eq!(form.config().dates.end(), date(2025, 2, 20));
    }

    #[test]
    fn test_start_change_clears_end_and_banner() {
        let now = Instant::now();
        let mut form = form();
        form.set_interval(Some(IntervalKind::Weekly), now);
        form.set_start(date(2025, 1, 1), now);
        form.set_end(date(2025, 3, 1), now).unwrap();
        assert!(form.banner().is_some());

        form.set_start(date(2025, 1, 2), now);
        assert_eq!(form.config().dates.end(), None);
        assert_eq!(form.banner(), None);
    }

    #[test]
    fn test_dismissed_banner_does_not_unlock_continue() {
        let now = Instant::now();
        let mut form = form();
        form.select_region(Some(Region::India));
        form.set_interval(Some(IntervalKind::Annual), now);
        form.set_start(date(2025, 1, 1), now);
        form.set_end(date(2025, 2, 1), now).unwrap();

        assert!(form.tick(now + Duration::from_secs(5)));
        assert_eq!(form.banner(), None);
        assert!(form.span_warning().is_some());
        assert!(!form.is_ready());
    }

    #[test]
    fn test_ready_configuration() {
        let now = Instant::now();
        let mut form = form();
        form.set_interval(Some(IntervalKind::SixMonths), now);
        form.set_start(date(2025, 1, 1), now);
        form.set_end(date(2025, 4, 1), now).unwrap();
        form.select_currency(Some(Currency::Eur));
        form.set_household(HouseholdMode::Couple);

        assert!(form.is_ready());
        let config = form.into_config();
        assert_eq!(config.geo.region(), Some(Region::Eurozone));
        assert_eq!(config.household, HouseholdMode::Couple);
    }
}
