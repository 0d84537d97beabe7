//! Money type for representing planned and actual amounts
//!
//! Amounts are stored in minor units (cents) as i64 so that sums over many
//! rows stay exact. Line-item amounts are never negative; only derived
//! figures such as the remaining balance can go below zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest whole-unit amount a line item accepts
pub const MAX_INPUT_UNITS: i64 = 1_000_000_000_000;

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use go_budgeting::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional part in cents (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamp negative amounts to zero
    pub fn non_negative(self) -> Self {
        Self(self.0.max(0))
    }

    /// Check a raw field value against the unsigned decimal pattern
    ///
    /// Accepts digits with at most one decimal point, including the empty
    /// string and partial entries such as `"12."` or `"."`.
    pub fn is_amount_input(s: &str) -> bool {
        let mut seen_point = false;
        for c in s.chars() {
            match c {
                '0'..='9' => {}
                '.' if !seen_point => seen_point = true,
                _ => return false,
            }
        }
        true
    }

    /// Parse a raw amount field
    ///
    /// Empty input and a lone decimal point count as zero. Digits past the
    /// second decimal place are truncated. Anything above
    /// [`MAX_INPUT_UNITS`] is refused as too large.
    ///
    /// # Examples
    /// ```
    /// use go_budgeting::models::Money;
    /// assert_eq!(Money::parse_input("12.5").unwrap().cents(), 1250);
    /// assert_eq!(Money::parse_input("").unwrap().cents(), 0);
    /// assert!(Money::parse_input("-3").is_err());
    /// assert!(Money::parse_input("50000000000000000").is_err());
    /// ```
    pub fn parse_input(s: &str) -> Result<Self, MoneyParseError> {
        if !Self::is_amount_input(s) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::TooLarge(s.to_string()))?
        };
        if units > MAX_INPUT_UNITS {
            return Err(MoneyParseError::TooLarge(s.to_string()));
        }

        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().unwrap_or(0) * 10,
            _ => fraction[..2].parse().unwrap_or(0),
        };

        units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .map(Self)
            .ok_or_else(|| MoneyParseError::TooLarge(s.to_string()))
    }

    /// Render the amount as it would be typed back into an input field
    ///
    /// Zero renders as the empty string, and trailing zero cents are dropped.
    pub fn to_input_string(&self) -> String {
        if self.is_zero() {
            String::new()
        } else if self.cents_part() == 0 {
            self.units().to_string()
        } else if self.cents_part() % 10 == 0 {
            format!("{}.{}", self.units(), self.cents_part() / 10)
        } else {
            format!("{}.{:02}", self.units(), self.cents_part())
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }

    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Value in whole units for charting
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Not an unsigned amount: {}", s),
            MoneyParseError::TooLarge(s) => write!(f, "Amount too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1050).format_with_symbol("₹"), "₹10.50");
        assert_eq!(Money::from_cents(-250).format_with_symbol("$"), "-$2.50");
    }

    #[test]
    fn test_amount_input_pattern() {
        for ok in ["", "0", "12", "12.", ".5", ".", "007.25", "1.234"] {
            assert!(Money::is_amount_input(ok), "expected {:?} to be accepted", ok);
        }
        for bad in ["-1", "1.2.3", "abc", "1,000", " 1", "1e5", "+2", ".."] {
            assert!(!Money::is_amount_input(bad), "expected {:?} to be rejected", bad);
        }
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(Money::parse_input("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse_input("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse_input("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse_input("10.").unwrap().cents(), 1000);
        assert_eq!(Money::parse_input(".05").unwrap().cents(), 5);
        assert_eq!(Money::parse_input("1.239").unwrap().cents(), 123);
        assert_eq!(Money::parse_input("").unwrap(), Money::zero());
        assert_eq!(Money::parse_input(".").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_input_rejects() {
        assert!(matches!(
            Money::parse_input("-5"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse_input("99999999999999999999"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert!(matches!(
            Money::parse_input("1000000000001"),
            Err(MoneyParseError::TooLarge(_))
        ));
        assert_eq!(
            Money::parse_input("1000000000000.99").unwrap(),
            Money::from_units(MAX_INPUT_UNITS) + Money::from_cents(99)
        );
    }

    #[test]
    fn test_sum_saturates() {
        let total: Money = [Money::from_cents(i64::MAX), Money::from_cents(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(i64::MAX));
        assert_eq!(
            Money::from_cents(i64::MIN).saturating_sub(Money::from_cents(1)),
            Money::from_cents(i64::MIN)
        );
    }

    #[test]
    fn test_to_input_string() {
        assert_eq!(Money::zero().to_input_string(), "");
        assert_eq!(Money::from_cents(1200).to_input_string(), "12");
        assert_eq!(Money::from_cents(1250).to_input_string(), "12.5");
        assert_eq!(Money::from_cents(1205).to_input_string(), "12.05");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(1500);
        assert_eq!((a - b).cents(), -500);
        assert_eq!((a - b).non_negative(), Money::zero());

        let total: Money = vec![a, b, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), 2501);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
        assert_eq!(serde_json::from_str::<Money>(&json).unwrap(), m);
    }
}
