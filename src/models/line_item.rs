//! A single row of the budget sheet

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Which of the two amount columns of a row is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountField {
    Planned,
    Actual,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planned => write!(f, "Plan"),
            Self::Actual => write!(f, "Act"),
        }
    }
}

/// Description with a planned and an actual amount, both non-negative
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub planned: Money,
    #[serde(default)]
    pub actual: Money,
}

impl LineItem {
    pub fn new(description: impl Into<String>, planned: Money, actual: Money) -> Self {
        Self {
            description: description.into(),
            planned,
            actual,
        }
    }

    pub fn amount(&self, field: AmountField) -> Money {
        match field {
            AmountField::Planned => self.planned,
            AmountField::Actual => self.actual,
        }
    }

    pub(crate) fn amount_mut(&mut self, field: AmountField) -> &mut Money {
        match field {
            AmountField::Planned => &mut self.planned,
            AmountField::Actual => &mut self.actual,
        }
    }

    /// A described row with at least one positive amount
    pub fn is_meaningful(&self) -> bool {
        !self.description.trim().is_empty()
            && (self.planned.is_positive() || self.actual.is_positive())
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meaningful_needs_description_and_amount() {
        assert!(!LineItem::default().is_meaningful());
        assert!(!LineItem::new("Rent", Money::zero(), Money::zero()).is_meaningful());
        assert!(!LineItem::new("   ", Money::from_units(5), Money::zero()).is_meaningful());
        assert!(!LineItem::new("", Money::from_units(5), Money::zero()).is_meaningful());
        assert!(LineItem::new("Rent", Money::zero(), Money::from_units(5)).is_meaningful());
    }

    #[test]
    fn test_amount_accessor() {
        let item = LineItem::new("Salary", Money::from_units(100), Money::from_units(90));
        assert_eq!(item.amount(AmountField::Planned), Money::from_units(100));
        assert_eq!(item.amount(AmountField::Actual), Money::from_units(90));
    }
}
