//! The four fixed budget categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A budget category; the set is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Income,
    Bills,
    Debt,
    Savings,
}

impl BudgetCategory {
    /// All categories in sheet order
    pub const ALL: [BudgetCategory; 4] = [Self::Income, Self::Bills, Self::Debt, Self::Savings];

    /// Categories whose actual amounts are subtracted from income
    pub const EXPENSES: [BudgetCategory; 3] = [Self::Bills, Self::Debt, Self::Savings];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Bills => "Bills",
            Self::Debt => "Debt",
            Self::Savings => "Savings",
        }
    }

    /// Three-letter key used on chart axes
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Income => "Inc",
            Self::Bills => "Bil",
            Self::Debt => "Deb",
            Self::Savings => "Sav",
        }
    }

    /// Label used in the expense share breakdown
    pub fn share_label(&self) -> &'static str {
        match self {
            Self::Income => "Inc",
            Self::Bills => "Bills",
            Self::Debt => "Debt",
            Self::Savings => "Sav",
        }
    }

    pub fn is_expense(&self) -> bool {
        !matches!(self, Self::Income)
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Income => Self::Bills,
            Self::Bills => Self::Debt,
            Self::Debt => Self::Savings,
            Self::Savings => Self::Income,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Income => Self::Savings,
            Self::Bills => Self::Income,
            Self::Debt => Self::Bills,
            Self::Savings => Self::Debt,
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BudgetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "inc" => Ok(Self::Income),
            "bills" | "bil" | "bill" => Ok(Self::Bills),
            "debt" | "deb" => Ok(Self::Debt),
            "savings" | "sav" | "saving" => Ok(Self::Savings),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let short: Vec<_> = BudgetCategory::ALL.iter().map(|c| c.short_label()).collect();
        assert_eq!(short, vec!["Inc", "Bil", "Deb", "Sav"]);
        assert_eq!(BudgetCategory::Bills.share_label(), "Bills");
    }

    #[test]
    fn test_expenses() {
        assert!(!BudgetCategory::Income.is_expense());
        assert!(BudgetCategory::EXPENSES.iter().all(|c| c.is_expense()));
    }

    #[test]
    fn test_parse() {
        assert_eq!("Sav".parse::<BudgetCategory>().unwrap(), BudgetCategory::Savings);
        assert!("groceries".parse::<BudgetCategory>().is_err());
    }
}
