//! Household mode and the planning scenario shown for each mode

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who the budget is being planned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseholdMode {
    #[default]
    Single,
    Couple,
    Family,
}

/// One tip card beside the configuration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioTip {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Title, subtitle and tips for a household mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tips: [ScenarioTip; 4],
}

const fn tip(heading: &'static str, body: &'static str) -> ScenarioTip {
    ScenarioTip { heading, body }
}

const SINGLE: Scenario = Scenario {
    title: "Why Budget Solo?",
    subtitle: "Master your wealth with autonomy.",
    tips: [
        tip("Impulse Leaks", "Identify 'One-click' habits."),
        tip("Privacy First", "Secure private cash flow."),
        tip("Solo Safety Net", "Build an Emergency Fund."),
        tip("Growth Tracking", "Patterns for faster growth."),
    ],
};

const COUPLE: Scenario = Scenario {
    title: "Budgeting for Two",
    subtitle: "Transparency in relationships.",
    tips: [
        tip("Harmony", "Turn money fights into talks."),
        tip("Trust", "Prevent broken trust."),
        tip("Milestones", "Collaborate on purchases."),
        tip("Fair Split", "Track shared balances."),
    ],
};

const FAMILY: Scenario = Scenario {
    title: "Household Sync",
    subtitle: "Always on the same page.",
    tips: [
        tip("Total Sync", "Avoid surprise expenses."),
        tip("Teach Values", "Build financial literacy."),
        tip("Rising Costs", "Stay ahead of bills."),
        tip("Safety", "Secure family's future."),
    ],
};

impl HouseholdMode {
    pub const ALL: [HouseholdMode; 3] = [Self::Single, Self::Couple, Self::Family];

    pub fn scenario(&self) -> &'static Scenario {
        match self {
            Self::Single => &SINGLE,
            Self::Couple => &COUPLE,
            Self::Family => &FAMILY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Couple => "Couple",
            Self::Family => "Family",
        }
    }

    /// The next mode, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Single => Self::Couple,
            Self::Couple => Self::Family,
            Self::Family => Self::Single,
        }
    }

    /// The previous mode, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Self::Single => Self::Family,
            Self::Couple => Self::Single,
            Self::Family => Self::Couple,
        }
    }
}

impl fmt::Display for HouseholdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for HouseholdMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "solo" => Ok(Self::Single),
            "couple" => Ok(Self::Couple),
            "family" => Ok(Self::Family),
            other => Err(format!("Unknown household mode: {}", other)),
        }
    }
}
