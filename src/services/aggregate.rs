//! Budget aggregation
//!
//! Category totals, the remaining balance and the chart series derived from
//! a budget sheet. Everything here is recomputed from the sheet on demand.

use serde::Serialize;

use crate::models::{BudgetCategory, BudgetSheet, Money};

/// Planned and actual sums for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    pub category: BudgetCategory,
    pub planned: Money,
    pub actual: Money,
}

impl CategoryTotals {
    pub fn empty(category: BudgetCategory) -> Self {
        Self {
            category,
            planned: Money::zero(),
            actual: Money::zero(),
        }
    }

    /// Actual minus planned
    pub fn variance(&self) -> Money {
        self.actual.saturating_sub(self.planned)
    }
}

/// One slice of the expense share breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareSlice {
    pub label: &'static str,
    pub amount: Money,
}

/// Totals for every category plus the remaining balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub totals: [CategoryTotals; 4],
    /// Actual income minus actual bills, debt and savings
    pub remaining: Money,
}

impl BudgetSummary {
    pub fn from_sheet(sheet: &BudgetSheet) -> Self {
        let totals = BudgetCategory::ALL.map(|category| {
            sheet
                .rows(category)
                .iter()
                .fold(CategoryTotals::empty(category), |mut acc, item| {
                    acc.planned = acc.planned.saturating_add(item.planned);
                    acc.actual = acc.actual.saturating_add(item.actual);
                    acc
                })
        });

        let income = totals[0].actual;
        let spent: Money = totals[1..].iter().map(|t| t.actual).sum();

        Self {
            totals,
            remaining: income.saturating_sub(spent),
        }
    }

    pub fn totals_for(&self, category: BudgetCategory) -> CategoryTotals {
        self.totals
            .iter()
            .copied()
            .find(|t| t.category == category)
            .unwrap_or_else(|| CategoryTotals::empty(category))
    }

    /// Sum of actual bills, debt and savings
    pub fn total_outflow(&self) -> Money {
        BudgetCategory::EXPENSES
            .iter()
            .map(|c| self.totals_for(*c).actual)
            .sum()
    }

    /// Planned vs actual per category, labelled Inc/Bil/Deb/Sav
    pub fn bar_series(&self) -> Vec<(&'static str, Money, Money)> {
        self.totals
            .iter()
            .map(|t| (t.category.short_label(), t.planned, t.actual))
            .collect()
    }

    /// Actual expenses plus the non-negative remainder
    pub fn share_series(&self) -> Vec<ShareSlice> {
        let mut slices: Vec<ShareSlice> = BudgetCategory::EXPENSES
            .iter()
            .map(|c| ShareSlice {
                label: c.share_label(),
                amount: self.totals_for(*c).actual,
            })
            .collect();
        slices.push(ShareSlice {
            label: "Rem",
            amount: self.remaining.non_negative(),
        });
        slices
    }

    /// Share of each slice in percent, zero everywhere when there is nothing to share
    pub fn share_percentages(&self) -> Vec<(&'static str, f64)> {
        let slices = self.share_series();
        let whole = slices
            .iter()
            .fold(0i64, |acc, s| acc.saturating_add(s.amount.cents()));
        slices
            .into_iter()
            .map(|s| {
                let pct = if whole > 0 {
                    s.amount.cents() as f64 * 100.0 / whole as f64
                } else {
                    0.0
                };
                (s.label, pct)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::money::MAX_INPUT_UNITS;
    use crate::models::{AmountField, LineItem};

    fn fill(sheet: &mut BudgetSheet, category: BudgetCategory, rows: &[(&str, &str, &str)]) {
        for (i, (desc, planned, actual)) in rows.iter().enumerate() {
            if i > 0 {
                sheet.add_row(category);
            }
            sheet.set_description(category, i, *desc).unwrap();
            sheet.set_amount(category, i, AmountField::Planned, planned).unwrap();
            sheet.set_amount(category, i, AmountField::Actual, actual).unwrap();
        }
    }

    #[test]
    fn test_empty_sheet_totals() {
        let summary = BudgetSummary::from_sheet(&BudgetSheet::default());
        assert!(summary.totals.iter().all(|t| t.planned.is_zero() && t.actual.is_zero()));
        assert_eq!(summary.remaining, Money::zero());
    }

    #[test]
    fn test_sums_and_remaining() {
        let mut sheet = BudgetSheet::default();
        fill(&mut sheet, BudgetCategory::Income, &[("Salary", "3000", "3100.50"), ("Side", "200", "")]);
        fill(&mut sheet, BudgetCategory::Bills, &[("Rent", "1200", "1200"), ("Power", "80", "95.25")]);
        fill(&mut sheet, BudgetCategory::Debt, &[("Card", "300", "300")]);
        fill(&mut sheet, BudgetCategory::Savings, &[("Fund", "500", "400")]);

        let summary = BudgetSummary::from_sheet(&sheet);
        let income = summary.totals_for(BudgetCategory::Income);
        assert_eq!(income.planned, Money::from_units(3200));
        assert_eq!(income.actual, Money::from_cents(310050));

        let bills = summary.totals_for(BudgetCategory::Bills);
        assert_eq!(bills.actual, Money::from_cents(129525));

        // 3100.50 - (1295.25 + 300 + 400)
        assert_eq!(summary.remaining, Money::from_cents(110525));
        assert_eq!(summary.total_outflow(), Money::from_cents(199525));
    }

    #[test]
    fn test_remaining_may_be_negative() {
        let mut sheet = BudgetSheet::default();
        fill(&mut sheet, BudgetCategory::Income, &[("Salary", "", "100")]);
        fill(&mut sheet, BudgetCategory::Bills, &[("Rent", "", "250")]);

        let summary = BudgetSummary::from_sheet(&sheet);
        assert_eq!(summary.remaining, Money::from_units(-150));

        let shares = summary.share_series();
        let rem = shares.iter().find(|s| s.label == "Rem").unwrap();
        assert_eq!(rem.amount, Money::zero());
    }

    #[test]
    fn test_rejected_edits_do_not_change_totals() {
        let mut sheet = BudgetSheet::default();
        fill(&mut sheet, BudgetCategory::Debt, &[("Loan", "50", "40")]);
        let before = BudgetSummary::from_sheet(&sheet);

        assert!(sheet
            .set_amount(BudgetCategory::Debt, 0, AmountField::Actual, "forty")
            .is_err());
        assert_eq!(BudgetSummary::from_sheet(&sheet), before);
    }

    #[test]
    fn test_bar_series_labels() {
        let summary = BudgetSummary::from_sheet(&BudgetSheet::default());
        let labels: Vec<_> = summary.bar_series().iter().map(|(l, _, _)| *l).collect();
        assert_eq!(labels, vec!["Inc", "Bil", "Deb", "Sav"]);
    }

    #[test]
    fn test_share_percentages() {
        let mut sheet = BudgetSheet::default();
        fill(&mut sheet, BudgetCategory::Income, &[("Salary", "", "400")]);
        fill(&mut sheet, BudgetCategory::Bills, &[("Rent", "", "100")]);
        fill(&mut sheet, BudgetCategory::Savings, &[("Fund", "", "100")]);

        let pct = BudgetSummary::from_sheet(&sheet).share_percentages();
        assert_eq!(pct[0], ("Bills", 25.0));
        assert_eq!(pct[1], ("Debt", 0.0));
        assert_eq!(pct[2], ("Sav", 25.0));
        assert_eq!(pct[3], ("Rem", 50.0));

        let empty = BudgetSummary::from_sheet(&BudgetSheet::default()).share_percentages();
        assert!(empty.iter().all(|(_, p)| *p == 0.0));
    }

    #[test]
    fn test_largest_accepted_amounts_sum_exactly() {
        let max = MAX_INPUT_UNITS.to_string();
        let max = max.as_str();
        let mut sheet = BudgetSheet::default();
        fill(
            &mut sheet,
            BudgetCategory::Income,
            &[("Salary", max, max), ("Bonus", max, max)],
        );
        fill(&mut sheet, BudgetCategory::Bills, &[("Rent", "", max)]);

        assert!(sheet
            .set_amount(BudgetCategory::Income, 1, AmountField::Planned, "50000000000000000")
            .is_err());

        let summary = BudgetSummary::from_sheet(&sheet);
        let income = summary.totals_for(BudgetCategory::Income);
        assert_eq!(income.planned, Money::from_units(2 * MAX_INPUT_UNITS));
        assert_eq!(income.actual, Money::from_units(2 * MAX_INPUT_UNITS));
        assert_eq!(summary.remaining, Money::from_units(MAX_INPUT_UNITS));
    }

    #[test]
    fn test_stored_amounts_beyond_input_limit_saturate() {
        let mut sheet = BudgetSheet::default();
        for _ in 0..2 {
            sheet.push_row(
                BudgetCategory::Income,
                LineItem::new("Loaded", Money::from_cents(i64::MAX), Money::zero()),
            );
        }

        let summary = BudgetSummary::from_sheet(&sheet);
        assert_eq!(
            summary.totals_for(BudgetCategory::Income).planned,
            Money::from_cents(i64::MAX)
        );
    }

    #[test]
    fn test_totals_track_a_sequence_of_edits() {
        let category = BudgetCategory::Bills;
        let mut sheet = BudgetSheet::default();
        // (row, raw planned input); a None expectation means the edit is refused
        let edits: [(usize, &str, Option<i64>); 8] = [
            (0, "100", Some(10000)),
            (0, "12a", None),
            (1, "25.5", Some(2550)),
            (1, "-4", None),
            (2, "", Some(0)),
            (2, "7.259", Some(725)),
            (0, "80.05", Some(8005)),
            (1, "1.2.3", None),
        ];

        let mut expected = [0i64; 3];
        for (row, raw, accepted) in edits {
            while sheet.rows(category).len() <= row {
                sheet.add_row(category);
            }
            let result = sheet.set_amount(category, row, AmountField::Planned, raw);
            match accepted {
                Some(cents) => {
                    assert!(result.is_ok(), "{:?} should be accepted", raw);
                    expected[row] = cents;
                }
                None => assert!(result.is_err(), "{:?} should be refused", raw),
            }

            let summary = BudgetSummary::from_sheet(&sheet);
            assert_eq!(
                summary.totals_for(category).planned,
                Money::from_cents(expected.iter().sum())
            );
        }

        // Dropping the middle row removes its amount from the total
        sheet.remove_row(category, 1).unwrap();
        let summary = BudgetSummary::from_sheet(&sheet);
        assert_eq!(
            summary.totals_for(category).planned,
            Money::from_cents(expected[0] + expected[2])
        );

        // Removing down to the sole row and then clearing it leaves zero
        sheet.remove_row(category, 1).unwrap();
        sheet.remove_row(category, 0).unwrap();
        let summary = BudgetSummary::from_sheet(&sheet);
        assert_eq!(summary.totals_for(category).planned, Money::zero());
        assert_eq!(sheet.rows(category).len(), 1);
    }
}
