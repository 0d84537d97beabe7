//! The budget sheet: four fixed categories of line items
//!
//! Every category always holds at least one row. Removing the last row of a
//! category blanks it instead, and a sheet read from disk with an empty
//! category gets a blank row back.

use serde::{Deserialize, Serialize};

use super::category::BudgetCategory;
use super::line_item::{AmountField, LineItem};
use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// Line items grouped by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SheetRecord")]
pub struct BudgetSheet {
    income: Vec<LineItem>,
    bills: Vec<LineItem>,
    debt: Vec<LineItem>,
    savings: Vec<LineItem>,
}

/// On-disk shape of a sheet, before the non-empty rule is applied
#[derive(Deserialize)]
struct SheetRecord {
    #[serde(default)]
    income: Vec<LineItem>,
    #[serde(default)]
    bills: Vec<LineItem>,
    #[serde(default)]
    debt: Vec<LineItem>,
    #[serde(default)]
    savings: Vec<LineItem>,
}

fn non_empty(mut rows: Vec<LineItem>) -> Vec<LineItem> {
    if rows.is_empty() {
        rows.push(LineItem::default());
    }
    rows
}

impl From<SheetRecord> for BudgetSheet {
    fn from(record: SheetRecord) -> Self {
        Self {
            income: non_empty(record.income),
            bills: non_empty(record.bills),
            debt: non_empty(record.debt),
            savings: non_empty(record.savings),
        }
    }
}

impl Default for BudgetSheet {
    fn default() -> Self {
        Self {
            income: vec![LineItem::default()],
            bills: vec![LineItem::default()],
            debt: vec![LineItem::default()],
            savings: vec![LineItem::default()],
        }
    }
}

impl BudgetSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of one category, never empty
    pub fn rows(&self, category: BudgetCategory) -> &[LineItem] {
        match category {
            BudgetCategory::Income => &self.income,
            BudgetCategory::Bills => &self.bills,
            BudgetCategory::Debt => &self.debt,
            BudgetCategory::Savings => &self.savings,
        }
    }

    fn rows_mut(&mut self, category: BudgetCategory) -> &mut Vec<LineItem> {
        match category {
            BudgetCategory::Income => &mut self.income,
            BudgetCategory::Bills => &mut self.bills,
            BudgetCategory::Debt => &mut self.debt,
            BudgetCategory::Savings => &mut self.savings,
        }
    }

    fn row_mut(&mut self, category: BudgetCategory, index: usize) -> BudgetResult<&mut LineItem> {
        self.rows_mut(category)
            .get_mut(index)
            .ok_or_else(|| BudgetError::NotFound {
                entity_type: "Line item",
                identifier: format!("{} row {}", category, index + 1),
            })
    }

    /// Append a blank row and return its index
    pub fn add_row(&mut self, category: BudgetCategory) -> usize {
        let rows = self.rows_mut(category);
        rows.push(LineItem::default());
        rows.len() - 1
    }

    /// Append a filled row and return its index
    pub fn push_row(&mut self, category: BudgetCategory, item: LineItem) -> usize {
        let rows = self.rows_mut(category);
        // A lone blank row is a placeholder, so the first real row replaces it
        if rows.len() == 1 && rows[0].is_blank() {
            rows[0] = item;
            return 0;
        }
        rows.push(item);
        rows.len() - 1
    }

    /// Remove a row, or blank it when it is the only one left
    pub fn remove_row(&mut self, category: BudgetCategory, index: usize) -> BudgetResult<()> {
        let rows = self.rows_mut(category);
        if index >= rows.len() {
            return Err(BudgetError::NotFound {
                entity_type: "Line item",
                identifier: format!("{} row {}", category, index + 1),
            });
        }

        if rows.len() > 1 {
            rows.remove(index);
        } else {
            rows[0] = LineItem::default();
        }
        Ok(())
    }

    pub fn set_description(
        &mut self,
        category: BudgetCategory,
        index: usize,
        description: impl Into<String>,
    ) -> BudgetResult<()> {
        self.row_mut(category, index)?.description = description.into();
        Ok(())
    }

    /// Apply a raw amount edit
    ///
    /// Text that does not look like an unsigned decimal is rejected and the
    /// row is left unchanged. Empty text sets the amount to zero.
    pub fn set_amount(
        &mut self,
        category: BudgetCategory,
        index: usize,
        field: AmountField,
        raw: &str,
    ) -> BudgetResult<()> {
        let value = Money::parse_input(raw)
            .map_err(|e| BudgetError::InputRejected(e.to_string()))?;
        *self.row_mut(category, index)?.amount_mut(field) = value;
        Ok(())
    }

    /// Replace every category with a single blank row
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True once any row has a description and a positive amount
    pub fn has_meaningful_data(&self) -> bool {
        self.iter().any(|(_, item)| item.is_meaningful())
    }

    /// Every row paired with its category, in sheet order
    pub fn iter(&self) -> impl Iterator<Item = (BudgetCategory, &LineItem)> {
        BudgetCategory::ALL
            .into_iter()
            .flat_map(move |category| self.rows(category).iter().map(move |item| (category, item)))
    }

    pub fn row_count(&self) -> usize {
        BudgetCategory::ALL
            .iter()
            .map(|category| self.rows(*category).len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_one_blank_row_per_category() {
        let sheet = BudgetSheet::default();
        for category in BudgetCategory::ALL {
            assert_eq!(sheet.rows(category).len(), 1);
            assert!(sheet.rows(category)[0].is_blank());
        }
        assert!(!sheet.has_meaningful_data());
    }

    #[test]
    fn test_remove_only_row_blanks_it() {
        let mut sheet = BudgetSheet::default();
        sheet.set_description(BudgetCategory::Bills, 0, "Rent").unwrap();
        sheet
            .set_amount(BudgetCategory::Bills, 0, AmountField::Planned, "900")
            .unwrap();

        sheet.remove_row(BudgetCategory::Bills, 0).unwrap();
        assert_eq!(sheet.rows(BudgetCategory::Bills).len(), 1);
        assert!(sheet.rows(BudgetCategory::Bills)[0].is_blank());
    }

    #[test]
    fn test_remove_deletes_when_several_rows() {
        let mut sheet = BudgetSheet::default();
        let second = sheet.add_row(BudgetCategory::Debt);
        sheet.set_description(BudgetCategory::Debt, second, "Card").unwrap();

        sheet.remove_row(BudgetCategory::Debt, 0).unwrap();
        let rows = sheet.rows(BudgetCategory::Debt);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "Card");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut sheet = BudgetSheet::default();
        assert!(sheet.remove_row(BudgetCategory::Income, 3).unwrap_err().is_not_found());
    }

    #[test]
    fn test_rejected_amount_leaves_row_unchanged() {
        let mut sheet = BudgetSheet::default();
        sheet
            .set_amount(BudgetCategory::Income, 0, AmountField::Actual, "12.5")
            .unwrap();

        for bad in ["abc", "-4", "1.2.3", "1,000"] {
            let err = sheet
                .set_amount(BudgetCategory::Income, 0, AmountField::Actual, bad)
                .unwrap_err();
            assert!(err.is_input_rejected());
        }
        assert_eq!(sheet.rows(BudgetCategory::Income)[0].actual, Money::from_cents(1250));
    }

    #[test]
    fn test_empty_amount_is_zero() {
        let mut sheet = BudgetSheet::default();
        sheet
            .set_amount(BudgetCategory::Income, 0, AmountField::Planned, "40")
            .unwrap();
        sheet
            .set_amount(BudgetCategory::Income, 0, AmountField::Planned, "")
            .unwrap();
        assert!(sheet.rows(BudgetCategory::Income)[0].planned.is_zero());
    }

    #[test]
    fn test_meaningful_data_toggles() {
        let mut sheet = BudgetSheet::default();
        sheet.set_description(BudgetCategory::Savings, 0, "Emergency fund").unwrap();
        assert!(!sheet.has_meaningful_data());

        sheet
            .set_amount(BudgetCategory::Savings, 0, AmountField::Planned, "50")
            .unwrap();
        assert!(sheet.has_meaningful_data());

        sheet.set_description(BudgetCategory::Savings, 0, "").unwrap();
        assert!(!sheet.has_meaningful_data());
    }

    #[test]
    fn test_reset() {
        let mut sheet = BudgetSheet::default();
        sheet.add_row(BudgetCategory::Income);
        sheet.set_description(BudgetCategory::Income, 1, "Bonus").unwrap();
        sheet.reset();
        assert_eq!(sheet, BudgetSheet::default());
    }

    #[test]
    fn test_push_row_replaces_placeholder() {
        let mut sheet = BudgetSheet::default();
        let idx = sheet.push_row(
            BudgetCategory::Income,
            LineItem::new("Salary", Money::from_units(10), Money::zero()),
        );
        assert_eq!(idx, 0);
        let idx = sheet.push_row(
            BudgetCategory::Income,
            LineItem::new("Bonus", Money::from_units(1), Money::zero()),
        );
        assert_eq!(idx, 1);
        assert_eq!(sheet.row_count(), 5);
    }

    #[test]
    fn test_deserialize_refills_empty_categories() {
        let sheet: BudgetSheet = serde_json::from_str(r#"{"income": [], "bills": []}"#).unwrap();
        for category in BudgetCategory::ALL {
            assert_eq!(sheet.rows(category).len(), 1);
        }
    }
}
