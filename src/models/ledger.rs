//! Ledger state model
//!
//! Holds the budget and ordered expenses for one `(user, period)` partition.
//! Every mutator checks its preconditions before touching any field, so a
//! rejected call leaves the ledger exactly as it was.

use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::money::Money;
use crate::error::{EasyBudgetError, EasyBudgetResult};

/// Explicit answer to a destructive-action prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    pub fn is_confirmed(self) -> bool {
        self == Self::Confirmed
    }
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// Budget and expenses for one partition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Monthly budget; `None` when unset, otherwise strictly positive
    #[serde(default)]
    budget: Option<Money>,

    /// Expenses in insertion order
    #[serde(default)]
    expenses: Vec<Expense>,
}

impl LedgerState {
    /// Create an empty ledger (no budget, no expenses)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn budget(&self) -> Option<Money> {
        self.budget
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// True when there is neither a budget nor any expense
    pub fn is_blank(&self) -> bool {
        self.budget.is_none() && self.expenses.is_empty()
    }

    /// Set the budget amount (replacing any existing one)
    pub fn set_budget(&mut self, amount: Money) -> EasyBudgetResult<()> {
        check_budget_amount(amount)?;
        self.budget = Some(amount);
        Ok(())
    }

    /// Overwrite an existing budget
    pub fn edit_budget(&mut self, amount: Money) -> EasyBudgetResult<()> {
        if self.budget.is_none() {
            return Err(EasyBudgetError::NoBudgetSet);
        }
        check_budget_amount(amount)?;
        self.budget = Some(amount);
        Ok(())
    }

    /// Clear the budget. Returns `Ok(false)` when the confirmation was declined.
    pub fn delete_budget(&mut self, confirmation: Confirmation) -> EasyBudgetResult<bool> {
        if self.budget.is_none() {
            return Err(EasyBudgetError::NoBudgetSet);
        }
        if !confirmation.is_confirmed() {
            return Ok(false);
        }
        self.budget = None;
        Ok(true)
    }

    /// Append an expense to the end of the ledger
    pub fn add_expense(&mut self, expense: Expense) -> EasyBudgetResult<()> {
        expense.validate()?;
        check_total(
            self.expenses
                .iter()
                .map(|e| e.amount)
                .chain(std::iter::once(expense.amount)),
        )?;
        self.expenses.push(expense);
        Ok(())
    }

    /// Replace the expense at `index` in place
    pub fn edit_expense(&mut self, index: usize, expense: Expense) -> EasyBudgetResult<()> {
        self.check_index(index)?;
        expense.validate()?;
        check_total(self.expenses.iter().enumerate().map(|(i, e)| {
            if i == index {
                expense.amount
            } else {
                e.amount
            }
        }))?;
        self.expenses[index] = expense;
        Ok(())
    }

    /// Remove the expense at `index`, shifting later entries left
    pub fn delete_expense(&mut self, index: usize) -> EasyBudgetResult<Expense> {
        self.check_index(index)?;
        Ok(self.expenses.remove(index))
    }

    /// Clear budget and expenses. Returns `Ok(false)` when the confirmation was declined.
    pub fn reset(&mut self, confirmation: Confirmation) -> EasyBudgetResult<bool> {
        if !confirmation.is_confirmed() {
            return Ok(false);
        }
        self.budget = None;
        self.expenses.clear();
        Ok(true)
    }

    /// Check the budget and expense invariants on a whole ledger,
    /// e.g. one decoded from storage
    pub fn validate(&self) -> EasyBudgetResult<()> {
        if let Some(amount) = self.budget {
            check_budget_amount(amount)?;
        }
        for (index, expense) in self.expenses.iter().enumerate() {
            expense.validate().map_err(|e| {
                EasyBudgetError::invalid(format!("expense #{}: {}", index + 1, e))
            })?;
        }
        check_total(self.expenses.iter().map(|e| e.amount))?;
        Ok(())
    }

    fn check_index(&self, index: usize) -> EasyBudgetResult<()> {
        if index >= self.expenses.len() {
            return Err(EasyBudgetError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            });
        }
        Ok(())
    }
}

fn check_budget_amount(amount: Money) -> EasyBudgetResult<()> {
    if !amount.is_positive() {
        return Err(EasyBudgetError::invalid(format!(
            "budget must be positive (got {})",
            amount
        )));
    }
    if !amount.is_within_limit() {
        return Err(EasyBudgetError::invalid(format!(
            "budget {} exceeds the limit of {}",
            amount,
            Money::MAX
        )));
    }
    Ok(())
}

/// The expense total must stay within `Money::MAX` so summaries never overflow
fn check_total(mut amounts: impl Iterator<Item = Money>) -> EasyBudgetResult<()> {
    let total = amounts
        .try_fold(Money::zero(), Money::checked_add)
        .filter(Money::is_within_limit);
    if total.is_none() {
        return Err(EasyBudgetError::invalid(format!(
            "total spending would exceed the limit of {}",
            Money::MAX
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(name: &str, units: i64) -> Expense {
        Expense::new(
            name,
            Money::from_units(units),
            "Food",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    fn ledger_with(names: &[&str]) -> LedgerState {
        let mut ledger = LedgerState::new();
        for name in names {
            ledger.add_expense(expense(name, 10)).unwrap();
        }
        ledger
    }

    fn names(ledger: &LedgerState) -> Vec<&str> {
        ledger.expenses().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_new_is_blank() {
        let ledger = LedgerState::new();
        assert!(ledger.is_blank());
        assert_eq!(ledger.budget(), None);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_set_budget_rejects_non_positive() {
        let mut ledger = LedgerState::new();
        ledger.set_budget(Money::from_units(5000)).unwrap();

        for bad in [0, -1, -5000] {
            let err = ledger.set_budget(Money::from_units(bad)).unwrap_err();
            assert!(matches!(err, EasyBudgetError::InvalidInput(_)));
        }
        assert_eq!(ledger.budget(), Some(Money::from_units(5000)));
    }

    #[test]
    fn test_edit_budget_requires_existing_budget() {
        let mut ledger = LedgerState::new();
        let err = ledger.edit_budget(Money::from_units(200)).unwrap_err();
        assert!(matches!(err, EasyBudgetError::NoBudgetSet));
        assert_eq!(ledger, LedgerState::new());

        ledger.set_budget(Money::from_units(100)).unwrap();
        ledger.edit_budget(Money::from_units(200)).unwrap();
        assert_eq!(ledger.budget(), Some(Money::from_units(200)));

        assert!(ledger.edit_budget(Money::zero()).is_err());
        assert_eq!(ledger.budget(), Some(Money::from_units(200)));
    }

    #[test]
    fn test_delete_budget_checks_budget_before_confirmation() {
        let mut ledger = LedgerState::new();
        assert!(matches!(
            ledger.delete_budget(Confirmation::Declined),
            Err(EasyBudgetError::NoBudgetSet)
        ));

        ledger.set_budget(Money::from_units(100)).unwrap();
        assert!(!ledger.delete_budget(Confirmation::Declined).unwrap());
        assert_eq!(ledger.budget(), Some(Money::from_units(100)));

        assert!(ledger.delete_budget(Confirmation::Confirmed).unwrap());
        assert_eq!(ledger.budget(), None);
    }

    #[test]
    fn test_add_expense_appends() {
        let mut ledger = ledger_with(&["a", "b"]);
        ledger.add_expense(expense("c", 5)).unwrap();
        assert_eq!(names(&ledger), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_add_invalid_expense_is_noop() {
        let mut ledger = ledger_with(&["a"]);
        let before = ledger.clone();
        assert!(ledger.add_expense(expense("", 5)).is_err());
        assert!(ledger.add_expense(expense("x", 0)).is_err());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_add_expense_rejects_total_above_max() {
        let mut ledger = LedgerState::new();
        let big = |name: &str| {
            Expense::new(
                name,
                Money::MAX,
                "Home",
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            )
        };
        ledger.add_expense(big("first")).unwrap();

        let err = ledger.add_expense(big("second")).unwrap_err();
        assert!(matches!(err, EasyBudgetError::InvalidInput(_)));
        assert_eq!(names(&ledger), vec!["first"]);

        assert!(ledger.add_expense(expense("tea", 1)).is_err());
        ledger.edit_expense(0, expense("smaller", 1)).unwrap();
        ledger.add_expense(expense("tea", 1)).unwrap();
        assert_eq!(names(&ledger), vec!["smaller", "tea"]);
    }

    #[test]
    fn test_edit_expense_rejects_total_above_max() {
        let mut ledger = ledger_with(&["a", "b"]);
        let huge = Expense::new(
            "huge",
            Money::MAX,
            "Home",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        assert!(ledger.edit_expense(0, huge).is_err());
        assert_eq!(names(&ledger), vec!["a", "b"]);
    }

    #[test]
    fn test_budget_above_max_is_rejected() {
        let mut ledger = LedgerState::new();
        ledger.set_budget(Money::MAX).unwrap();
        assert!(ledger.set_budget(Money::from_cents(i64::MAX)).is_err());
        assert_eq!(ledger.budget(), Some(Money::MAX));
    }

    #[test]
    fn test_edit_expense_in_place() {
        let mut ledger = ledger_with(&["a", "b", "c"]);
        ledger.edit_expense(1, expense("B", 7)).unwrap();
        assert_eq!(names(&ledger), vec!["a", "B", "c"]);
        assert_eq!(ledger.expense(1).unwrap().amount, Money::from_units(7));
    }

    #[test]
    fn test_edit_expense_checks_index_first() {
        let mut ledger = ledger_with(&["a"]);
        let err = ledger.edit_expense(1, expense("", 0)).unwrap_err();
        assert!(matches!(
            err,
            EasyBudgetError::IndexOutOfRange { index: 1, len: 1 }
        ));
        assert!(matches!(
            ledger.edit_expense(0, expense("", 5)),
            Err(EasyBudgetError::InvalidInput(_))
        ));
        assert_eq!(names(&ledger), vec!["a"]);
    }

    #[test]
    fn test_delete_expense_preserves_order() {
        let mut ledger = ledger_with(&["a", "b", "c", "d"]);
        let removed = ledger.delete_expense(1).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&ledger), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_stale_index_after_delete() {
        let mut ledger = ledger_with(&["a", "b"]);
        ledger.delete_expense(0).unwrap();
        assert!(matches!(
            ledger.delete_expense(1),
            Err(EasyBudgetError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_reset() {
        let mut ledger = ledger_with(&["a"]);
        ledger.set_budget(Money::from_units(100)).unwrap();

        assert!(!ledger.reset(Confirmation::Declined).unwrap());
        assert!(!ledger.is_blank());

        assert!(ledger.reset(true.into()).unwrap());
        assert!(ledger.is_blank());
    }

    #[test]
    fn test_validate_decoded_state() {
        let good: LedgerState = serde_json::from_str(
            r#"{"budget": 5000, "expenses": [
                {"name": "Lunch", "amount": 1200, "category": "Food", "date": "2024-05-01"},
                {"name": "Tea", "amount": 12.5, "category": "Food", "date": "2024-05-02"}
            ]}"#,
        )
        .unwrap();
        assert!(good.validate().is_ok());
        assert_eq!(good.budget(), Some(Money::from_units(5000)));
        assert_eq!(good.expense(0).unwrap().amount, Money::from_units(1200));
        assert_eq!(good.expense(1).unwrap().amount, Money::from_cents(1250));

        let bad_budget: LedgerState =
            serde_json::from_str(r#"{"budget": -1, "expenses": []}"#).unwrap();
        assert!(bad_budget.validate().is_err());

        let bad_expense: LedgerState = serde_json::from_str(
            r#"{"budget": null, "expenses": [
                {"name": "", "amount": 100, "category": "Food", "date": "2024-05-01"}
            ]}"#,
        )
        .unwrap();
        assert!(bad_expense.validate().is_err());

        let overflowing: LedgerState = serde_json::from_str(
            r#"{"expenses": [
                {"name": "a", "amount": 9000000000000, "category": "", "date": "2024-05-01"},
                {"name": "b", "amount": 9000000000000, "category": "", "date": "2024-05-01"}
            ]}"#,
        )
        .unwrap();
        assert!(overflowing.validate().is_err());
    }

    #[test]
    fn test_serialized_layout() {
        let value = serde_json::to_value(LedgerState::new()).unwrap();
        assert_eq!(value, serde_json::json!({"budget": null, "expenses": []}));
    }
}
