//! Ledger summary
//!
//! Derives total spent, remaining balance and per-category totals from a
//! ledger. Always computed from scratch; nothing here is cached or persisted.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{LedgerState, Money};

/// Category name to total amount spent in that category
pub type CategoryTotals = BTreeMap<String, Money>;

/// Spending summary for one ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of every expense amount
    pub total_spent: Money,
    /// Budget minus total spent; `None` when no budget is set
    pub remaining: Option<Money>,
    /// Per-category totals
    pub category_totals: CategoryTotals,
    /// Budget is set and spending exceeds it
    pub over_budget: bool,
}

impl Summary {
    /// Compute the summary of a ledger
    pub fn compute(state: &LedgerState) -> Self {
        let mut total_spent = Money::zero();
        let mut category_totals = CategoryTotals::new();

        for expense in state.expenses() {
            total_spent += expense.amount;
            *category_totals
                .entry(expense.category.clone())
                .or_default() += expense.amount;
        }

        let remaining = state.budget().map(|budget| budget - total_spent);
        let over_budget = state.budget().is_some_and(|budget| total_spent > budget);

        Self {
            total_spent,
            remaining,
            category_totals,
            over_budget,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Total Spent: {}\n",
            self.total_spent.format_with_symbol(currency_symbol)
        ));

        let remaining = match self.remaining {
            Some(remaining) => remaining.format_with_symbol(currency_symbol),
            None => "—".to_string(),
        };
        let marker = if self.over_budget { "  ⚠ over budget" } else { "" };
        output.push_str(&format!("Remaining:   {}{}\n", remaining, marker));

        if !self.category_totals.is_empty() {
            output.push_str("\nCategory Totals\n");
            output.push_str(&"-".repeat(40));
            output.push('\n');
            for (category, total) in &self.category_totals {
                let label = if category.is_empty() {
                    "(uncategorized)"
                } else {
                    category.as_str()
                };
                output.push_str(&format!(
                    "  {:<24} {:>12}\n",
                    label,
                    total.format_with_symbol(currency_symbol)
                ));
            }
        }

        output
    }
}

/// Compute the summary of a ledger
pub fn compute_summary(state: &LedgerState) -> Summary {
    Summary::compute(state)
}
