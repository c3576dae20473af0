//! Expense display formatting
//!
//! Formats a period's expense list for terminal output. Rows are numbered from
//! 1; that number is what the `expense edit` and `expense delete` commands take.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, Money};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format the expense list as a table, dates rendered with `date_format` (strftime)
pub fn format_expense_list(
    expenses: &[Expense],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(index, expense)| ExpenseRow {
        number: index + 1,
        name: expense.name.clone(),
        category: expense.category.clone(),
        amount: expense.amount.format_with_symbol(currency_symbol),
        date: expense.date.format(date_format).to_string(),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format the budget headline
pub fn format_budget_line(budget: Option<Money>, currency_symbol: &str) -> String {
    match budget {
        Some(amount) => format!(
            "Monthly Budget: {}",
            amount.format_with_symbol(currency_symbol)
        ),
        None => "No budget set.".to_string(),
    }
}
