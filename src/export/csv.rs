//! CSV Export functionality
//!
//! Writes the expense list as `Name,Amount,Category,Date`, one row per expense
//! in ledger order. Fields are never quoted or escaped: a name or category that
//! contains a comma shifts the remaining columns of its row.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::error::EasyBudgetResult;
use crate::models::{Expense, PeriodKey};

/// Header row of the expense export
pub const EXPENSE_HEADER: [&str; 4] = ["Name", "Amount", "Category", "Date"];

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> EasyBudgetResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    csv_writer.write_record(EXPENSE_HEADER)?;

    for expense in expenses {
        let amount = expense.amount.to_string();
        let date = expense.date.format("%Y-%m-%d").to_string();
        csv_writer.write_record([
            expense.name.as_str(),
            amount.as_str(),
            expense.category.as_str(),
            date.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Default file name for a period's export, e.g. `EasyBudget_2024-05.csv`
pub fn export_file_name(namespace: &str, period: PeriodKey) -> String {
    format!("{}_{}.csv", namespace, period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense(name: &str, units: i64, category: &str, day: u32) -> Expense {
        Expense::new(
            name,
            Money::from_units(units),
            category,
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
        )
    }

    fn export(expenses: &[Expense]) -> String {
        let mut buffer = Vec::new();
        export_expenses_csv(expenses, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_only_for_empty_list() {
        assert_eq!(export(&[]), "Name,Amount,Category,Date\n");
    }

    #[test]
    fn test_rows_in_stored_order() {
        let csv = export(&[
            expense("Lunch", 1200, "Food", 1),
            expense("Bus", 300, "Transport", 2),
        ]);
        assert_eq!(
            csv,
            "Name,Amount,Category,Date\n\
             Lunch,1200.00,Food,2024-05-01\n\
             Bus,300.00,Transport,2024-05-02\n"
        );
    }

    #[test]
    fn test_embedded_delimiters_are_not_escaped() {
        let csv = export(&[expense("Rice, beans", 50, "Food", 3)]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "Rice, beans,50.00,Food,2024-05-03");
        assert_eq!(row.split(',').count(), 5);
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let csv = export(&[expense("\"Big\" lunch", 50, "Food", 3)]);
        assert!(csv.contains("\"Big\" lunch,50.00"));
    }

    #[test]
    fn test_export_file_name() {
        let period = PeriodKey::new(2024, 5).unwrap();
        assert_eq!(export_file_name("EasyBudget", period), "EasyBudget_2024-05.csv");
    }
}
