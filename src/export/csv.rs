//! CSV export
//!
//! One row per expense with a fixed header. Amounts are written in currency
//! units with two decimals.

use std::io::Write;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

#[derive(Serialize)]
struct ExpenseCsvRow<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Payment Method")]
    payment_method: &'static str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

impl<'a> From<&'a Expense> for ExpenseCsvRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.as_str(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.name(),
            payment_method: expense.payment_method.name(),
            description: &expense.description,
            amount: format!("{:.2}", expense.amount.rounded()),
        }
    }
}

/// Export expenses to CSV in the order given
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for expense in expenses {
        csv_writer
            .serialize(ExpenseCsvRow::from(expense))
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    if expenses.is_empty() {
        csv_writer
            .write_record(["ID", "Date", "Category", "Payment Method", "Description", "Amount"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
