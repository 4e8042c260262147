//! Expense display formatting
//!
//! Renders expense lists as terminal tables and single expenses as detail
//! blocks, using the user's currency symbol and date format.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;

/// Shown instead of an empty table
pub const EMPTY_LIST_MESSAGE: &str = "No expenses found for the selected filters.";

const AMOUNT_COLUMN: usize = 5;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.to_string(),
            date: expense.date.format(&settings.date_format).to_string(),
            description: description_or_dash(&expense.description),
            category: expense.category.to_string(),
            payment: expense.payment_method.to_string(),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
        }
    }
}

/// Format a list of expenses as a table, or the empty-state message
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return format!("{}\n", EMPTY_LIST_MESSAGE);
    }

    let rows = expenses.iter().map(|e| ExpenseRow::new(e, settings));
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(AMOUNT_COLUMN), Alignment::right());

    format!("{}\n", table)
}

/// Format one expense for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date.format(&settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Payment:     {}\n", expense.payment_method));
    output.push_str(&format!(
        "Description: {}\n",
        description_or_dash(&expense.description)
    ));

    output
}

fn description_or_dash(description: &str) -> String {
    if description.is_empty() {
        "—".to_string()
    } else {
        description.to_string()
    }
}
