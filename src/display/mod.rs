//! Display formatting for terminal output
//!
//! Tables for expense lists, the spending overview, and text bar charts.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_details, format_expense_table, EMPTY_LIST_MESSAGE};
pub use summary::{format_category_chart, format_daily_chart, format_summary};
