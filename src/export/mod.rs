//! Export of the filtered expense view
//!
//! - CSV: one row per expense, spreadsheet-compatible
//! - JSON: the same `{ "expenses": [...] }` layout the store persists

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use json::export_expenses_json;

use std::io::Write;

use clap::ValueEnum;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    #[default]
    Csv,
    /// JSON in the persisted payload layout
    Json,
}

impl ExportFormat {
    /// Guess the format from a file extension, if it names one
    pub fn from_extension(path: &std::path::Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// Write `expenses` to `writer` in the requested format
pub fn export_expenses<W: Write>(
    expenses: &[Expense],
    format: ExportFormat,
    writer: W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, writer),
        ExportFormat::Json => export_expenses_json(expenses, writer, true),
    }
}
