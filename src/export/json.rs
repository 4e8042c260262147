//! JSON export
//!
//! Writes the filtered view in the same `{ "expenses": [...] }` layout the
//! store persists, so an export can be copied back in as stored state.

use std::io::Write;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

#[derive(Serialize)]
struct ExportPayload<'a> {
    expenses: &'a [Expense],
}

/// Export expenses as a JSON payload
pub fn export_expenses_json<W: Write>(
    expenses: &[Expense],
    mut writer: W,
    pretty: bool,
) -> ExpenseResult<()> {
    let payload = ExportPayload { expenses };

    if pretty {
        serde_json::to_writer_pretty(&mut writer, &payload)
    } else {
        serde_json::to_writer(&mut writer, &payload)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
