//! CLI commands for reports
//!
//! The spending overview, charts, export, and the audit history.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::filter::FilterArgs;
use crate::audit::AuditLogger;
use crate::config::{DashboardPaths, Settings};
use crate::display::{format_category_chart, format_daily_chart, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses, ExportFormat};
use crate::services::{apply, category_series, daily_series, summarize};
use crate::storage::ExpenseStore;

/// Which series to chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Spending per calendar day, oldest first
    Daily,
    /// Spending per category, largest first
    Category,
}

/// Arguments for `chart`
#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Series to draw
    #[arg(value_enum)]
    pub kind: ChartKind,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format (defaults to the file extension, then CSV)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle `summary`
pub fn handle_summary(store: &ExpenseStore, settings: &Settings) -> ExpenseResult<()> {
    let summary = summarize(store.all(), store.clock());
    print!("{}", format_summary(&summary, store.clock().today(), settings));
    Ok(())
}

/// Handle `chart`
pub fn handle_chart(store: &ExpenseStore, settings: &Settings, args: ChartArgs) -> ExpenseResult<()> {
    let filter = args.filter.to_filter(store.clock().today(), settings)?;
    let visible = apply(store.all(), &filter);

    let output = match args.kind {
        ChartKind::Daily => format_daily_chart(&daily_series(&visible), settings),
        ChartKind::Category => format_category_chart(&category_series(&visible), settings),
    };
    print!("{}", output);
    Ok(())
}

/// Handle `export`
pub fn handle_export(store: &ExpenseStore, settings: &Settings, args: ExportArgs) -> ExpenseResult<()> {
    let filter = args.filter.to_filter(store.clock().today(), settings)?;
    let visible = apply(store.all(), &filter);

    let format = args
        .format
        .or_else(|| ExportFormat::from_extension(&args.output))
        .unwrap_or_default();

    let file = File::create(&args.output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    export_expenses(&visible, format, BufWriter::new(file))?;

    println!(
        "Exported {} expenses to: {}",
        visible.len(),
        args.output.display()
    );
    Ok(())
}

/// Handle `history`
pub fn handle_history(paths: &DashboardPaths, args: HistoryArgs) -> ExpenseResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
