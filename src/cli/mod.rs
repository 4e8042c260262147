//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store and service layer.

pub mod expense;
pub mod filter;
pub mod report;

pub use expense::{handle_add, handle_list, handle_remove, AddArgs, ListArgs, RemoveArgs};
pub use filter::FilterArgs;
pub use report::{
    handle_chart, handle_export, handle_history, handle_summary, ChartArgs, ChartKind, ExportArgs,
    HistoryArgs,
};
