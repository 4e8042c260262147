use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use expense_dashboard::cli::{self, AddArgs, ChartArgs, ExportArgs, HistoryArgs, ListArgs, RemoveArgs};
use expense_dashboard::clock::SystemClock;
use expense_dashboard::config::{DashboardPaths, Settings};
use expense_dashboard::storage::{ExpenseStore, LoadSource};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Local expense tracking dashboard",
    long_about = "Record expenses, filter them by date, category, payment method, \
                  or description, and see where the money went, all from the \
                  command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses matching the filters
    #[command(alias = "ls")]
    List(ListArgs),

    /// Remove an expense by id
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Show the spending overview
    Summary,

    /// Draw the daily or per-category spending chart
    Chart(ChartArgs),

    /// Export the filtered expenses to a file
    Export(ExportArgs),

    /// Show recent additions and removals
    History(HistoryArgs),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let paths = DashboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Expense Dashboard - local expense tracking");
        println!();
        println!("Run 'expenses --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Init => {
            println!("Initializing Expense Dashboard at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            let (store, source) = ExpenseStore::open(&paths, Arc::new(SystemClock))?;
            if source.is_seeded() {
                println!("Created {} sample expenses.", store.len());
            }
            println!("Initialization complete!");
        }
        Commands::Config => {
            println!("Expense Dashboard Configuration");
            println!("===============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Date format:        {}", settings.date_format);
            println!("  Default range days: {}", settings.default_range_days);
            println!("  List limit:         {}", settings.list_limit);
        }
        Commands::History(args) => cli::handle_history(&paths, args)?,
        Commands::Add(args) => cli::handle_add(&mut open_store(&paths)?, &settings, args)?,
        Commands::List(args) => cli::handle_list(&open_store(&paths)?, &settings, args)?,
        Commands::Remove(args) => cli::handle_remove(&mut open_store(&paths)?, &settings, args)?,
        Commands::Summary => cli::handle_summary(&open_store(&paths)?, &settings)?,
        Commands::Chart(args) => cli::handle_chart(&open_store(&paths)?, &settings, args)?,
        Commands::Export(args) => cli::handle_export(&open_store(&paths)?, &settings, args)?,
    }

    Ok(())
}

fn open_store(paths: &DashboardPaths) -> Result<ExpenseStore> {
    let (store, source) = ExpenseStore::open(paths, Arc::new(SystemClock))?;
    if let LoadSource::Recovered(reason) = &source {
        eprintln!("Stored expenses could not be read ({}); sample data restored.", reason);
    }
    debug!("Store ready with {} expenses", store.len());
    Ok(store)
}
