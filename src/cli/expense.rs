//! Expense CLI commands
//!
//! `add`, `list`, and `remove`.

use clap::Args;

use super::filter::{parse_date, FilterArgs};
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Money, NewExpense, PaymentMethod};
use crate::services::apply;
use crate::storage::ExpenseStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount in currency units (e.g. "12.50")
    pub amount: String,

    /// Category (defaults to Groceries)
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Payment method (defaults to Debit Card)
    #[arg(short, long)]
    pub payment: Option<String>,

    /// Date of the expense (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Free-text description
    #[arg(short = 'D', long, default_value = "")]
    pub description: String,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Maximum number of rows to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for `remove`
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Expense id: full UUID or the short `exp-xxxxxxxx` form
    pub id: String,
}

/// Handle `add`
pub fn handle_add(store: &mut ExpenseStore, settings: &Settings, args: AddArgs) -> ExpenseResult<()> {
    let amount = parse_amount(&args.amount, settings)?;

    let date = match &args.date {
        Some(date) => parse_date(date)?,
        None => store.clock().today(),
    };

    let category = match &args.category {
        Some(name) => Category::parse(name).ok_or_else(|| {
            ExpenseError::Validation(format!("Unknown category '{}'", name))
        })?,
        None => Category::default(),
    };

    let payment_method = match &args.payment {
        Some(name) => PaymentMethod::parse(name).ok_or_else(|| {
            ExpenseError::Validation(format!("Unknown payment method '{}'", name))
        })?,
        None => PaymentMethod::default(),
    };

    let expense = store.add(
        NewExpense::new(date, amount)
            .category(category)
            .payment_method(payment_method)
            .description(args.description),
    )?;

    println!("Added expense:");
    print!("{}", format_expense_details(&expense, settings));
    Ok(())
}

/// Handle `list`
pub fn handle_list(store: &ExpenseStore, settings: &Settings, args: ListArgs) -> ExpenseResult<()> {
    let filter = args.filter.to_filter(store.clock().today(), settings)?;
    let visible = apply(store.all(), &filter);
    let limit = args.limit.unwrap_or(settings.list_limit);

    let shown = &visible[..visible.len().min(limit)];
    print!("{}", format_expense_table(shown, settings));

    if !visible.is_empty() {
        let total: Money = visible.iter().map(|e| e.amount).sum();
        if shown.len() < visible.len() {
            println!("Showing {} of {} expenses", shown.len(), visible.len());
        }
        println!(
            "Total: {} across {} expense{}",
            total.format_with_symbol(&settings.currency_symbol),
            visible.len(),
            if visible.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

/// Handle `remove`
pub fn handle_remove(store: &mut ExpenseStore, settings: &Settings, args: RemoveArgs) -> ExpenseResult<()> {
    let id = store.find(&args.id)?.id.clone();
    let removed = store
        .remove(&id)
        .ok_or_else(|| ExpenseError::expense_not_found(&args.id))?;

    println!("Removed expense:");
    print!("{}", format_expense_details(&removed, settings));
    Ok(())
}

/// Parse a user-entered amount, tolerating the currency symbol and thousands separators
pub fn parse_amount(input: &str, settings: &Settings) -> ExpenseResult<f64> {
    let unsigned = input
        .trim()
        .trim_start_matches(settings.currency_symbol.as_str());

    without_thousands_separators(unsigned.trim())
        .parse::<f64>()
        .map_err(|_| ExpenseError::InvalidAmount(input.to_string()))
}

/// Drop commas that separate groups of three digits; any other comma is kept
fn without_thousands_separators(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut cleaned = String::with_capacity(s.len());

    for (i, &ch) in chars.iter().enumerate() {
        if ch == ',' && i > 0 && chars[i - 1].is_ascii_digit() {
            let group = chars[i + 1..]
                .iter()
                .take_while(|c| c.is_ascii_digit())
                .count();
            if group == 3 {
                continue;
            }
        }
        cleaned.push(ch);
    }

    cleaned
}
