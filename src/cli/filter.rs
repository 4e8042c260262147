//! Filter flags shared by `list`, `chart`, and `export`

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, PaymentMethod};
use crate::services::{FilterSpec, Selection};

/// Flags narrowing the visible expenses
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["last", "all_dates"])]
    pub from: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["last", "all_dates"])]
    pub to: Option<String>,

    /// Only the last N days, ending today
    #[arg(long, value_name = "DAYS", conflicts_with = "all_dates")]
    pub last: Option<u32>,

    /// Ignore dates entirely
    #[arg(long)]
    pub all_dates: bool,

    /// Category name, or "all"
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Payment method, or "all"
    #[arg(short, long)]
    pub payment: Option<String>,

    /// Case-insensitive text to find in descriptions
    #[arg(short, long)]
    pub search: Option<String>,
}

impl FilterArgs {
    /// Build the filter; with no date flags the settings' default window applies
    pub fn to_filter(&self, today: NaiveDate, settings: &Settings) -> ExpenseResult<FilterSpec> {
        let mut filter = if let Some(days) = self.last {
            FilterSpec::last_days(days, today)
        } else if self.from.is_some() || self.to.is_some() {
            let mut filter = FilterSpec::new();
            if let Some(from) = &self.from {
                filter = filter.start_date(parse_date(from)?);
            }
            if let Some(to) = &self.to {
                filter = filter.end_date(parse_date(to)?);
            }
            filter
        } else if self.all_dates {
            FilterSpec::new()
        } else {
            FilterSpec::last_days(settings.default_range_days, today)
        };

        if let Some(name) = &self.category {
            filter.category = Selection::parse_with(name, Category::parse).ok_or_else(|| {
                ExpenseError::Validation(format!(
                    "Unknown category '{}'. Expected one of: {}",
                    name,
                    Category::ALL.map(|c| c.name()).join(", ")
                ))
            })?;
        }

        if let Some(name) = &self.payment {
            filter.payment_method =
                Selection::parse_with(name, PaymentMethod::parse).ok_or_else(|| {
                    ExpenseError::Validation(format!(
                        "Unknown payment method '{}'. Expected one of: {}",
                        name,
                        PaymentMethod::ALL.map(|m| m.name()).join(", ")
                    ))
                })?;
        }

        if let Some(search) = &self.search {
            filter = filter.search(search.trim());
        }

        Ok(filter)
    }
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}
