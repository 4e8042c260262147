//! Aggregator
//!
//! Summary totals for the overview panel and grouped series for charts.
//! Sums are exact decimal arithmetic; rounding only happens when rendering.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::clock::Clock;
use crate::models::{Category, Expense, Money};

/// Total spent in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

impl CategoryTotal {
    /// Share of `overall` as a percentage (0 when `overall` is zero)
    pub fn percentage_of(&self, overall: Money) -> f64 {
        if overall.is_zero() {
            0.0
        } else {
            (self.total.amount() / overall.amount() * Decimal::ONE_HUNDRED)
                .to_f64()
                .unwrap_or_default()
        }
    }
}

/// Total spent on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Money,
}

/// Spending overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// All-time total
    pub total: Money,
    /// Spent on the clock's current day
    pub today: Money,
    /// Spent in the clock's current calendar month
    pub month: Money,
    /// Per-category totals in first-occurrence order
    pub by_category: Vec<CategoryTotal>,
    /// Highest category total; earliest-seen category wins a tie
    pub top_category: Option<CategoryTotal>,
}


/// Compute the overview totals, evaluating "today" and "this month" against the clock
pub fn summarize(expenses: &[Expense], clock: &dyn Clock) -> Summary {
    let today = clock.today();

    let mut total = Money::zero();
    let mut today_total = Money::zero();
    let mut month_total = Money::zero();

    for expense in expenses {
        total += expense.amount;

        if expense.date == today {
            today_total += expense.amount;
        }

        if expense.date.year() == today.year() && expense.date.month() == today.month() {
            month_total += expense.amount;
        }
    }

    let by_category = group_by_category(expenses);

    let mut top_category: Option<CategoryTotal> = None;
    for entry in &by_category {
        if top_category.map_or(true, |top| entry.total > top.total) {
            top_category = Some(*entry);
        }
    }

    Summary {
        total,
        today: today_total,
        month: month_total,
        by_category,
        top_category,
    }
}

/// Per-day totals, oldest day first
pub fn daily_series(expenses: &[Expense]) -> Vec<DailyTotal> {
    let mut by_day: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for expense in expenses {
        *by_day.entry(expense.date).or_default() += expense.amount;
    }

    by_day
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}

/// Per-category totals, largest first; equal totals keep first-occurrence order
pub fn category_series(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut series = group_by_category(expenses);
    // Stable sort preserves first-occurrence order among ties
    series.sort_by(|a, b| b.total.cmp(&a.total));
    series
}

fn group_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match groups.iter_mut().find(|g| g.category == expense.category) {
            Some(group) => group.total += expense.amount,
            None => groups.push(CategoryTotal {
                category: expense.category,
                total: expense.amount,
            }),
        }
    }
    groups
}
