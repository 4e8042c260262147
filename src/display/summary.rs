//! Overview and chart rendering
//!
//! The spending overview card set and text bar charts for the daily and
//! per-category series.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;
use crate::services::{CategoryTotal, DailyTotal, Summary};

const BAR_WIDTH: usize = 40;

/// Format the spending overview
pub fn format_summary(summary: &Summary, today: NaiveDate, settings: &Settings) -> String {
    let money = |m: Money| m.format_with_symbol(&settings.currency_symbol);
    let mut output = String::new();

    output.push_str(&format!("Spending Overview: {}\n", today.format("%A, %B %-d")));
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!("{:<20} {:>16}\n", "Today's Spend", money(summary.today)));
    output.push_str(&format!("{:<20} {:>16}\n", "This Month", money(summary.month)));
    output.push_str(&format!("{:<20} {:>16}\n", "All Time Total", money(summary.total)));

    match &summary.top_category {
        Some(top) => output.push_str(&format!(
            "{:<20} {:>16} ({})\n",
            "Top Category",
            money(top.total),
            top.category
        )),
        None => output.push_str(&format!("{:<20} {:>16}\n", "Top Category", "—")),
    }

    if !summary.by_category.is_empty() {
        output.push('\n');
        output.push_str(&format!("{:<20} {:>16} {:>7}\n", "Category", "Amount", "%"));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for entry in &summary.by_category {
            output.push_str(&format!(
                "{:<20} {:>16} {:>6.1}%\n",
                entry.category.name(),
                money(entry.total),
                entry.percentage_of(summary.total)
            ));
        }
    }

    output
}

/// Render the daily series as a horizontal bar chart, oldest day first
pub fn format_daily_chart(series: &[DailyTotal], settings: &Settings) -> String {
    let rows: Vec<(String, Money)> = series
        .iter()
        .map(|day| (day.date.format("%b %d").to_string(), day.total))
        .collect();
    format_bars("Daily Spending", &rows, settings)
}

/// Render the category series as a horizontal bar chart, largest first
pub fn format_category_chart(series: &[CategoryTotal], settings: &Settings) -> String {
    let rows: Vec<(String, Money)> = series
        .iter()
        .map(|entry| (entry.category.name().to_string(), entry.total))
        .collect();
    format_bars("By Category", &rows, settings)
}

fn format_bars(title: &str, rows: &[(String, Money)], settings: &Settings) -> String {
    if rows.is_empty() {
        return format!("{}\n", super::expense::EMPTY_LIST_MESSAGE);
    }

    let max = rows
        .iter()
        .map(|(_, total)| total.to_f64())
        .fold(0.0_f64, f64::max);
    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);

    let mut output = format!("{}\n", title);
    for (label, total) in rows {
        let width = if max > 0.0 {
            ((total.to_f64() / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        output.push_str(&format!(
            "{:<label_width$}  {:<bar_width$}  {}\n",
            label,
            "█".repeat(width.max(1)),
            total.format_with_symbol(&settings.currency_symbol),
            label_width = label_width,
            bar_width = BAR_WIDTH,
        ));
    }

    output
}
