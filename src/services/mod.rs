//! Service layer for the expense dashboard
//!
//! Pure transformations over read-only slices of expenses: filtering and
//! sorting for the visible list, aggregation for the overview and charts.

pub mod filter;
pub mod summary;

pub use filter::{apply, sort_recent_first, FilterSpec, Selection};
pub use summary::{
    category_series, daily_series, summarize, CategoryTotal, DailyTotal, Summary,
};
