//! Filter engine
//!
//! Narrows a list of expenses to the ones matching a `FilterSpec` and returns
//! them most recent first. The same ordering is used for the whole store.

use chrono::{Duration, NaiveDate};

use crate::models::{Category, Expense, PaymentMethod};

/// Either every value, or one specific value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selection
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Selection<T> {
    /// Parse user input, treating `all` (any case, or e.g. "All Categories") as no constraint
    pub fn parse_with(s: &str, parse: impl Fn(&str) -> Option<T>) -> Option<Self> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        if lower == "all" || lower.starts_with("all ") {
            return Some(Selection::All);
        }
        parse(trimmed).map(Selection::Only)
    }
}

/// User-chosen constraints on the visible expenses
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    /// Inclusive lower bound on the expense date
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the expense date
    pub end_date: Option<NaiveDate>,
    pub category: Selection<Category>,
    pub payment_method: Selection<PaymentMethod>,
    /// Case-insensitive substring of the description; empty matches everything
    pub search: String,
}

impl FilterSpec {
    /// A filter with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// The trailing `days` days ending today, e.g. 7 → today and the six days before
    pub fn last_days(days: u32, today: NaiveDate) -> Self {
        Self::new().quick_range(days, today)
    }

    /// Replace the date bounds with the trailing `days` days ending today
    ///
    /// A window reaching past the earliest representable date starts there.
    pub fn quick_range(mut self, days: u32, today: NaiveDate) -> Self {
        let span = i64::from(days.max(1)) - 1;
        let start = Duration::try_days(span)
            .and_then(|span| today.checked_sub_signed(span))
            .unwrap_or(NaiveDate::MIN);
        self.start_date = Some(start);
        self.end_date = Some(today);
        self
    }

    /// Filter by inclusive date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn end_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Selection::Only(category);
        self
    }

    /// Filter by payment method
    pub fn payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = Selection::Only(payment_method);
        self
    }

    /// Filter by description text
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether a single expense passes every constraint
    pub fn matches(&self, expense: &Expense) -> bool {
        if self.start_date.is_some_and(|start| expense.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| expense.date > end) {
            return false;
        }
        if !self.category.matches(&expense.category) {
            return false;
        }
        if !self.payment_method.matches(&expense.payment_method) {
            return false;
        }
        if !self.search.is_empty()
            && !expense
                .description
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }
        true
    }
}

/// Apply a filter, returning matching expenses most recent first
pub fn apply(expenses: &[Expense], filter: &FilterSpec) -> Vec<Expense> {
    let mut visible: Vec<Expense> = expenses
        .iter()
        .filter(|expense| filter.matches(expense))
        .cloned()
        .collect();
    sort_recent_first(&mut visible);
    visible
}

/// Sort by date descending, then by creation time descending
pub fn sort_recent_first(expenses: &mut [Expense]) {
    expenses.sort_by(Expense::cmp_recent_first);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::{DateTime, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap()
    }

    fn expense(
        day: NaiveDate,
        created_hour: u32,
        category: Category,
        payment_method: PaymentMethod,
        description: &str,
        cents: i64,
    ) -> Expense {
        Expense {
            id: ExpenseId::new(),
            date: day,
            created_at: at(created_hour),
            category,
            payment_method,
            description: description.to_string(),
            amount: Money::from_cents(cents),
        }
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(date(2024, 1, 1), 9, Category::Groceries, PaymentMethod::DebitCard, "Produce market", 1000),
            expense(date(2024, 1, 1), 10, Category::Transport, PaymentMethod::Cash, "Bus fare", 500),
            expense(date(2024, 1, 3), 8, Category::DiningOut, PaymentMethod::CreditCard, "Team LUNCH", 2740),
            expense(date(2023, 12, 30), 7, Category::Groceries, PaymentMethod::CreditCard, "", 4200),
        ]
    }

    fn assert_sorted(expenses: &[Expense]) {
        for pair in expenses.windows(2) {
            assert!(pair[0].date >= pair[1].date);
            if pair[0].date == pair[1].date {
                assert!(pair[0].created_at >= pair[1].created_at);
            }
        }
    }

    #[test]
    fn test_empty_filter_keeps_everything_sorted() {
        let result = apply(&sample(), &FilterSpec::new());
        assert_eq!(result.len(), 4);
        assert_sorted(&result);
        assert_eq!(result[0].description, "Team LUNCH");
        // Same day: the one created later comes first
        assert_eq!(result[1].description, "Bus fare");
        assert_eq!(result[2].description, "Produce market");
    }

    #[test]
    fn test_category_filter() {
        let records = vec![
            expense(date(2024, 1, 1), 9, Category::Groceries, PaymentMethod::DebitCard, "", 1000),
            expense(date(2024, 1, 1), 9, Category::Transport, PaymentMethod::DebitCard, "", 500),
        ];
        let result = apply(&records, &FilterSpec::new().category(Category::Transport));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, Category::Transport);
        assert_eq!(result[0].amount, Money::from_cents(500));
    }

    #[test]
    fn test_payment_method_filter() {
        let result = apply(&sample(), &FilterSpec::new().payment_method(PaymentMethod::CreditCard));
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.payment_method == PaymentMethod::CreditCard));
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let filter = FilterSpec::new().date_range(date(2024, 1, 1), date(2024, 1, 3));
        let result = apply(&sample(), &filter);
        assert_eq!(result.len(), 3);

        let only_start = FilterSpec::new().start_date(date(2024, 1, 3));
        assert_eq!(apply(&sample(), &only_start).len(), 1);

        let only_end = FilterSpec::new().end_date(date(2023, 12, 31));
        assert_eq!(apply(&sample(), &only_end).len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let result = apply(&sample(), &FilterSpec::new().search("lunch"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "Team LUNCH");

        let result = apply(&sample(), &FilterSpec::new().search("MARK"));
        assert_eq!(result.len(), 1);

        // Empty search matches records with empty descriptions too
        assert_eq!(apply(&sample(), &FilterSpec::new().search("")).len(), 4);
    }

    #[test]
    fn test_combined_constraints() {
        let filter = FilterSpec::new()
            .category(Category::Groceries)
            .payment_method(PaymentMethod::CreditCard);
        let result = apply(&sample(), &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].amount, Money::from_cents(4200));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = FilterSpec::new().date_range(date(2023, 12, 1), date(2024, 1, 2));
        let once = apply(&sample(), &filter);
        let twice = apply(&once, &filter);
        assert_eq!(once, twice);
        assert_eq!(apply(&sample(), &filter), once);
    }

    #[test]
    fn test_last_days() {
        let today = date(2024, 1, 14);
        let filter = FilterSpec::last_days(14, today);
        assert_eq!(filter.start_date, Some(date(2024, 1, 1)));
        assert_eq!(filter.end_date, Some(today));

        let single = FilterSpec::last_days(0, today);
        assert_eq!(single.start_date, Some(today));
    }

    #[test]
    fn test_last_days_past_earliest_date_clamps() {
        let today = date(2024, 1, 14);
        let filter = FilterSpec::last_days(200_000_000, today);
        assert_eq!(filter.start_date, Some(NaiveDate::MIN));
        assert_eq!(apply(&sample(), &filter).len(), sample().len());
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!(Selection::parse_with("all", Category::parse), Some(Selection::All));
        assert_eq!(Selection::parse_with("All Categories", Category::parse), Some(Selection::All));
        assert_eq!(
            Selection::parse_with("travel", Category::parse),
            Some(Selection::Only(Category::Travel))
        );
        assert_eq!(Selection::parse_with("nope", Category::parse), None);
    }
}
