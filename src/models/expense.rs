//! Expense model
//!
//! An expense is a single dated outflow with a category, a payment method and
//! an optional description. Records are immutable once stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Spending category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    #[serde(rename = "Dining Out")]
    DiningOut,
    Transport,
    Housing,
    Utilities,
    Health,
    Entertainment,
    Shopping,
    Travel,
    Education,
    Other,
}

impl Category {
    /// Every category, in the order they are offered to the user
    pub const ALL: [Category; 11] = [
        Self::Groceries,
        Self::DiningOut,
        Self::Transport,
        Self::Housing,
        Self::Utilities,
        Self::Health,
        Self::Entertainment,
        Self::Shopping,
        Self::Travel,
        Self::Education,
        Self::Other,
    ];

    /// Display name, identical to the persisted form
    pub fn name(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::DiningOut => "Dining Out",
            Self::Transport => "Transport",
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Parse a category from user input (case, space and dash insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let key = normalize(s);
        Self::ALL.into_iter().find(|c| normalize(c.name()) == key)
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Groceries
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Digital Wallet")]
    DigitalWallet,
}

impl PaymentMethod {
    /// Every payment method, in the order they are offered to the user
    pub const ALL: [PaymentMethod; 5] = [
        Self::Cash,
        Self::DebitCard,
        Self::CreditCard,
        Self::BankTransfer,
        Self::DigitalWallet,
    ];

    /// Display name, identical to the persisted form
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::DebitCard => "Debit Card",
            Self::CreditCard => "Credit Card",
            Self::BankTransfer => "Bank Transfer",
            Self::DigitalWallet => "Digital Wallet",
        }
    }

    /// Parse a payment method from user input (case, space and dash insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let key = normalize(s);
        match key.as_str() {
            "debit" => return Some(Self::DebitCard),
            "credit" => return Some(Self::CreditCard),
            "transfer" => return Some(Self::BankTransfer),
            "wallet" => return Some(Self::DigitalWallet),
            _ => {}
        }
        Self::ALL.into_iter().find(|m| normalize(m.name()) == key)
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::DebitCard
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A stored expense record
///
/// Field names follow the persisted blob layout (`createdAt`, `paymentMethod`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Day the expense occurred
    pub date: NaiveDate,

    /// When the record was added; orders same-day expenses
    pub created_at: DateTime<Utc>,

    pub category: Category,

    pub payment_method: PaymentMethod,

    #[serde(default)]
    pub description: String,

    /// Always positive
    pub amount: Money,
}

impl Expense {
    /// Build a stored record from a validated submission
    pub fn from_new(new: NewExpense, id: ExpenseId, amount: Money, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            date: new.date,
            created_at,
            category: new.category,
            payment_method: new.payment_method,
            description: new.description.trim().to_string(),
            amount,
        }
    }

    /// Short label used in audit entries and confirmations
    pub fn label(&self) -> String {
        if self.description.is_empty() {
            format!("{} {}", self.date, self.category)
        } else {
            format!("{} {}", self.date, self.description)
        }
    }

    /// Check the invariants a persisted record must satisfy
    pub fn validate(&self) -> Result<(), String> {
        if !self.amount.is_positive() {
            return Err(format!(
                "expense {} has non-positive amount {}",
                self.id, self.amount
            ));
        }
        Ok(())
    }

    /// Most recent first: date descending, then creation time descending
    pub fn cmp_recent_first(&self, other: &Self) -> Ordering {
        other
            .date
            .cmp(&self.date)
            .then_with(|| other.created_at.cmp(&self.created_at))
    }
}

/// A user submission for a new expense, before validation
///
/// `amount` is the raw number the user entered; the store rejects anything
/// that is not a positive finite value.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: Category,
    pub payment_method: PaymentMethod,
    pub description: String,
    pub amount: f64,
}

impl NewExpense {
    /// Create a submission with the default category and payment method
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            category: Category::default(),
            payment_method: PaymentMethod::default(),
            description: String::new(),
            amount,
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Expense {
        Expense {
            id: ExpenseId::seeded(0),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap(),
            category: Category::DiningOut,
            payment_method: PaymentMethod::CreditCard,
            description: "Team lunch".into(),
            amount: Money::from_cents(2740),
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("groceries"), Some(Category::Groceries));
        assert_eq!(Category::parse("Dining Out"), Some(Category::DiningOut));
        assert_eq!(Category::parse("dining-out"), Some(Category::DiningOut));
        assert_eq!(Category::parse("pets"), None);
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!(PaymentMethod::parse("cash"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::parse("credit card"), Some(PaymentMethod::CreditCard));
        assert_eq!(PaymentMethod::parse("debit"), Some(PaymentMethod::DebitCard));
        assert_eq!(PaymentMethod::parse("digital_wallet"), Some(PaymentMethod::DigitalWallet));
        assert_eq!(PaymentMethod::parse("cheque"), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Category::DiningOut.to_string(), "Dining Out");
        assert_eq!(PaymentMethod::BankTransfer.to_string(), "Bank Transfer");
    }

    #[test]
    fn test_serialized_field_layout() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["date"], "2024-01-01");
        assert_eq!(value["category"], "Dining Out");
        assert_eq!(value["paymentMethod"], "Credit Card");
        assert_eq!(value["description"], "Team lunch");
        assert_eq!(value["amount"], 27.4);
        assert!(value["createdAt"].as_str().unwrap().starts_with("2024-01-01T09:30:00"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_category() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["category"] = "Pets".into();
        assert!(serde_json::from_value::<Expense>(value).is_err());
    }

    #[test]
    fn test_deserialize_rejects_bad_date() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["date"] = "2024-13-40".into();
        assert!(serde_json::from_value::<Expense>(value).is_err());
    }

    #[test]
    fn test_validate_amount() {
        let mut expense = sample();
        assert!(expense.validate().is_ok());
        expense.amount = Money::zero();
        assert!(expense.validate().is_err());
    }

    #[test]
    fn test_cmp_recent_first() {
        let older = sample();
        let mut newer_same_day = sample();
        newer_same_day.created_at = older.created_at + chrono::Duration::hours(1);
        let mut later_day = sample();
        later_day.date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        assert_eq!(newer_same_day.cmp_recent_first(&older), Ordering::Less);
        assert_eq!(later_day.cmp_recent_first(&newer_same_day), Ordering::Less);
        assert_eq!(older.cmp_recent_first(&older), Ordering::Equal);
    }

    #[test]
    fn test_from_new_trims_description() {
        let new = NewExpense::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 3.5)
            .description("  coffee  ");
        let expense = Expense::from_new(new, ExpenseId::new(), Money::from_cents(350), Utc::now());
        assert_eq!(expense.description, "coffee");
        assert_eq!(expense.label(), "2024-01-01 coffee");
    }
}
