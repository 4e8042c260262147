//! Audit entry data structures
//!
//! Defines the structure of audit log entries. Expenses are immutable, so the
//! only operations that reach the log are additions and removals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was added
    Create,
    /// Expense was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Short display id of the affected expense
    pub expense_id: String,

    /// Human-readable label (date plus description or category)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The expense before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The expense after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create an audit entry for an added expense
    pub fn create(timestamp: DateTime<Utc>, expense: &Expense) -> Self {
        Self {
            timestamp,
            operation: Operation::Create,
            expense_id: expense.id.to_string(),
            label: Some(expense.label()),
            before: None,
            after: serde_json::to_value(expense).ok(),
        }
    }

    /// Create an audit entry for a removed expense
    pub fn delete(timestamp: DateTime<Utc>, expense: &Expense) -> Self {
        Self {
            timestamp,
            operation: Operation::Delete,
            expense_id: expense.id.to_string(),
            label: Some(expense.label()),
            before: serde_json::to_value(expense).ok(),
            after: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense_id
        );

        if let Some(label) = &self.label {
            output.push_str(&format!(" ({})", label));
        }

        let amount = self
            .after
            .as_ref()
            .or(self.before.as_ref())
            .and_then(|value| value.get("amount"))
            .and_then(|amount| amount.as_f64());
        if let Some(amount) = amount {
            output.push_str(&format!(" {:.2}", amount));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money, PaymentMethod};
    use chrono::{NaiveDate, TimeZone};

    fn expense() -> Expense {
        Expense {
            id: ExpenseId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap(),
            category: Category::Health,
            payment_method: PaymentMethod::DebitCard,
            description: "Pharmacy run".into(),
            amount: Money::from_cents(3690),
        }
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 1).unwrap()
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(stamp(), &expense());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.expense_id, "exp-550e8400");
        assert!(entry.before.is_none());
        assert_eq!(entry.after.as_ref().unwrap()["description"], "Pharmacy run");
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(stamp(), &expense());

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(stamp(), &expense());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"before\""));
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.timestamp, stamp());
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::delete(stamp(), &expense()).format_human_readable();
        assert_eq!(
            formatted,
            "[2024-05-02 08:00:01 UTC] DELETE exp-550e8400 (2024-05-02 Pharmacy run) 36.90"
        );
    }
}
