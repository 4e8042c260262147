//! Seed collection
//!
//! Used whenever no valid persisted state exists. The ten sample expenses are
//! placed at fixed day offsets before "today" so the dashboard always has
//! recent data to show; the output depends only on the clock.

use chrono::Duration;

use crate::clock::Clock;
use crate::models::{Category, Expense, ExpenseId, Money, PaymentMethod};

struct SeedEntry {
    days_ago: i64,
    category: Category,
    cents: i64,
    description: &'static str,
    payment_method: PaymentMethod,
}

const SEED: [SeedEntry; 10] = [
    SeedEntry {
        days_ago: 0,
        category: Category::Groceries,
        cents: 5423,
        description: "Produce market run",
        payment_method: PaymentMethod::DebitCard,
    },
    SeedEntry {
        days_ago: 1,
        category: Category::Transport,
        cents: 1850,
        description: "Ride share to office",
        payment_method: PaymentMethod::DigitalWallet,
    },
    SeedEntry {
        days_ago: 2,
        category: Category::DiningOut,
        cents: 2740,
        description: "Team lunch",
        payment_method: PaymentMethod::CreditCard,
    },
    SeedEntry {
        days_ago: 3,
        category: Category::Utilities,
        cents: 9213,
        description: "Electric bill",
        payment_method: PaymentMethod::BankTransfer,
    },
    SeedEntry {
        days_ago: 4,
        category: Category::Health,
        cents: 3690,
        description: "Pharmacy run",
        payment_method: PaymentMethod::DebitCard,
    },
    SeedEntry {
        days_ago: 5,
        category: Category::Entertainment,
        cents: 1599,
        description: "Streaming subscription",
        payment_method: PaymentMethod::CreditCard,
    },
    SeedEntry {
        days_ago: 6,
        category: Category::Groceries,
        cents: 8275,
        description: "Weekly grocery haul",
        payment_method: PaymentMethod::CreditCard,
    },
    SeedEntry {
        days_ago: 8,
        category: Category::Transport,
        cents: 4500,
        description: "Monthly transit pass",
        payment_method: PaymentMethod::DebitCard,
    },
    SeedEntry {
        days_ago: 10,
        category: Category::Shopping,
        cents: 6822,
        description: "Household supplies",
        payment_method: PaymentMethod::DebitCard,
    },
    SeedEntry {
        days_ago: 14,
        category: Category::Health,
        cents: 12000,
        description: "Annual checkup copay",
        payment_method: PaymentMethod::CreditCard,
    },
];

/// Build the seed collection relative to the clock's today
///
/// Entries come back most recent first, which is already the store order.
pub fn seed_expenses(clock: &dyn Clock) -> Vec<Expense> {
    let today = clock.today();
    let now = clock.now();

    SEED.iter()
        .enumerate()
        .map(|(index, entry)| {
            let offset = Duration::days(entry.days_ago);
            Expense {
                id: ExpenseId::seeded(index),
                date: today - offset,
                created_at: now - offset,
                category: entry.category,
                payment_method: entry.payment_method,
                description: entry.description.to_string(),
                amount: Money::from_cents(entry.cents),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn clock() -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_expenses(&clock()), seed_expenses(&clock()));
    }

    #[test]
    fn test_seed_offsets() {
        let seed = seed_expenses(&clock());
        assert_eq!(seed.len(), 10);

        let today = clock().today();
        let offsets: Vec<i64> = seed.iter().map(|e| (today - e.date).num_days()).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4, 5, 6, 8, 10, 14]);

        for expense in &seed {
            assert_eq!(expense.created_at.date_naive(), expense.date);
        }
    }

    #[test]
    fn test_seed_ids_unique_and_amounts_positive() {
        let seed = seed_expenses(&clock());
        let ids: HashSet<_> = seed.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), seed.len());
        assert!(seed.iter().all(|e| e.validate().is_ok()));
    }

    #[test]
    fn test_seed_is_sorted_recent_first() {
        let seed = seed_expenses(&clock());
        for pair in seed.windows(2) {
            assert!(pair[0].cmp_recent_first(&pair[1]).is_le());
        }
    }

    #[test]
    fn test_seed_first_entry() {
        let seed = seed_expenses(&clock());
        assert_eq!(seed[0].category, Category::Groceries);
        assert_eq!(seed[0].amount, Money::from_cents(5423));
        assert_eq!(seed[0].description, "Produce market run");
        assert_eq!(seed[0].date, clock().today());
    }
}
