//! Money type for representing currency amounts
//!
//! Amounts are exact decimals, so sums never accumulate floating-point error
//! and nothing is rounded until it is shown. On the wire an amount is a plain
//! JSON number in currency units (e.g. `54.23`), which is what the persisted
//! blob holds.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Largest magnitude (in currency units) accepted for a single amount
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// A monetary amount in currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_dashboard::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Convert a floating-point amount in currency units without rounding it
    ///
    /// Returns `None` for NaN, infinities and magnitudes above [`MAX_AMOUNT`].
    ///
    /// # Examples
    /// ```
    /// use expense_dashboard::models::Money;
    /// assert_eq!(Money::from_f64(54.23).unwrap(), Money::from_cents(5423));
    /// assert!(Money::from_f64(f64::NAN).is_none());
    /// ```
    pub fn from_f64(units: f64) -> Option<Self> {
        if !units.is_finite() || units.abs() > MAX_AMOUNT {
            return None;
        }
        Decimal::try_from(units).ok().map(Self)
    }

    /// Create a zero Money amount
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The exact amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount rounded to cents, half away from zero
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// The amount in currency units as a float
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Format with a currency symbol and thousands separators, e.g. `$1,234.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.rounded();
        let fixed = format!("{:.2}", rounded.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        format!("{}{}{}.{}", sign, symbol, group_thousands(whole), fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        Money::from_f64(units)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", units)))
    }
}
