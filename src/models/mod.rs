//! Core data models for the expense dashboard
//!
//! This module contains the data structures that describe a single expense:
//! its identifier, amount, category and payment method.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Category, Expense, NewExpense, PaymentMethod};
pub use ids::ExpenseId;
pub use money::Money;
