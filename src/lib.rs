//! Expense Dashboard - local expense tracking
//!
//! This library provides the core of the `expenses` command-line dashboard:
//! a persisted collection of expense records, a filter engine over it, and
//! aggregations for the spending overview and charts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `clock`: Injectable source of "now" and "today"
//! - `models`: Core data models (expenses, ids, money)
//! - `storage`: Blob storage and the expense store
//! - `services`: Filtering and aggregation
//! - `audit`: Audit logging of additions and removals
//! - `display`: Terminal tables and charts
//! - `export`: CSV and JSON export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use expense_dashboard::clock::SystemClock;
//! use expense_dashboard::config::DashboardPaths;
//! use expense_dashboard::storage::ExpenseStore;
//!
//! let paths = DashboardPaths::new()?;
//! let (store, _source) = ExpenseStore::open(&paths, Arc::new(SystemClock))?;
//! ```

pub mod audit;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
