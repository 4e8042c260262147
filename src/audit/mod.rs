//! Audit logging for the expense dashboard
//!
//! Every expense that is added or removed is recorded in an append-only audit
//! log, one JSON object per line.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_dashboard::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(clock.now(), &expense))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
