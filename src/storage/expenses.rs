//! Expense store
//!
//! Owns the expense collection, keeps it sorted most recent first, and writes
//! the whole collection to the blob store after every change. Persistence and
//! audit failures are logged and never undo an in-memory change.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::audit::{AuditEntry, AuditLogger};
use crate::clock::Clock;
use crate::config::DashboardPaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money, NewExpense};
use crate::services::filter::sort_recent_first;

use super::blob::{BlobStore, FileBlobStore};
use super::seed::seed_expenses;

/// Key of the persisted collection; bump the version when the layout changes
pub const STORAGE_KEY: &str = "expense-dashboard:v1";

/// Where an unreadable collection is copied before seed data replaces it
pub const UNREADABLE_KEY: &str = "expense-dashboard:v1:unreadable";

/// Persisted layout: `{ "expenses": [ ... ] }`
#[derive(Serialize)]
struct PayloadRef<'a> {
    expenses: &'a [Expense],
}

/// Where the collection came from on `load`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Restored from the persisted blob
    Persisted,
    /// Nothing stored yet; seed data was used
    Missing,
    /// Stored blob was unreadable; seed data was used
    Recovered(String),
}

impl LoadSource {
    pub fn is_seeded(&self) -> bool {
        !matches!(self, LoadSource::Persisted)
    }
}

/// The single owner of the expense collection
pub struct ExpenseStore {
    blobs: Box<dyn BlobStore>,
    clock: Arc<dyn Clock>,
    audit: Option<AuditLogger>,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store; call `load` to restore persisted state
    pub fn new(blobs: Box<dyn BlobStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            blobs,
            clock,
            audit: None,
            expenses: Vec::new(),
        }
    }

    /// Record additions and removals in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Open the file-backed store under `paths` and load it
    pub fn open(paths: &DashboardPaths, clock: Arc<dyn Clock>) -> ExpenseResult<(Self, LoadSource)> {
        paths.ensure_directories()?;

        let mut store = Self::new(Box::new(FileBlobStore::new(paths.data_dir())), clock)
            .with_audit(AuditLogger::new(paths.audit_log()));
        let source = store.load();
        Ok((store, source))
    }

    /// Restore the collection from the blob store, falling back to seed data
    ///
    /// Never fails: a missing or malformed blob is replaced by the seed
    /// collection, which is then persisted. A malformed blob is first copied
    /// to [`UNREADABLE_KEY`] so it can be repaired by hand.
    pub fn load(&mut self) -> LoadSource {
        let source = match self.read_persisted() {
            Ok(Some(expenses)) => {
                info!("Loaded {} expenses from {}", expenses.len(), STORAGE_KEY);
                self.expenses = expenses;
                LoadSource::Persisted
            }
            Ok(None) => {
                info!("No stored expenses under {}; using seed data", STORAGE_KEY);
                LoadSource::Missing
            }
            Err(err) => {
                warn!("{}; using seed data", err);
                self.keep_unreadable();
                LoadSource::Recovered(err.to_string())
            }
        };

        if source.is_seeded() {
            self.expenses = seed_expenses(self.clock.as_ref());
            self.persist_or_log();
        }

        source
    }

    /// Validate and insert a new expense
    ///
    /// # Errors
    ///
    /// `InvalidAmount` if the amount is not a positive finite number; the
    /// collection is left unchanged.
    pub fn add(&mut self, candidate: NewExpense) -> ExpenseResult<Expense> {
        let amount = Money::from_f64(candidate.amount)
            .filter(|amount| amount.is_positive())
            .ok_or_else(|| {
                ExpenseError::InvalidAmount(format!(
                    "{} (must be a positive number)",
                    candidate.amount
                ))
            })?;

        let id = self.fresh_id();
        let now = self.clock.now();
        let expense = Expense::from_new(candidate, id, amount, now);

        self.expenses.push(expense.clone());
        sort_recent_first(&mut self.expenses);
        debug!("Added expense {} ({})", expense.id, expense.amount);

        self.persist_or_log();
        self.audit_or_log(AuditEntry::create(now, &expense));

        Ok(expense)
    }

    /// Remove an expense by id, returning it; absent ids are a no-op
    pub fn remove(&mut self, id: &ExpenseId) -> Option<Expense> {
        let position = self.expenses.iter().position(|e| &e.id == id)?;
        let removed = self.expenses.remove(position);
        debug!("Removed expense {}", removed.id);

        self.persist_or_log();
        self.audit_or_log(AuditEntry::delete(self.clock.now(), &removed));

        Some(removed)
    }

    /// The full collection, most recent first
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get an expense by ID
    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Find an expense by full UUID or short display id
    pub fn find(&self, identifier: &str) -> ExpenseResult<&Expense> {
        let mut matches = self.expenses.iter().filter(|e| e.id.matches(identifier));
        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (Some(_), Some(_)) => Err(ExpenseError::Validation(format!(
                "'{}' matches more than one expense; use the full id",
                identifier
            ))),
            (None, _) => Err(ExpenseError::expense_not_found(identifier)),
        }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The clock this store stamps records with
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// The underlying blob store
    pub fn blobs(&self) -> &dyn BlobStore {
        self.blobs.as_ref()
    }

    /// Write the whole collection to the blob store
    pub fn persist(&mut self) -> ExpenseResult<()> {
        let raw = encode_payload(&self.expenses)?;
        self.blobs.set(STORAGE_KEY, &raw)
    }

    fn persist_or_log(&mut self) {
        if let Err(err) = self.persist() {
            warn!("Failed to persist expenses: {}", err);
        }
    }

    fn audit_or_log(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(err) = logger.log(&entry) {
                warn!("Failed to write audit entry: {}", err);
            }
        }
    }

    fn keep_unreadable(&mut self) {
        let Ok(Some(raw)) = self.blobs.get(STORAGE_KEY) else {
            return;
        };
        match self.blobs.set(UNREADABLE_KEY, &raw) {
            Ok(()) => warn!("Unreadable expenses copied to {}", UNREADABLE_KEY),
            Err(err) => warn!("Failed to copy unreadable expenses: {}", err),
        }
    }

    fn fresh_id(&self) -> ExpenseId {
        loop {
            let id = ExpenseId::new();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn read_persisted(&self) -> ExpenseResult<Option<Vec<Expense>>> {
        let raw = self
            .blobs
            .get(STORAGE_KEY)
            .map_err(|e| ExpenseError::MalformedPersistedState(e.to_string()))?;
        raw.map(|raw| decode_payload(&raw)).transpose()
    }
}

/// Serialize a collection into the persisted layout
pub fn encode_payload(expenses: &[Expense]) -> ExpenseResult<String> {
    Ok(serde_json::to_string(&PayloadRef { expenses })?)
}

/// Parse and validate a persisted payload, returning it sorted most recent first
///
/// # Errors
///
/// `MalformedPersistedState` if the text is not JSON, has no `expenses`
/// array, or any element is not a valid expense (including duplicate ids).
pub fn decode_payload(raw: &str) -> ExpenseResult<Vec<Expense>> {
    let malformed = ExpenseError::MalformedPersistedState;

    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| malformed(format!("invalid JSON: {}", e)))?;

    let items = value
        .get("expenses")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| malformed("payload has no `expenses` array".into()))?;

    let mut seen = HashSet::with_capacity(items.len());
    let mut expenses = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let expense = Expense::deserialize(item)
            .map_err(|e| malformed(format!("expense #{}: {}", index, e)))?;
        expense.validate().map_err(malformed)?;
        if !seen.insert(expense.id.clone()) {
            return Err(malformed(format!("duplicate expense id {}", expense.id)));
        }
        expenses.push(expense);
    }

    sort_recent_first(&mut expenses);
    Ok(expenses)
}
