//! Key-value blob stores
//!
//! The expense collection is persisted as one JSON string under one key.
//! `FileBlobStore` keeps each key in its own file; `MemoryBlobStore` is an
//! in-process map for tests and embedding.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::ExpenseResult;

use super::file_io::{read_text, write_atomic};

/// A string-keyed store of string blobs
pub trait BlobStore {
    /// Fetch the blob stored under `key`, if any
    fn get(&self, key: &str) -> ExpenseResult<Option<String>>;

    /// Replace the blob stored under `key`
    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()>;
}

/// Blob store backed by one JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File that holds `key`, e.g. `expense-dashboard:v1` → `expense-dashboard.v1.json`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
                _ => '.',
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        read_text(self.path_for(key))
    }

    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()> {
        write_atomic(self.path_for(key), value.as_bytes())
    }
}

/// In-memory blob store
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. with a corrupt payload in tests
    pub fn with_blob(mut self, key: &str, value: impl Into<String>) -> Self {
        self.blobs.insert(key.to_string(), value.into());
        self
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ExpenseResult<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
