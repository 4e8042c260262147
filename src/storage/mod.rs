//! Storage layer for the expense dashboard
//!
//! The whole collection lives in one versioned JSON blob. Blobs are written
//! atomically through `file_io`; the store falls back to a deterministic seed
//! collection whenever the blob is missing or unreadable.

pub mod blob;
pub mod expenses;
pub mod file_io;
pub mod seed;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use expenses::{
    decode_payload, encode_payload, ExpenseStore, LoadSource, STORAGE_KEY, UNREADABLE_KEY,
};
pub use file_io::{read_json, write_json_atomic};
pub use seed::seed_expenses;
