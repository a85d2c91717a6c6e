//! Raw key-value persistence.
//!
//! A [`KeyValueStorage`] only moves text in and out under a key. Encoding checklists into
//! that text is the job of [`ChecklistStore`](crate::store::ChecklistStore), which is the
//! sole owner of the keys it writes.

mod lmdb_storage;
mod memory;

pub use lmdb_storage::LmdbStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;

use crate::error::StorageError;

#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Returns the raw value under `key`, or `None` if nothing was ever written.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the whole value under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
