//! Error types for storage, validation and checklist operations.

use thiserror::Error;

/// Failure reported by a [`KeyValueStorage`](crate::storage::KeyValueStorage) backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("LMDB error: {0}")]
    Lmdb(#[from] lmdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored value is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Blocking storage task failed: {0}")]
    Task(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Why an item was refused at write time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("label must not be empty")]
    EmptyLabel,

    #[error("sets must be between 1 and {max}, got {sets}")]
    SetsOutOfRange { sets: u32, max: u32 },

    #[error("expected {sets} rep counts, got {reps}")]
    RepsCountMismatch { sets: u32, reps: usize },

    #[error("rep count for set {set} must be at least 1")]
    ZeroReps { set: usize },

    #[error("this checklist holds {expected} items")]
    WrongKind { expected: &'static str },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid item: {0}")]
    Validation(#[from] ValidationError),

    #[error("Index {index} out of range for checklist of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to read checklist: {0}")]
    StorageRead(StorageError),

    #[error("Failed to write checklist: {0}")]
    StorageWrite(StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
