use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::error::{ConfigError, StorageError, StoreError};

/// Envelope every FFI call returns to the host, serialized as JSON.
#[derive(Debug, Serialize, Deserialize)]
pub enum AppResponse {
    StorageError(String),
    SerializationError(String),
    NotFound(String),
    ValidationError(String),
    IndexOutOfRange(String),
    BadRequest(String),
    Ok(String),
}

impl Display for AppResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AppResponse::StorageError(msg) => write!(f, "Storage error: {}", msg),
            AppResponse::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            AppResponse::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppResponse::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppResponse::IndexOutOfRange(msg) => write!(f, "Index out of range: {}", msg),
            AppResponse::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppResponse::Ok(msg) => write!(f, "Ok: {}", msg),
        }
    }
}

impl From<StoreError> for AppResponse {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => AppResponse::ValidationError(e.to_string()),
            StoreError::IndexOutOfRange { .. } => AppResponse::IndexOutOfRange(err.to_string()),
            StoreError::StorageRead(_) | StoreError::StorageWrite(_) => {
                AppResponse::StorageError(err.to_string())
            }
            StoreError::Serialization(e) => AppResponse::from(e),
        }
    }
}

impl From<StorageError> for AppResponse {
    fn from(err: StorageError) -> Self {
        AppResponse::StorageError(err.to_string())
    }
}

impl From<ConfigError> for AppResponse {
    fn from(err: ConfigError) -> Self {
        AppResponse::BadRequest(err.to_string())
    }
}

impl From<SerdeError> for AppResponse {
    fn from(err: SerdeError) -> Self {
        AppResponse::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl AppResponse {
    pub fn success(msg: impl Into<String>) -> Self {
        AppResponse::Ok(msg.into())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, AppResponse::Ok(_))
    }
}
