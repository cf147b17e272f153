use std::path::PathBuf;

use crate::errors::RoostError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read or write catalog at {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog file {} is corrupt: {message}", path.display())]
    Corrupt { path: PathBuf, message: String },

    #[error("Failed to serialize catalog: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },
}

impl RoostError for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            StoreError::IoError { .. } => "STORE_IO_ERROR",
            StoreError::Corrupt { .. } => "STORE_CORRUPT",
            StoreError::SerializationError { .. } => "STORE_SERIALIZATION_ERROR",
        }
    }
}
