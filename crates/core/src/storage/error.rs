use thiserror::Error;

/// Errors that can occur while writing a question to a store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },
    #[error("Write throttled: {0}")]
    Throttled(String),
    #[error("Invalid item: {0}")]
    Validation(String),
    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
