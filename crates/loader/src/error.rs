//! Loader error types.

use interview_core::insert::InsertError;
use interview_core::question::QuestionFileError;
use thiserror::Error;

/// Result type alias for the loader.
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Errors that end a load run.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error(transparent)]
    QuestionFile(#[from] QuestionFileError),

    #[error("Error during insertion process: {0}")]
    Insert(#[from] InsertError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
