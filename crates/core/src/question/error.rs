use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a questions file.
#[derive(Debug, Error)]
pub enum QuestionFileError {
    #[error("Could not find questions file: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read questions file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for questions file operations.
pub type Result<T> = std::result::Result<T, QuestionFileError>;
