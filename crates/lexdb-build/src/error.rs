use thiserror::Error;

use lexdb_core::LexError;

#[derive(Error, Debug)]
pub enum BuildError {
    /// Bad command-line input, detected before any I/O.
    #[error("usage error: {0}")]
    Usage(String),

    #[error(transparent)]
    Lists(#[from] LexError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl BuildError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}

pub type BuildResult<T> = Result<T, BuildError>;
