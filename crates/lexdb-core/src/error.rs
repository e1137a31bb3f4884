//! Error types shared by the lexdb crates.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexError {
    /// A reference word list could not be read.
    #[error("failed to read word list {path:?}: {source}")]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type LexResult<T> = Result<T, LexError>;
