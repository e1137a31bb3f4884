//! Builds the stage-one lexical database from a word-frequency CSV and a
//! line-delimited JSON dictionary dump.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod frequency;
pub mod store;

pub use config::BuildConfig;
pub use dictionary::{ingest_dictionary, DictionaryStats};
pub use error::{BuildError, BuildResult};
pub use frequency::{ingest_frequency, FrequencyStats};
pub use store::Store;
