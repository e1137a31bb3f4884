//! Run configuration for a database build.

use std::path::{Path, PathBuf};

use crate::error::{BuildError, BuildResult};

// ─── Configuration ─────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Word-frequency CSV (`word,count` rows).
    pub frequency_path: PathBuf,
    /// Dictionary dump, one JSON object per line.
    pub dictionary_path: PathBuf,
    /// SQLite database file to create or update (default: stage1.sqlite3).
    pub db_path: PathBuf,
    /// Directory holding the reference word lists (default: lists).
    pub lists_dir: PathBuf,
    /// Classified rows buffered before each insert (default: 100000).
    pub dictionary_batch: usize,
    /// Classified entries between progress messages (default: 10000).
    pub dictionary_progress: usize,
    /// Frequency rows buffered before each insert (default: 1000000).
    pub frequency_batch: usize,
    /// Frequency rows between progress messages (default: 100000).
    pub frequency_progress: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            frequency_path: PathBuf::from("frequency.csv"),
            dictionary_path: PathBuf::from("dictionary.jsonl"),
            db_path: PathBuf::from("stage1.sqlite3"),
            lists_dir: PathBuf::from("lists"),
            dictionary_batch: 100_000,
            dictionary_progress: 10_000,
            frequency_batch: 1_000_000,
            frequency_progress: 100_000,
        }
    }
}

impl BuildConfig {
    /// Check input file extensions. Touches nothing on disk.
    pub fn validate(&self) -> BuildResult<()> {
        if !has_suffix(&self.frequency_path, ".csv") {
            return Err(BuildError::usage(format!(
                "frequency file must be a csv file: {:?}",
                self.frequency_path
            )));
        }
        if !has_suffix(&self.dictionary_path, ".jsonl") {
            return Err(BuildError::usage(format!(
                "wiktionary file must be a jsonl file: {:?}",
                self.dictionary_path
            )));
        }
        let cadences = [
            self.dictionary_batch,
            self.dictionary_progress,
            self.frequency_batch,
            self.frequency_progress,
        ];
        if cadences.contains(&0) {
            return Err(BuildError::usage("batch sizes and progress intervals must be positive"));
        }
        Ok(())
    }
}

/// Plain suffix match on the file name, so a bare `.csv` also counts.
fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.to_string_lossy().ends_with(suffix)
}
