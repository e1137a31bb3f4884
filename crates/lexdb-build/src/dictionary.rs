//! Dictionary ingest: classify each JSON line and write one row per entry.

use std::io::BufRead;

use lexdb_classify::Classifier;
use lexdb_core::{ClassificationResult, WordEntry};

use crate::config::BuildConfig;
use crate::error::BuildResult;
use crate::store::Store;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Classification rows written.
    pub rows_written: usize,
    /// Rows among them with `is_real_word` set.
    pub real_words: usize,
    /// Lines that were not a valid dictionary record.
    pub rows_skipped: usize,
    /// Entries dropped for whitespace in the headword.
    pub entries_dropped: usize,
}

/// Stream line-delimited JSON from `reader` through `classifier` into the
/// dictionary table, flushing every `config.dictionary_batch` rows.
pub fn ingest_dictionary<R: BufRead>(
    store: &mut Store,
    mut reader: R,
    classifier: &Classifier,
    config: &BuildConfig,
) -> BuildResult<DictionaryStats> {
    let mut stats = DictionaryStats::default();
    let mut batch: Vec<ClassificationResult> = Vec::new();
    let mut line = Vec::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        line_no += 1;

        let entry: WordEntry = match serde_json::from_slice(&line) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("skipping line {}: {}", line_no, e);
                stats.rows_skipped += 1;
                continue;
            }
        };

        let Some(result) = classifier.classify(&entry) else {
            stats.entries_dropped += 1;
            continue;
        };

        if result.is_real_word {
            stats.real_words += 1;
        }
        batch.push(result);
        stats.rows_written += 1;

        if stats.rows_written % config.dictionary_progress == 0 {
            tracing::info!("processed {} lines", stats.rows_written);
        }
        if stats.rows_written % config.dictionary_batch == 0 {
            tracing::info!("inserting {} dictionary rows", batch.len());
            store.insert_classifications(&batch)?;
            batch.clear();
        }
    }

    if !batch.is_empty() {
        tracing::info!("inserting {} dictionary rows", batch.len());
        store.insert_classifications(&batch)?;
    }

    Ok(stats)
}
