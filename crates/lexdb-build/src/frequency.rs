//! Frequency ingest: `word,count` CSV rows into the frequency table.

use std::io::Read;

use crate::config::BuildConfig;
use crate::error::BuildResult;
use crate::store::{FrequencyRow, Store};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyStats {
    /// Rows inserted into the table.
    pub rows_written: usize,
    /// Short, non-numeric or undecodable rows.
    pub rows_skipped: usize,
}

/// Parse one CSV record. `None` for short rows or non-integer counts.
fn parse_row(record: &csv::StringRecord) -> Option<FrequencyRow> {
    if record.len() < 2 {
        return None;
    }
    let frequency = record[1].trim().parse::<i64>().ok()?;
    Some(FrequencyRow {
        word: record[0].to_string(),
        frequency,
    })
}

/// Stream `reader` into the frequency table, flushing every
/// `config.frequency_batch` rows. The table must already exist.
pub fn ingest_frequency<R: Read>(
    store: &mut Store,
    reader: R,
    config: &BuildConfig,
) -> BuildResult<FrequencyStats> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut stats = FrequencyStats::default();
    let mut batch: Vec<FrequencyRow> = Vec::new();
    let mut record = csv::StringRecord::new();

    loop {
        match csv_reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                tracing::debug!("skipping unreadable csv row: {}", e);
                stats.rows_skipped += 1;
                continue;
            }
        }

        let Some(row) = parse_row(&record) else {
            tracing::debug!("skipping csv row {:?}", record);
            stats.rows_skipped += 1;
            continue;
        };

        batch.push(row);
        stats.rows_written += 1;

        if stats.rows_written % config.frequency_progress == 0 {
            tracing::info!("processed {} lines of csv", stats.rows_written);
        }
        if stats.rows_written % config.frequency_batch == 0 {
            tracing::info!("inserting {} frequency rows", batch.len());
            store.insert_frequencies(&batch)?;
            batch.clear();
        }
    }

    if !batch.is_empty() {
        tracing::info!("inserting {} frequency rows", batch.len());
        store.insert_frequencies(&batch)?;
    }

    Ok(stats)
}
