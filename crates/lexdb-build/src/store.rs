//! SQLite store for the frequency and dictionary tables.
//!
//! Every batch insert runs in its own transaction, so an aborted run keeps
//! exactly the batches that were flushed before the failure.

use std::path::Path;

use rusqlite::{params, Connection};

use lexdb_core::ClassificationResult;

use crate::error::BuildResult;

pub const FREQUENCY_TABLE: &str = "frequency";
pub const DICTIONARY_TABLE: &str = "wiktionary";

const CREATE_FREQUENCY: &str = "
    CREATE TABLE frequency (
        word TEXT PRIMARY KEY,
        frequency INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_frequency_word ON frequency(word);
    CREATE INDEX IF NOT EXISTS idx_frequency_frequency ON frequency(frequency);
";

const CREATE_DICTIONARY: &str = "
    CREATE TABLE wiktionary (
        word TEXT NOT NULL,
        definition TEXT NULL,
        audio_file_name TEXT NULL,
        is_real_word BOOLEAN NOT NULL DEFAULT 1,
        comments TEXT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_wiktionary_word_isreal ON wiktionary(word, is_real_word);
";

const INSERT_FREQUENCY: &str = "INSERT INTO frequency (word, frequency) VALUES (?1, ?2)";

const INSERT_DICTIONARY: &str = "INSERT INTO wiktionary \
    (word, definition, audio_file_name, is_real_word, comments) VALUES (?1, ?2, ?3, ?4, ?5)";

/// One row of the frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyRow {
    pub word: String,
    pub frequency: i64,
}

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> BuildResult<Self> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    pub fn open_in_memory() -> BuildResult<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn table_exists(&self, name: &str) -> BuildResult<bool> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
            [name],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    pub fn create_frequency_table(&self) -> BuildResult<()> {
        self.conn.execute_batch(CREATE_FREQUENCY)?;
        Ok(())
    }

    pub fn create_dictionary_table(&self) -> BuildResult<()> {
        self.conn.execute_batch(CREATE_DICTIONARY)?;
        Ok(())
    }

    pub fn drop_dictionary_table(&self) -> BuildResult<()> {
        self.conn.execute_batch("DROP TABLE IF EXISTS wiktionary")?;
        Ok(())
    }

    pub fn insert_frequencies(&mut self, rows: &[FrequencyRow]) -> BuildResult<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(INSERT_FREQUENCY)?;
            for row in rows {
                stmt.execute(params![row.word, row.frequency])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    pub fn insert_classifications(&mut self, rows: &[ClassificationResult]) -> BuildResult<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(INSERT_DICTIONARY)?;
            for row in rows {
                stmt.execute(params![
                    row.word,
                    row.definition,
                    row.audio_file_name,
                    row.is_real_word,
                    row.comments_column(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    pub fn count_rows(&self, table: &str) -> BuildResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }
}
