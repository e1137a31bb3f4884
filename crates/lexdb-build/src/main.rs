use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lexdb_build::store::{DICTIONARY_TABLE, FREQUENCY_TABLE};
use lexdb_build::{ingest_dictionary, ingest_frequency, BuildConfig, BuildError, BuildResult, Store};
use lexdb_classify::Classifier;
use lexdb_core::LexicalLists;

#[derive(Parser)]
#[command(
    name = "lexdb-build",
    about = "Build the stage-one word database from frequency and dictionary dumps"
)]
struct Cli {
    /// Word-frequency CSV (`word,count` per row)
    #[arg(long)]
    frequency: PathBuf,
    /// Dictionary dump, one JSON object per line (.jsonl)
    #[arg(long)]
    wiktionary: PathBuf,
    /// SQLite database to create or update
    #[arg(long, default_value = "stage1.sqlite3")]
    db: PathBuf,
    /// Directory with prefixes.txt, suffixes.txt and the irregular-form lists
    #[arg(long, default_value = "lists")]
    lists: PathBuf,
    /// Dictionary rows per insert batch
    #[arg(long, default_value = "100000")]
    dictionary_batch: usize,
    /// Frequency rows per insert batch
    #[arg(long, default_value = "1000000")]
    frequency_batch: usize,
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> BuildConfig {
        BuildConfig {
            frequency_path: self.frequency,
            dictionary_path: self.wiktionary,
            db_path: self.db,
            lists_dir: self.lists,
            dictionary_batch: self.dictionary_batch,
            frequency_batch: self.frequency_batch,
            ..Default::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let config = cli.into_config();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ BuildError::Usage(_)) => {
            tracing::error!("{}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &BuildConfig) -> BuildResult<()> {
    config.validate()?;

    tracing::info!("Loading word lists from {:?}", config.lists_dir);
    let classifier = Classifier::new(LexicalLists::load(&config.lists_dir)?);

    let mut store = Store::open(&config.db_path)?;

    let exists = store.table_exists(FREQUENCY_TABLE)?;
    if exists && store.count_rows(FREQUENCY_TABLE)? > 0 {
        tracing::info!("frequency table already exists");
    } else {
        // Open the source first so a bad path never leaves an empty table.
        let file = File::open(&config.frequency_path)?;
        if exists {
            tracing::info!("filling empty frequency table from {:?}", config.frequency_path);
        } else {
            tracing::info!("creating frequency table from {:?}", config.frequency_path);
            store.create_frequency_table()?;
        }
        let stats = ingest_frequency(&mut store, BufReader::new(file), config)?;
        tracing::info!(
            "frequency table done: {} rows, {} skipped",
            stats.rows_written,
            stats.rows_skipped
        );
    }

    if store.table_exists(DICTIONARY_TABLE)? {
        tracing::info!("dropping existing {} table", DICTIONARY_TABLE);
        store.drop_dictionary_table()?;
    }

    tracing::info!("creating {} table from {:?}", DICTIONARY_TABLE, config.dictionary_path);
    store.create_dictionary_table()?;
    let file = File::open(&config.dictionary_path)?;
    let stats = ingest_dictionary(&mut store, BufReader::new(file), &classifier, config)?;
    tracing::info!(
        "{} table done: {} rows ({} real words), {} malformed lines, {} multi-word entries dropped",
        DICTIONARY_TABLE,
        stats.rows_written,
        stats.real_words,
        stats.rows_skipped,
        stats.entries_dropped
    );

    Ok(())
}
