//! Lexical reference sets: known affixes and irregular forms.
//!
//! Loaded once from newline-delimited files and then passed by reference
//! into the classifier. All lookups are case-insensitive.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{LexError, LexResult};

pub const PREFIXES_FILE: &str = "prefixes.txt";
pub const SUFFIXES_FILE: &str = "suffixes.txt";
pub const IRREGULAR_PLURALS_FILE: &str = "irregular_plurals.txt";
pub const IRREGULAR_VERBS_FILE: &str = "irregular_verbs.txt";
pub const IRREGULAR_COMPARATIVES_FILE: &str = "irregular_comparatives_and_superlatives.txt";

/// A case-insensitive set of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Parse newline-delimited content. Lines are trimmed, blanks skipped.
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }

    pub fn load(path: &Path) -> LexResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LexError::WordList {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }
}

/// The full set of reference lists the classifier consults.
#[derive(Debug, Clone, Default)]
pub struct LexicalLists {
    /// Prefix tokens with their trailing hyphen (`un-`).
    pub prefixes: WordSet,
    /// Suffix tokens with their leading hyphen (`-ness`).
    pub suffixes: WordSet,
    /// Irregular plural headwords (`children`).
    pub irregular_plurals: WordSet,
    /// Root verbs whose inflections are irregular (`go`).
    pub irregular_verbs: WordSet,
    /// Root adjectives with irregular comparison (`good`).
    pub irregular_comparatives: WordSet,
}

impl LexicalLists {
    /// Load all five lists from `dir`.
    pub fn load(dir: &Path) -> LexResult<Self> {
        Ok(Self {
            prefixes: WordSet::load(&dir.join(PREFIXES_FILE))?,
            suffixes: WordSet::load(&dir.join(SUFFIXES_FILE))?,
            irregular_plurals: WordSet::load(&dir.join(IRREGULAR_PLURALS_FILE))?,
            irregular_verbs: WordSet::load(&dir.join(IRREGULAR_VERBS_FILE))?,
            irregular_comparatives: WordSet::load(&dir.join(IRREGULAR_COMPARATIVES_FILE))?,
        })
    }
}
