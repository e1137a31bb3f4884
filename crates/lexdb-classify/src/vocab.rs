//! Fixed vocabularies used by the classifier.

/// Parts of speech an entry may carry and still count as a real word.
pub const VALID_POS: &[&str] = &[
    "adj", "adv", "conj", "noun", "det", "pron", "num", "verb", "particle", "prep",
];

/// Sense tags that disqualify a sense outright.
pub const OTHER_INVALID_TAGS: &[&str] = &[
    "slang",
    "dialectical",
    "vulgar",
    "obsolete",
    "alt-of",
    "abbreviation",
    "humorous",
    "nonstandard",
    "informal",
    "Internet",
    "archaic",
];

/// Sense categories that disqualify a sense outright.
pub const INVALID_CATEGORIES: &[&str] = &["Furry fandom", "Paraphilias"];

pub fn is_valid_pos(pos: &str) -> bool {
    VALID_POS.contains(&pos)
}
