//! Typed reasons recorded against an entry.
//!
//! Diagnostics stay structured until the persistence boundary, where
//! `Display` gives the short tag written to the `comments` column.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    NotLowercaseLettersOnly,
    InvalidPos,
    /// Prefix token including its trailing hyphen, e.g. `un-`.
    TrivialPrefix(String),
    /// Suffix token including its leading hyphen, e.g. `-ness`.
    TrivialSuffix(String),
    FormOfPlural,
    FormOfVerb,
    FormOfComparativeSuperlative,
    FormOfOther,
    InvalidTags(Vec<String>),
    InvalidCategories(Vec<String>),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NotLowercaseLettersOnly => write!(f, "not lowercase letters only"),
            Diagnostic::InvalidPos => write!(f, "invalid pos"),
            Diagnostic::TrivialPrefix(p) => write!(f, "trivial prefix {}", p),
            Diagnostic::TrivialSuffix(s) => write!(f, "trivial suffix {}", s),
            Diagnostic::FormOfPlural => write!(f, "form-of (plural)"),
            Diagnostic::FormOfVerb => write!(f, "form-of (verb)"),
            Diagnostic::FormOfComparativeSuperlative => {
                write!(f, "form-of (comparative/superlative)")
            }
            Diagnostic::FormOfOther => write!(f, "form-of (other)"),
            Diagnostic::InvalidTags(tags) => write!(f, "invalid tags {}", tags.join(",")),
            Diagnostic::InvalidCategories(cats) => {
                write!(f, "invalid categories {}", cats.join(","))
            }
        }
    }
}
