//! Trivial-affix detection from etymology text.
//!
//! Only the two bare shapes `From un- + happy.` and `From happy + -ness.`
//! are recognised. Anything longer or phrased differently is left alone.

use once_cell::sync::Lazy;
use regex::Regex;

use lexdb_core::{Diagnostic, LexicalLists};

static PREFIX_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^From ([a-z]+-)\s\+\s([a-z]+)\.$").expect("prefix pattern"));
static SUFFIX_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^From ([a-z]+)\s\+\s(-[a-z]+)\.$").expect("suffix pattern"));

/// Returns a `TrivialPrefix` or `TrivialSuffix` diagnostic when the
/// etymology is a plain composition with a known affix.
pub fn trivial_affix(etymology: &str, lists: &LexicalLists) -> Option<Diagnostic> {
    // Matching only; the stored definition keeps its original text.
    let ascii: String = etymology.chars().filter(char::is_ascii).collect();

    if let Some(caps) = PREFIX_FORM.captures(&ascii) {
        let prefix = &caps[1];
        if lists.prefixes.contains(prefix) {
            return Some(Diagnostic::TrivialPrefix(prefix.to_string()));
        }
    } else if let Some(caps) = SUFFIX_FORM.captures(&ascii) {
        let suffix = &caps[2];
        if lists.suffixes.contains(suffix) {
            return Some(Diagnostic::TrivialSuffix(suffix.to_string()));
        }
    }

    None
}
