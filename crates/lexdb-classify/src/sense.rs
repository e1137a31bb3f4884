//! Sense admissibility rules.
//!
//! Rules run in a fixed order and the first one to reach a verdict wins:
//! form-of exclusion (with irregular-form overrides), other invalid tags,
//! invalid categories. A sense that survives all three is admitted.

use lexdb_core::{Diagnostic, LexicalLists, Sense};

use crate::vocab::{INVALID_CATEGORIES, OTHER_INVALID_TAGS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Admit,
    Reject(Diagnostic),
}

impl Verdict {
    pub fn is_admit(&self) -> bool {
        matches!(self, Verdict::Admit)
    }
}

/// Decide whether `sense` of headword `word` is admissible.
pub fn classify_sense(sense: &Sense, word: &str, lists: &LexicalLists) -> Verdict {
    if sense.is_form_of() {
        return form_of_verdict(sense, word, lists);
    }

    let bad_tags = matching(sense.tags.iter().map(String::as_str), OTHER_INVALID_TAGS);
    if !bad_tags.is_empty() {
        return Verdict::Reject(Diagnostic::InvalidTags(bad_tags));
    }

    let bad_categories = matching(sense.category_names(), INVALID_CATEGORIES);
    if !bad_categories.is_empty() {
        return Verdict::Reject(Diagnostic::InvalidCategories(bad_categories));
    }

    Verdict::Admit
}

/// Names from `names` found in `vocab`, each once, in order of appearance.
fn matching<'a>(names: impl Iterator<Item = &'a str>, vocab: &[&str]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for name in names {
        if vocab.iter().any(|v| *v == name) && !found.iter().any(|f| f == name) {
            found.push(name.to_string());
        }
    }
    found
}

/// Form-of senses are rejected unless they name an irregular form.
/// Each override is only consulted inside its own tag branch; plural is
/// checked before verb, verb before comparison.
fn form_of_verdict(sense: &Sense, word: &str, lists: &LexicalLists) -> Verdict {
    let root = sense.root_word();
    let root_in = |set: &lexdb_core::WordSet| root.is_some_and(|r| set.contains(r));

    if sense.has_tag("plural") {
        // Irregular plurals are listed by their plural spelling.
        if lists.irregular_plurals.contains(word) {
            return Verdict::Admit;
        }
        return Verdict::Reject(Diagnostic::FormOfPlural);
    }

    if sense.has_tag("verb") {
        if root_in(&lists.irregular_verbs) {
            return Verdict::Admit;
        }
        return Verdict::Reject(Diagnostic::FormOfVerb);
    }

    if sense.has_tag("comparative") || sense.has_tag("superlative") {
        if root_in(&lists.irregular_comparatives) {
            return Verdict::Admit;
        }
        return Verdict::Reject(Diagnostic::FormOfComparativeSuperlative);
    }

    Verdict::Reject(Diagnostic::FormOfOther)
}
