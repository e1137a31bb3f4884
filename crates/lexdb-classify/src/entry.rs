//! Entry classifier: turns one `WordEntry` into one `ClassificationResult`.

use std::ops::ControlFlow;

use lexdb_core::{ClassificationResult, Diagnostic, LexicalLists, Sense, WordEntry};

use crate::affix::trivial_affix;
use crate::sense::{classify_sense, Verdict};
use crate::vocab::is_valid_pos;

/// Outcome of walking an entry's senses in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SenseScan<'e> {
    /// First admissible sense, if any.
    pub admitted: Option<&'e Sense>,
    /// Rejection reason of the sense at index 0. Later reasons are dropped.
    pub first_rejection: Option<Diagnostic>,
}

pub struct Classifier {
    lists: LexicalLists,
}

impl Classifier {
    pub fn new(lists: LexicalLists) -> Self {
        Self { lists }
    }

    /// Classify one entry. Returns `None` when the headword contains
    /// whitespace; such entries are not recorded at all.
    pub fn classify(&self, entry: &WordEntry) -> Option<ClassificationResult> {
        if entry.word.chars().any(char::is_whitespace) {
            return None;
        }

        let mut comments = self.structural_findings(entry);
        let audio_file_name = entry.audio_file_name().map(str::to_string);

        // Shape problems take precedence; senses are not inspected.
        if !comments.is_empty() {
            return Some(ClassificationResult {
                word: entry.word.clone(),
                is_real_word: false,
                definition: None,
                audio_file_name,
                comments,
            });
        }

        let scan = self.scan_senses(&entry.word, &entry.senses);
        let definition = scan.admitted.map(Sense::definition);
        if definition.is_none() {
            comments.extend(scan.first_rejection);
        }

        Some(ClassificationResult {
            word: entry.word.clone(),
            is_real_word: definition.is_some(),
            definition,
            audio_file_name,
            comments,
        })
    }

    /// Headword shape, part of speech and trivial affix checks.
    /// Every violated check contributes its own diagnostic.
    pub fn structural_findings(&self, entry: &WordEntry) -> Vec<Diagnostic> {
        let mut findings = Vec::new();

        if !is_lowercase_letters_only(&entry.word) {
            findings.push(Diagnostic::NotLowercaseLettersOnly);
        }
        if !is_valid_pos(&entry.pos) {
            findings.push(Diagnostic::InvalidPos);
        }
        if let Some(etymology) = entry.etymology_text.as_deref() {
            findings.extend(trivial_affix(etymology, &self.lists));
        }

        findings
    }

    /// Fold over `senses` until the first admissible one.
    pub fn scan_senses<'e>(&self, word: &str, senses: &'e [Sense]) -> SenseScan<'e> {
        let folded = senses
            .iter()
            .enumerate()
            .try_fold(SenseScan::default(), |mut scan, (index, sense)| {
                match classify_sense(sense, word, &self.lists) {
                    Verdict::Admit => ControlFlow::Break(SenseScan {
                        admitted: Some(sense),
                        ..scan
                    }),
                    Verdict::Reject(reason) => {
                        if index == 0 {
                            scan.first_rejection = Some(reason);
                        }
                        ControlFlow::Continue(scan)
                    }
                }
            });

        match folded {
            ControlFlow::Break(scan) | ControlFlow::Continue(scan) => scan,
        }
    }
}

fn is_lowercase_letters_only(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexdb_core::{FormOfRef, Pronunciation};

    fn classifier() -> Classifier {
        Classifier::new(LexicalLists {
            prefixes: ["un-", "re-"].into_iter().collect(),
            suffixes: ["-ness"].into_iter().collect(),
            irregular_plurals: ["children"].into_iter().collect(),
            irregular_verbs: ["go"].into_iter().collect(),
            irregular_comparatives: ["good"].into_iter().collect(),
        })
    }

    fn parse(line: &str) -> WordEntry {
        serde_json::from_str(line).unwrap()
    }

    fn plain(gloss: &str) -> Sense {
        Sense {
            glosses: vec![gloss.to_string()],
            ..Default::default()
        }
    }

    fn slang(gloss: &str) -> Sense {
        Sense {
            tags: vec!["slang".into()],
            glosses: vec![gloss.to_string()],
            ..Default::default()
        }
    }

    fn noun(word: &str, senses: Vec<Sense>) -> WordEntry {
        WordEntry {
            word: word.into(),
            pos: "noun".into(),
            senses,
            ..Default::default()
        }
    }

    #[test]
    fn regular_plural_scenario() {
        let entry = parse(
            r#"{"word": "cats", "pos": "noun", "senses": [{"tags": ["plural", "noun"],
                "form_of": [{"word": "cat"}], "glosses": ["plural of cat"]}]}"#,
        );
        let result = classifier().classify(&entry).unwrap();
        assert!(!result.is_real_word);
        assert_eq!(result.definition, None);
        assert_eq!(result.comments_column().as_deref(), Some("form-of (plural)"));
    }

    #[test]
    fn plain_verb_scenario() {
        let entry = parse(
            r#"{"word": "run", "pos": "verb", "etymology_text": "From run.",
                "senses": [{"tags": ["verb"], "glosses": ["to move fast"]}]}"#,
        );
        let result = classifier().classify(&entry).unwrap();
        assert!(result.is_real_word);
        assert_eq!(result.definition.as_deref(), Some("to move fast"));
        assert_eq!(result.comments_column(), None);
    }

    #[test]
    fn headword_with_space_is_dropped() {
        let entry = noun("ice cream", vec![plain("a frozen dessert")]);
        assert!(classifier().classify(&entry).is_none());

        let tabbed = noun("ice\tcream", vec![plain("a frozen dessert")]);
        assert!(classifier().classify(&tabbed).is_none());
    }

    #[test]
    fn shape_and_pos_findings_both_fire() {
        let entry = WordEntry {
            word: "Paris".into(),
            pos: "name".into(),
            senses: vec![plain("capital of France")],
            ..Default::default()
        };
        let result = classifier().classify(&entry).unwrap();
        assert!(!result.is_real_word);
        assert_eq!(result.definition, None);
        assert_eq!(
            result.comments,
            vec![Diagnostic::NotLowercaseLettersOnly, Diagnostic::InvalidPos]
        );
    }

    #[test]
    fn non_letter_headwords_are_flagged() {
        for word in ["don't", "café", "x2", ""] {
            let result = classifier().classify(&noun(word, vec![plain("g")])).unwrap();
            assert!(!result.is_real_word, "{word:?}");
            assert_eq!(result.comments, vec![Diagnostic::NotLowercaseLettersOnly], "{word:?}");
        }
    }

    #[test]
    fn invalid_pos_alone_disqualifies() {
        let entry = WordEntry {
            word: "hello".into(),
            pos: "intj".into(),
            senses: vec![plain("a greeting")],
            ..Default::default()
        };
        let result = classifier().classify(&entry).unwrap();
        assert!(!result.is_real_word);
        assert_eq!(result.comments, vec![Diagnostic::InvalidPos]);
    }

    #[test]
    fn trivial_affix_skips_sense_inspection() {
        let entry = WordEntry {
            etymology_text: Some("From un- + happy.".into()),
            ..noun("unhappy", vec![slang("not happy")])
        };
        let result = classifier().classify(&entry).unwrap();
        assert!(!result.is_real_word);
        assert_eq!(result.comments_column().as_deref(), Some("trivial prefix un-"));
    }

    #[test]
    fn first_admissible_sense_wins() {
        let entry = noun(
            "bank",
            vec![slang("zero"), slang("one"), plain("two"), plain("three")],
        );
        let result = classifier().classify(&entry).unwrap();
        assert!(result.is_real_word);
        assert_eq!(result.definition.as_deref(), Some("two"));
        assert!(result.comments.is_empty());
    }

    #[test]
    fn only_first_sense_reason_is_kept() {
        let verb_form = Sense {
            tags: vec!["form-of".into(), "verb".into()],
            form_of: vec![FormOfRef { word: Some("walk".into()) }],
            ..Default::default()
        };
        let entry = noun("walks", vec![slang("a"), verb_form]);
        let result = classifier().classify(&entry).unwrap();
        assert!(!result.is_real_word);
        assert_eq!(
            result.comments,
            vec![Diagnostic::InvalidTags(vec!["slang".into()])]
        );
    }

    #[test]
    fn no_senses_means_no_comments() {
        let result = classifier().classify(&noun("thing", vec![])).unwrap();
        assert!(!result.is_real_word);
        assert_eq!(result.definition, None);
        assert_eq!(result.comments_column(), None);
    }

    #[test]
    fn irregular_plural_is_a_real_word() {
        let sense = Sense {
            tags: vec!["plural".into(), "form-of".into()],
            form_of: vec![FormOfRef { word: Some("child".into()) }],
            glosses: vec!["plural of".into(), "child".into()],
            ..Default::default()
        };
        let result = classifier().classify(&noun("children", vec![sense])).unwrap();
        assert!(result.is_real_word);
        assert_eq!(result.definition.as_deref(), Some("plural of child"));
    }

    #[test]
    fn audio_is_independent_of_validity() {
        let entry = WordEntry {
            sounds: vec![
                Pronunciation { audio: Some("En-us-cats.mp3".into()) },
                Pronunciation { audio: Some("En-us-cats.ogg".into()) },
            ],
            ..noun("cats", vec![slang("felines")])
        };
        let result = classifier().classify(&entry).unwrap();
        assert!(!result.is_real_word);
        assert_eq!(result.audio_file_name.as_deref(), Some("En-us-cats.ogg"));

        let shaped = WordEntry {
            word: "Cats".into(),
            ..entry
        };
        let result = classifier().classify(&shaped).unwrap();
        assert_eq!(result.audio_file_name.as_deref(), Some("En-us-cats.ogg"));
    }

    #[test]
    fn classification_is_repeatable() {
        let c = classifier();
        let entry = noun("dog", vec![slang("ugly person"), plain("a domestic canine")]);
        assert_eq!(c.classify(&entry), c.classify(&entry));
    }

    #[test]
    fn scan_reports_admitted_index() {
        let c = classifier();
        let senses = vec![slang("a"), plain("b"), plain("c")];
        let scan = c.scan_senses("word", &senses);
        assert!(std::ptr::eq(scan.admitted.unwrap(), &senses[1]));
        assert_eq!(
            scan.first_rejection,
            Some(Diagnostic::InvalidTags(vec!["slang".into()]))
        );
    }
}
