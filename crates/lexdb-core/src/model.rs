//! Dictionary records as they appear in the line-delimited JSON dump,
//! and the classification record produced for each of them.
//!
//! Every optional field defaults when absent or `null` so that a sparse
//! record still deserializes; only `word` is mandatory.

use serde::{Deserialize, Deserializer, Serialize};

use crate::diagnostic::Diagnostic;

// ─── Input ───────────────────────────────────────────────────────

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One dictionary record: a headword with one part of speech.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pos: String,
    #[serde(default)]
    pub etymology_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub senses: Vec<Sense>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sounds: Vec<Pronunciation>,
}

impl WordEntry {
    /// First pronunciation whose audio reference is an `.ogg` file.
    pub fn audio_file_name(&self) -> Option<&str> {
        self.sounds
            .iter()
            .filter_map(|s| s.audio.as_deref())
            .find(|audio| audio.ends_with(".ogg"))
    }
}

/// One meaning of a headword.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    /// Tags in dump order, e.g. `["plural", "form-of"]`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub form_of: Vec<FormOfRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub glosses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

impl Sense {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The authoritative root word of a form-of sense (first reference).
    pub fn root_word(&self) -> Option<&str> {
        self.form_of
            .first()
            .and_then(|r| r.word.as_deref())
            .filter(|w| !w.is_empty())
    }

    pub fn is_form_of(&self) -> bool {
        self.has_tag("form-of") || self.root_word().is_some()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().filter_map(|c| c.name.as_deref())
    }

    /// Glosses joined with a single space.
    pub fn definition(&self) -> String {
        self.glosses.join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormOfRef {
    #[serde(default)]
    pub word: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pronunciation {
    #[serde(default)]
    pub audio: Option<String>,
}

// ─── Output ──────────────────────────────────────────────────────

/// Verdict for one `WordEntry`, ready to be written as one row.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub word: String,
    pub is_real_word: bool,
    /// Present iff `is_real_word`.
    pub definition: Option<String>,
    pub audio_file_name: Option<String>,
    pub comments: Vec<Diagnostic>,
}

impl ClassificationResult {
    /// Semicolon-joined diagnostics, `None` when there are none.
    pub fn comments_column(&self) -> Option<String> {
        if self.comments.is_empty() {
            return None;
        }
        let joined: Vec<String> = self.comments.iter().map(|d| d.to_string()).collect();
        Some(joined.join(";"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_record_deserializes_with_defaults() {
        let entry: WordEntry = serde_json::from_str(r#"{"word": "cat"}"#).unwrap();
        assert_eq!(entry.word, "cat");
        assert_eq!(entry.pos, "");
        assert!(entry.etymology_text.is_none());
        assert!(entry.senses.is_empty());
        assert!(entry.audio_file_name().is_none());
    }

    #[test]
    fn null_fields_deserialize_as_empty() {
        let entry: WordEntry = serde_json::from_str(
            r#"{"word": "cat", "pos": null, "etymology_text": null, "senses": null, "sounds": null}"#,
        )
        .unwrap();
        assert_eq!(entry.pos, "");
        assert!(entry.etymology_text.is_none());
        assert!(entry.senses.is_empty());
        assert!(entry.sounds.is_empty());

        let entry: WordEntry = serde_json::from_str(
            r#"{"word": "emu", "pos": "noun", "senses": [{"tags": null, "form_of": null,
                "glosses": null, "categories": null}], "sounds": [{"audio": null}]}"#,
        )
        .unwrap();
        let sense = &entry.senses[0];
        assert!(sense.tags.is_empty());
        assert!(sense.form_of.is_empty());
        assert!(sense.glosses.is_empty());
        assert!(sense.categories.is_empty());
        assert!(entry.audio_file_name().is_none());
    }

    #[test]
    fn missing_word_is_an_error() {
        assert!(serde_json::from_str::<WordEntry>(r#"{"pos": "noun"}"#).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let line = r#"{"word": "dog", "pos": "noun", "lang": "English",
            "senses": [{"glosses": ["a pet"], "links": [["pet", "pet"]],
                        "categories": [{"name": "Dogs", "kind": "topical"}, {"kind": "other"}]}]}"#;
        let entry: WordEntry = serde_json::from_str(line).unwrap();
        let names: Vec<&str> = entry.senses[0].category_names().collect();
        assert_eq!(names, vec!["Dogs"]);
    }

    #[test]
    fn root_word_comes_from_first_reference() {
        let sense = Sense {
            form_of: vec![
                FormOfRef { word: Some("cat".into()) },
                FormOfRef { word: Some("kitten".into()) },
            ],
            ..Default::default()
        };
        assert_eq!(sense.root_word(), Some("cat"));
        assert!(sense.is_form_of());

        let empty = Sense {
            form_of: vec![FormOfRef { word: Some(String::new()) }],
            ..Default::default()
        };
        assert_eq!(empty.root_word(), None);
        assert!(!empty.is_form_of());
    }

    #[test]
    fn audio_picks_first_ogg() {
        let entry = WordEntry {
            word: "run".into(),
            sounds: vec![
                Pronunciation { audio: None },
                Pronunciation { audio: Some("en-us-run.wav".into()) },
                Pronunciation { audio: Some("en-us-run.ogg".into()) },
                Pronunciation { audio: Some("en-uk-run.ogg".into()) },
            ],
            ..Default::default()
        };
        assert_eq!(entry.audio_file_name(), Some("en-us-run.ogg"));
    }

    #[test]
    fn comments_column_joins_or_is_none() {
        let mut result = ClassificationResult {
            word: "Foo".into(),
            is_real_word: false,
            definition: None,
            audio_file_name: None,
            comments: vec![],
        };
        assert_eq!(result.comments_column(), None);

        result.comments = vec![Diagnostic::NotLowercaseLettersOnly, Diagnostic::InvalidPos];
        assert_eq!(
            result.comments_column().as_deref(),
            Some("not lowercase letters only;invalid pos")
        );
    }
}
