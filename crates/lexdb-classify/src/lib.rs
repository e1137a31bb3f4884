//! Entry validity classification for dictionary records.
//!
//! The [`Classifier`] owns the reference lists and runs three stages per
//! entry: structural checks on the headword, trivial-affix detection on
//! the etymology, then the sense rules until one sense is admitted.

pub mod affix;
pub mod entry;
pub mod sense;
pub mod vocab;

pub use affix::trivial_affix;
pub use entry::{Classifier, SenseScan};
pub use sense::{classify_sense, Verdict};
