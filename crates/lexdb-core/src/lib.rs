pub mod diagnostic;
pub mod error;
pub mod lists;
pub mod model;

pub use diagnostic::Diagnostic;
pub use error::{LexError, LexResult};
pub use lists::{LexicalLists, WordSet};
pub use model::{Category, ClassificationResult, FormOfRef, Pronunciation, Sense, WordEntry};
