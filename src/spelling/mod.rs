//! Spelling correction and suggestion for Spellbound.
//!
//! Two independent strategies share one normalization gate and one ranked
//! dictionary:
//!
//! - [`corrector`]: edit-distance candidates filtered and ranked by the dictionary.
//! - [`suggest`]: n-gram index lookup scored by a pluggable [`metric`].

pub mod corrector;
pub mod dictionary;
pub mod edits;
pub mod levenshtein;
pub mod metric;
pub mod ngram;
pub mod speller;
pub mod suggest;
pub mod word;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use edits::{EditOperation, WordSplit};
pub use metric::*;
pub use ngram::*;
pub use speller::*;
pub use suggest::*;
pub use word::*;
