//! # Spellbound
//!
//! Spelling correction against a ranked dictionary.
//!
//! ## Features
//!
//! - Edit-distance corrector: known words pass through, typos get the
//!   dictionary words one (or else two) edits away, best rank first
//! - N-gram suggester: candidates share an n-gram with the typo and are
//!   scored with a normalized string metric
//! - Levenshtein, Jaro-Winkler and Damerau-Levenshtein distances
//! - Persistent n-gram index, rebuilt when the dictionary changes
//! - Batch command line checker

pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::config::{CorrectorConfig, SpellboundConfig, SuggesterConfig};
    pub use crate::error::{Result, SpellboundError};
    pub use crate::spelling::{
        Correction, Dictionary, NGramIndex, NGramSuggester, Speller, SpellingCorrector,
        StringMetric, StringMetricKind, Suggestion,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
