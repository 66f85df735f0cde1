//! The interface shared by the corrector and the n-gram suggester.

use crate::error::Result;

/// Something that can propose corrections for a single word.
pub trait Speller: Send + Sync {
    /// Suggest corrections for `word`.
    ///
    /// Returns `Ok(None)` when the word is in the dictionary, and
    /// `Ok(Some(list))` otherwise. The list is empty when nothing close
    /// enough was found. Fails when `word` does not normalize.
    fn suggestions(&self, word: &str) -> Result<Option<Vec<String>>>;

    /// A short name for logs and reports.
    fn name(&self) -> &'static str;
}
