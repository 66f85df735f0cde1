//! Edit-operation candidate generation.
//!
//! A word of length `n` is cut into `n + 1` [`WordSplit`]s, and each of the
//! four [`EditOperation`]s turns the splits into candidate strings one edit
//! away from the word. Enumeration order is fixed: splits left to right,
//! letters `a` to `z`.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::spelling::word::LETTERS;

/// A word cut in two at a character boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordSplit {
    pub left: String,
    pub right: String,
}

impl WordSplit {
    pub fn new<L: Into<String>, R: Into<String>>(left: L, right: R) -> Self {
        WordSplit {
            left: left.into(),
            right: right.into(),
        }
    }

    /// The right part without its first character.
    fn right_tail(&self) -> &str {
        let mut chars = self.right.chars();
        chars.next();
        chars.as_str()
    }
}

/// All splits of `word`, from `("", word)` through `(word, "")`.
pub fn splits(word: &str) -> Vec<WordSplit> {
    word.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .map(|i| WordSplit::new(&word[..i], &word[i..]))
        .collect()
}

/// Remove one character: `n` candidates.
pub fn deletes(splits: &[WordSplit]) -> Vec<String> {
    splits
        .iter()
        .filter(|split| !split.right.is_empty())
        .map(|split| format!("{}{}", split.left, split.right_tail()))
        .collect()
}

/// Insert one letter anywhere: `26 * (n + 1)` candidates.
pub fn inserts(splits: &[WordSplit]) -> Vec<String> {
    let mut candidates = Vec::with_capacity(splits.len() * LETTERS.len());
    for split in splits {
        for letter in LETTERS {
            candidates.push(format!("{}{}{}", split.left, letter, split.right));
        }
    }
    candidates
}

/// Swap two adjacent characters: `n - 1` candidates.
pub fn transposes(splits: &[WordSplit]) -> Vec<String> {
    splits
        .iter()
        .filter_map(|split| {
            let mut chars = split.right.chars();
            let first = chars.next()?;
            let second = chars.next()?;
            Some(format!(
                "{}{}{}{}",
                split.left,
                second,
                first,
                chars.as_str()
            ))
        })
        .collect()
}

/// Replace one character with every letter: `26 * n` candidates.
pub fn replaces(splits: &[WordSplit]) -> Vec<String> {
    let mut candidates = Vec::with_capacity(splits.len() * LETTERS.len());
    for split in splits.iter().filter(|split| !split.right.is_empty()) {
        let tail = split.right_tail();
        for letter in LETTERS {
            candidates.push(format!("{}{}{}", split.left, letter, tail));
        }
    }
    candidates
}

/// The four single-character edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditOperation {
    Delete,
    Insert,
    Transpose,
    Replace,
}

impl EditOperation {
    /// Every operation, in generation order.
    pub const ALL: [EditOperation; 4] = [
        EditOperation::Delete,
        EditOperation::Insert,
        EditOperation::Transpose,
        EditOperation::Replace,
    ];

    /// Apply this operation to every split.
    pub fn apply(&self, splits: &[WordSplit]) -> Vec<String> {
        match self {
            EditOperation::Delete => deletes(splits),
            EditOperation::Insert => inserts(splits),
            EditOperation::Transpose => transposes(splits),
            EditOperation::Replace => replaces(splits),
        }
    }

    /// Get the name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            EditOperation::Delete => "delete",
            EditOperation::Insert => "insert",
            EditOperation::Transpose => "transpose",
            EditOperation::Replace => "replace",
        }
    }
}

/// Raw edit-distance-1 candidates, duplicates included, in generation order.
pub fn edits1_candidates(word: &str) -> Vec<String> {
    let splits = splits(word);
    EditOperation::ALL
        .iter()
        .flat_map(|op| op.apply(&splits))
        .collect()
}

/// Distinct edit-distance-1 candidates.
pub fn edits1(word: &str) -> AHashSet<String> {
    edits1_candidates(word).into_iter().collect()
}

/// Distinct candidates two edits away, i.e. `edits1` applied to every
/// `edits1` result. The set is large: roughly `(54n + 25)^2` raw strings.
pub fn edits2(word: &str) -> AHashSet<String> {
    let mut candidates = AHashSet::new();
    for candidate in edits1(word) {
        candidates.extend(edits1_candidates(&candidate));
    }
    candidates
}
