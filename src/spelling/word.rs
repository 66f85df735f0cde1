//! Word normalization and validation.
//!
//! Every query goes through [`normalize`] before it reaches a dictionary,
//! an edit generator or an n-gram index.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SpellboundError};

static ALPHABETIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+$").expect("alphabetic pattern is valid"));

/// The letters used by insert and replace edits, in alphabetical order.
pub const LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Check whether `word` consists solely of lowercase ASCII letters.
pub fn is_alphabetic(word: &str) -> bool {
    ALPHABETIC.is_match(word)
}

/// Trim surrounding whitespace, lowercase and validate a word.
///
/// Fails with [`SpellboundError::InvalidWord`] when the result is empty or
/// contains anything other than `a`-`z`.
pub fn normalize(input: &str) -> Result<String> {
    let normalized = input.trim().to_lowercase();
    if is_alphabetic(&normalized) {
        Ok(normalized)
    } else {
        Err(SpellboundError::invalid_word(input))
    }
}
