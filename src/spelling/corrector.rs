//! Edit-distance spelling corrector.
//!
//! A word missing from the dictionary is corrected by generating every string
//! one edit away and keeping the ones the dictionary knows; if there are
//! none, every string two edits away is tried. Results are ranked by
//! dictionary rank.

use std::sync::Arc;

use ahash::AHashSet;
use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::config::CorrectorConfig;
use crate::error::{Result, SpellboundError};
use crate::spelling::dictionary::{Dictionary, Rank};
use crate::spelling::edits::{self, EditOperation};
use crate::spelling::speller::Speller;
use crate::spelling::word::normalize;

/// Outcome of correcting a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Correction {
    /// The word is in the dictionary.
    Known,
    /// Dictionary words one edit away, by ascending rank.
    CorrectedAtDistance1(Vec<String>),
    /// Dictionary words two edits away, by ascending rank.
    CorrectedAtDistance2(Vec<String>),
    /// No dictionary word within two edits.
    Unknown,
}

impl Correction {
    /// Whether the word was found in the dictionary.
    pub fn is_known(&self) -> bool {
        matches!(self, Correction::Known)
    }

    /// Number of edits separating the word from its suggestions.
    pub fn edit_distance(&self) -> Option<usize> {
        match self {
            Correction::CorrectedAtDistance1(_) => Some(1),
            Correction::CorrectedAtDistance2(_) => Some(2),
            Correction::Known | Correction::Unknown => None,
        }
    }

    /// `None` for known words, otherwise the (possibly empty) suggestions.
    pub fn into_suggestions(self) -> Option<Vec<String>> {
        match self {
            Correction::Known => None,
            Correction::CorrectedAtDistance1(words) | Correction::CorrectedAtDistance2(words) => {
                Some(words)
            }
            Correction::Unknown => Some(Vec::new()),
        }
    }
}

/// Norvig-style spelling corrector over a ranked dictionary.
#[derive(Debug)]
pub struct SpellingCorrector {
    dictionary: Arc<Dictionary>,
    config: CorrectorConfig,
    pool: Option<ThreadPool>,
}

impl SpellingCorrector {
    /// Create a corrector with the default configuration.
    pub fn new<D: Into<Arc<Dictionary>>>(dictionary: D) -> Result<Self> {
        Self::with_config(dictionary, CorrectorConfig::default())
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config<D: Into<Arc<Dictionary>>>(
        dictionary: D,
        config: CorrectorConfig,
    ) -> Result<Self> {
        let dictionary = dictionary.into();
        if dictionary.is_empty() {
            return Err(SpellboundError::EmptyDictionary);
        }
        config.validate()?;

        let pool = if config.parallel {
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.thread_count())
                .thread_name(|i| format!("spellbound-edits-{i}"))
                .build()
                .map_err(|e| {
                    SpellboundError::ThreadPool(format!("Failed to create thread pool: {e}"))
                })?;
            Some(pool)
        } else {
            None
        };

        Ok(SpellingCorrector {
            dictionary,
            config,
            pool,
        })
    }

    /// Create a corrector directly from word/rank pairs.
    pub fn from_ranks<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Rank)>,
        S: AsRef<str>,
    {
        Self::new(Dictionary::new(entries)?)
    }

    /// The dictionary backing this corrector.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The configuration in effect.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Classify `word` and collect its corrections.
    pub fn correct(&self, word: &str) -> Result<Correction> {
        let word = normalize(word)?;

        if self.dictionary.contains(&word) {
            return Ok(Correction::Known);
        }

        let corrections = self.edits1(&word);
        if !corrections.is_empty() {
            debug!("{:?}: {} corrections at distance 1", word, corrections.len());
            return Ok(Correction::CorrectedAtDistance1(corrections));
        }

        let corrections = self.edits2(&word);
        if !corrections.is_empty() {
            debug!("{:?}: {} corrections at distance 2", word, corrections.len());
            return Ok(Correction::CorrectedAtDistance2(corrections));
        }

        debug!("{:?}: no corrections", word);
        Ok(Correction::Unknown)
    }

    /// Corrections for `word`: `None` if it is known, otherwise a ranked and
    /// possibly empty list.
    pub fn corrections(&self, word: &str) -> Result<Option<Vec<String>>> {
        Ok(self.correct(word)?.into_suggestions())
    }

    /// Dictionary words one edit away from `word`, by ascending rank.
    pub fn edits1(&self, word: &str) -> Vec<String> {
        self.dictionary.pack(self.candidates1(word))
    }

    /// Dictionary words two edits away from `word`, by ascending rank.
    pub fn edits2(&self, word: &str) -> Vec<String> {
        self.dictionary.pack(self.candidates2(word))
    }

    fn candidates1(&self, word: &str) -> AHashSet<String> {
        let Some(pool) = &self.pool else {
            return edits::edits1(word);
        };

        let splits = edits::splits(word);
        let batches: Vec<Vec<String>> = pool.install(|| {
            EditOperation::ALL
                .par_iter()
                .map(|op| op.apply(&splits))
                .collect()
        });
        batches.into_iter().flatten().collect()
    }

    fn candidates2(&self, word: &str) -> AHashSet<String> {
        let Some(pool) = &self.pool else {
            return edits::edits2(word);
        };

        let first: Vec<String> = self.candidates1(word).into_iter().collect();
        let batches: Vec<Vec<String>> = pool.install(|| {
            first
                .par_iter()
                .map(|candidate| edits::edits1_candidates(candidate))
                .collect()
        });

        let candidates: AHashSet<String> = batches.into_iter().flatten().collect();
        debug!(
            "{:?}: {} distinct candidates at distance 2",
            word,
            candidates.len()
        );
        candidates
    }
}

impl Speller for SpellingCorrector {
    fn suggestions(&self, word: &str) -> Result<Option<Vec<String>>> {
        self.corrections(word)
    }

    fn name(&self) -> &'static str {
        "corrector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::new([
            ("centry", 93832),
            ("contra", 13242),
            ("country", 393),
            ("ricksha", 1000000),
            ("sleeping", 5216),
            ("sliping", 1000000),
            ("sloping", 27280),
            ("spelling", 7302),
            ("spewing", 41780),
            ("spiling", 1000000),
        ])
        .unwrap()
    }

    fn correctors() -> Vec<SpellingCorrector> {
        vec![
            SpellingCorrector::with_config(dictionary(), CorrectorConfig::sequential()).unwrap(),
            SpellingCorrector::with_config(
                dictionary(),
                CorrectorConfig {
                    parallel: true,
                    num_threads: Some(2),
                },
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_known_word() {
        for corrector in correctors() {
            assert_eq!(corrector.correct("spelling").unwrap(), Correction::Known);
            assert_eq!(corrector.corrections("spelling").unwrap(), None);
            assert_eq!(corrector.corrections("  Spelling\n").unwrap(), None);
        }
    }

    #[test]
    fn test_corrections_at_distance_1() {
        for corrector in correctors() {
            let correction = corrector.correct("speling").unwrap();
            assert_eq!(correction.edit_distance(), Some(1));
            assert_eq!(
                correction.into_suggestions(),
                Some(vec![
                    "spelling".to_string(),
                    "spewing".to_string(),
                    "spiling".to_string()
                ])
            );
        }
    }

    #[test]
    fn test_edits1() {
        for corrector in correctors() {
            assert_eq!(
                corrector.edits1("speling"),
                vec!["spelling", "spewing", "spiling"]
            );
        }
    }

    #[test]
    fn test_edits2() {
        for corrector in correctors() {
            assert!(corrector.edits1("slping").iter().all(|w| w != "sleeping"));
            let edits2 = corrector.edits2("slping");
            assert_eq!(&edits2[..], &["sleeping", "sloping", "sliping", "spiling"]);
        }
    }

    #[test]
    fn test_corrections_at_distance_2() {
        for corrector in correctors() {
            let correction = corrector.correct("cotry").unwrap();
            assert_eq!(
                correction,
                Correction::CorrectedAtDistance2(vec![
                    "country".to_string(),
                    "contra".to_string(),
                    "centry".to_string()
                ])
            );
        }
    }

    #[test]
    fn test_unknown_word() {
        for corrector in correctors() {
            assert_eq!(corrector.correct("xqzvbw").unwrap(), Correction::Unknown);
            assert_eq!(corrector.corrections("xqzvbw").unwrap(), Some(vec![]));
        }
    }

    #[test]
    fn test_invalid_word() {
        for corrector in correctors() {
            for input in ["", "non-alpha", "42"] {
                assert!(matches!(
                    corrector.correct(input),
                    Err(SpellboundError::InvalidWord(_))
                ));
            }
            // A failed query leaves the corrector usable
            assert_eq!(corrector.corrections("spelling").unwrap(), None);
        }
    }

    #[test]
    fn test_from_ranks_rejects_empty_dictionary() {
        let result = SpellingCorrector::from_ranks(Vec::<(&str, Rank)>::new());
        assert!(matches!(result, Err(SpellboundError::EmptyDictionary)));
    }

    #[test]
    fn test_speller_interface() {
        let corrector = SpellingCorrector::from_ranks([("word", 1)]).unwrap();
        let speller: &dyn Speller = &corrector;
        assert_eq!(speller.name(), "corrector");
        assert_eq!(speller.suggestions("word").unwrap(), None);
        assert_eq!(
            speller.suggestions("wrd").unwrap(),
            Some(vec!["word".to_string()])
        );
    }
}
