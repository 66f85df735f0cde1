//! N-gram based spelling suggestions.

use std::cmp::Ordering;
use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::SuggesterConfig;
use crate::error::{Result, SpellboundError};
use crate::spelling::dictionary::Dictionary;
use crate::spelling::metric::StringMetric;
use crate::spelling::ngram::{NGramIndex, ngrams};
use crate::spelling::speller::Speller;
use crate::spelling::word::normalize;

/// A suggested word with its distance from the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Distance from the query word (0.0 = identical).
    pub distance: f64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: f64) -> Self {
        Suggestion { word, distance }
    }

    /// Similarity to the query word (1.0 = identical).
    pub fn similarity(&self) -> f64 {
        1.0 - self.distance
    }
}

impl Eq for Suggestion {}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Closest first, then alphabetical
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Suggests dictionary words sharing n-grams with an unknown word.
#[derive(Debug, Clone)]
pub struct NGramSuggester {
    dictionary: Arc<Dictionary>,
    index: Arc<NGramIndex>,
    metric: Arc<dyn StringMetric>,
    max_distance: f64,
}

impl NGramSuggester {
    /// Create a suggester using the metric named in `config`.
    ///
    /// `index` must have been built with `config.ngram_length`.
    pub fn new<D, X>(dictionary: D, index: X, config: &SuggesterConfig) -> Result<Self>
    where
        D: Into<Arc<Dictionary>>,
        X: Into<Arc<NGramIndex>>,
    {
        Self::with_metric(dictionary, index, config, config.string_metric)
    }

    /// Create a suggester with a custom metric, ignoring `config.string_metric`.
    pub fn with_metric<D, X, M>(
        dictionary: D,
        index: X,
        config: &SuggesterConfig,
        metric: M,
    ) -> Result<Self>
    where
        D: Into<Arc<Dictionary>>,
        X: Into<Arc<NGramIndex>>,
        M: StringMetric + 'static,
    {
        config.validate()?;

        let dictionary = dictionary.into();
        if dictionary.is_empty() {
            return Err(SpellboundError::EmptyDictionary);
        }

        let index = index.into();
        if index.ngram_length() != config.ngram_length {
            return Err(SpellboundError::invalid_config(format!(
                "index uses {}-grams but the configuration asks for {}-grams",
                index.ngram_length(),
                config.ngram_length
            )));
        }

        let unknown = index.count_unknown_words(&dictionary);
        if unknown > 0 {
            warn!(
                "N-gram index lists {} words missing from the dictionary; they will not be suggested",
                unknown
            );
        }

        Ok(NGramSuggester {
            dictionary,
            index,
            metric: Arc::new(metric),
            max_distance: config.max_distance,
        })
    }

    /// Build the index from `dictionary` and create a suggester over it.
    pub fn build(dictionary: Dictionary, config: &SuggesterConfig) -> Result<Self> {
        config.validate()?;
        let index = NGramIndex::build(&dictionary, config.ngram_length)?;
        Self::new(dictionary, index, config)
    }

    /// The dictionary backing this suggester.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The n-gram index backing this suggester.
    pub fn index(&self) -> &NGramIndex {
        &self.index
    }

    /// The metric used for scoring.
    pub fn metric(&self) -> &dyn StringMetric {
        self.metric.as_ref()
    }

    /// Suggestions for `word`: `None` if it is known, otherwise words
    /// ordered by ascending distance.
    pub fn suggest(&self, word: &str) -> Result<Option<Vec<String>>> {
        Ok(self
            .suggest_scored(word)?
            .map(|suggestions| suggestions.into_iter().map(|s| s.word).collect()))
    }

    /// Like [`suggest`](Self::suggest), keeping each word's distance.
    pub fn suggest_scored(&self, word: &str) -> Result<Option<Vec<Suggestion>>> {
        let word = normalize(word)?;
        if self.dictionary.contains(&word) {
            return Ok(None);
        }

        let query_ngrams = ngrams(&word, self.index.ngram_length());
        let candidates = self.index.candidates(&query_ngrams);
        let suggestions = self.rank(&word, candidates);

        debug!(
            "{:?}: {} n-grams, {} kept of the indexed candidates",
            word,
            query_ngrams.len(),
            suggestions.len()
        );
        Ok(Some(suggestions))
    }

    /// Score every dictionary word instead of only those sharing an n-gram.
    ///
    /// Same threshold and ordering as [`suggest_scored`](Self::suggest_scored);
    /// useful as a reference when tuning `ngram_length`.
    pub fn suggest_exhaustive(&self, word: &str) -> Result<Option<Vec<Suggestion>>> {
        let word = normalize(word)?;
        if self.dictionary.contains(&word) {
            return Ok(None);
        }
        Ok(Some(self.rank(&word, self.dictionary.words())))
    }

    fn rank<'a, I>(&self, word: &str, candidates: I) -> Vec<Suggestion>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut suggestions: Vec<Suggestion> = candidates
            .into_iter()
            .filter(|candidate| self.dictionary.contains(candidate))
            .map(|candidate| {
                Suggestion::new(candidate.to_string(), self.metric.distance(word, candidate))
            })
            .filter(|suggestion| suggestion.distance < self.max_distance)
            .collect();
        suggestions.sort();
        suggestions
    }
}

impl Speller for NGramSuggester {
    fn suggestions(&self, word: &str) -> Result<Option<Vec<String>>> {
        self.suggest(word)
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}
