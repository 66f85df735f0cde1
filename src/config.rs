//! Configuration for the corrector and the n-gram suggester.
//!
//! Configuration is built once at startup and handed to constructors by
//! value; nothing in the library reads settings on its own.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellboundError};
use crate::spelling::metric::StringMetricKind;

/// Configuration for the n-gram suggester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggesterConfig {
    /// Length of the n-grams used to index and query words.
    pub ngram_length: usize,

    /// Exclusive upper bound on the distance of a suggestion, in (0, 1].
    pub max_distance: f64,

    /// Metric used to score candidates.
    pub string_metric: StringMetricKind,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        Self {
            ngram_length: 3,
            max_distance: 0.75,
            string_metric: StringMetricKind::Levenshtein,
        }
    }
}

impl SuggesterConfig {
    /// Set the n-gram length.
    pub fn with_ngram_length(mut self, ngram_length: usize) -> Self {
        self.ngram_length = ngram_length;
        self
    }

    /// Set the distance threshold.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set the string metric.
    pub fn with_string_metric(mut self, string_metric: StringMetricKind) -> Self {
        self.string_metric = string_metric;
        self
    }

    /// Check that all values are in range.
    pub fn validate(&self) -> Result<()> {
        if self.ngram_length == 0 {
            return Err(SpellboundError::invalid_config(
                "ngram_length must be a positive integer",
            ));
        }
        if !(self.max_distance > 0.0 && self.max_distance <= 1.0) {
            return Err(SpellboundError::invalid_config(format!(
                "max_distance must be in (0, 1], got {}",
                self.max_distance
            )));
        }
        Ok(())
    }
}

/// Configuration for the edit-distance corrector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Run the edit fan-out on a dedicated worker pool.
    pub parallel: bool,

    /// Worker pool size. If None, uses the number of CPU cores.
    pub num_threads: Option<usize>,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            num_threads: None,
        }
    }
}

impl CorrectorConfig {
    /// A configuration that generates candidates on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            num_threads: None,
        }
    }

    /// The effective worker pool size.
    pub fn thread_count(&self) -> usize {
        self.num_threads.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Check that all values are in range.
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == Some(0) {
            return Err(SpellboundError::invalid_config(
                "num_threads must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Top-level configuration, loadable from a JSON document.
///
/// ```
/// use spellbound::config::SpellboundConfig;
///
/// let config = SpellboundConfig::from_json_str(
///     r#"{"suggester": {"ngram_length": 2, "string_metric": "damerau"}}"#,
/// ).unwrap();
/// assert_eq!(config.suggester.ngram_length, 2);
/// assert_eq!(config.suggester.max_distance, 0.75);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellboundConfig {
    pub suggester: SuggesterConfig,
    pub corrector: CorrectorConfig,
}

impl SpellboundConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SpellboundConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| SpellboundError::from_open(path, e))?;
        Self::from_json_str(&json)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.suggester.validate()?;
        self.corrector.validate()
    }
}
