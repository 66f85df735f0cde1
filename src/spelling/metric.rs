//! String distance metrics for ranking n-gram candidates.
//!
//! All metrics use the distance convention: `0.0` means identical strings and
//! `1.0` means maximally dissimilar. Similarity, where needed, is
//! `1.0 - distance`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellboundError};
use crate::spelling::levenshtein::{damerau_levenshtein_distance, levenshtein_distance, normalized};

/// A pure distance function over two strings, bounded to `[0, 1]`.
///
/// Implementations must return `0.0` for identical inputs and be symmetric.
pub trait StringMetric: Send + Sync + fmt::Debug {
    /// Distance between `s1` and `s2`.
    fn distance(&self, s1: &str, s2: &str) -> f64;

    /// Similarity between `s1` and `s2` (`1.0 - distance`).
    fn similarity(&self, s1: &str, s2: &str) -> f64 {
        1.0 - self.distance(s1, s2)
    }

    /// Get the name of this metric.
    fn name(&self) -> &str;
}

/// The built-in string metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StringMetricKind {
    /// Levenshtein edit distance divided by the longer length
    #[default]
    Levenshtein,
    /// One minus Jaro-Winkler similarity
    JaroWinkler,
    /// Damerau-Levenshtein edit distance divided by the longer length
    Damerau,
}

impl StringMetricKind {
    /// Every built-in metric.
    pub const ALL: [StringMetricKind; 3] = [
        StringMetricKind::Levenshtein,
        StringMetricKind::JaroWinkler,
        StringMetricKind::Damerau,
    ];

    /// Parse a metric from its configuration name.
    pub fn parse_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "levenshtein" | "levenstein" => Ok(StringMetricKind::Levenshtein),
            "jaro-winkler" | "jarowinkler" | "jaro_winkler" => Ok(StringMetricKind::JaroWinkler),
            "damerau" | "damerau-levenshtein" => Ok(StringMetricKind::Damerau),
            _ => Err(SpellboundError::invalid_config(format!(
                "Unknown string metric: {s}"
            ))),
        }
    }

    /// Get the name of this metric.
    pub fn as_str(&self) -> &'static str {
        match self {
            StringMetricKind::Levenshtein => "levenshtein",
            StringMetricKind::JaroWinkler => "jaro-winkler",
            StringMetricKind::Damerau => "damerau",
        }
    }
}

impl StringMetric for StringMetricKind {
    fn distance(&self, s1: &str, s2: &str) -> f64 {
        let distance = match self {
            StringMetricKind::Levenshtein => normalized(levenshtein_distance(s1, s2), s1, s2),
            StringMetricKind::JaroWinkler => 1.0 - strsim::jaro_winkler(s1, s2),
            StringMetricKind::Damerau => {
                normalized(damerau_levenshtein_distance(s1, s2), s1, s2)
            }
        };
        distance.clamp(0.0, 1.0)
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for StringMetricKind {
    type Err = SpellboundError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl fmt::Display for StringMetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
