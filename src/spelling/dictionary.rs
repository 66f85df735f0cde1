//! Ranked dictionary used by both correction strategies.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use ahash::AHashMap;
use log::{info, warn};

use crate::error::{Result, SpellboundError};
use crate::spelling::word::{is_alphabetic, normalize};

/// Frequency rank of a word. Lower ranks are more common.
pub type Rank = u32;

/// An immutable mapping from normalized words to their rank.
///
/// A dictionary is never empty; construction fails with
/// [`SpellboundError::EmptyDictionary`] otherwise.
#[derive(Debug, Clone)]
pub struct Dictionary {
    ranks: AHashMap<String, Rank>,
}

impl Dictionary {
    /// Build a dictionary from word/rank pairs.
    ///
    /// Words are normalized; a word that fails normalization is rejected with
    /// [`SpellboundError::InvalidWord`]. When a word repeats, the last rank wins.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Rank)>,
        S: AsRef<str>,
    {
        let mut ranks = AHashMap::new();
        for (word, rank) in entries {
            ranks.insert(normalize(word.as_ref())?, rank);
        }

        if ranks.is_empty() {
            return Err(SpellboundError::EmptyDictionary);
        }

        Ok(Dictionary { ranks })
    }

    /// Parse `word<TAB>rank` lines.
    ///
    /// Lines without a tab, with a word outside `[a-z]+` or with a rank that
    /// is not a positive integer are skipped.
    pub fn from_tsv_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut discarded = 0usize;

        for (line_num, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            match parse_entry(line) {
                Some(entry) => entries.push(entry),
                None => {
                    discarded += 1;
                    warn!("Discarding dictionary line {}: {:?}", line_num + 1, line);
                }
            }
        }

        let dictionary = Dictionary::new(entries)?;
        info!(
            "Loaded dictionary with {} words ({} lines discarded)",
            dictionary.len(),
            discarded
        );
        Ok(dictionary)
    }

    /// Load a dictionary from a tab-separated `word<TAB>rank` file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SpellboundError::from_open(path, e))?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| SpellboundError::unreadable_file(path, e.to_string()))?;

        Self::from_tsv_lines(lines)
    }

    /// Write the dictionary as `word<TAB>rank` lines in ascending rank order.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for (word, rank) in self.ranked() {
            writeln!(writer, "{word}\t{rank}")?;
        }
        Ok(())
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.ranks.contains_key(word)
    }

    /// Get the rank of a word.
    pub fn rank(&self, word: &str) -> Option<Rank> {
        self.ranks.get(word).copied()
    }

    /// Get the total number of unique words.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Word/rank pairs ordered by ascending rank, then word.
    pub fn ranked(&self) -> Vec<(&str, Rank)> {
        let mut entries: Vec<(&str, Rank)> = self
            .ranks
            .iter()
            .map(|(word, rank)| (word.as_str(), *rank))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Words ordered by ascending rank, then word.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.ranked().into_iter().map(|(word, _)| word)
    }

    /// Reduce raw candidates to distinct dictionary words sorted by
    /// ascending rank. Equal ranks are ordered lexicographically.
    pub fn pack<I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut known: AHashMap<&str, Rank> = AHashMap::new();
        for candidate in candidates {
            if let Some((word, rank)) = self.ranks.get_key_value(candidate.as_ref()) {
                known.insert(word.as_str(), *rank);
            }
        }

        let mut packed: Vec<(&str, Rank)> = known.into_iter().collect();
        packed.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        packed.into_iter().map(|(word, _)| word.to_string()).collect()
    }
}

fn parse_entry(line: &str) -> Option<(String, Rank)> {
    let (word, rank) = line.split_once('\t')?;
    if !is_alphabetic(word) {
        return None;
    }
    let rank: Rank = rank.trim().parse().ok()?;
    (rank > 0).then(|| (word.to_string(), rank))
}
