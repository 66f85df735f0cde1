//! Character n-gram extraction and the n-gram to word index.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::SystemTime;

use ahash::{AHashMap, AHashSet};
use log::{debug, info};

use crate::error::{Result, SpellboundError};
use crate::spelling::dictionary::Dictionary;
use crate::spelling::word::is_alphabetic;

/// Distinct character n-grams of `text`, in first-occurrence order.
///
/// The text is trimmed, lowercased and split on whitespace runs; tokens
/// shorter than `length` contribute nothing. A `length` of zero yields no
/// n-grams.
///
/// ```
/// use spellbound::spelling::ngram::ngrams;
///
/// assert_eq!(ngrams("java", 3), vec!["jav", "ava"]);
/// assert_eq!(ngrams("hello jvm goodbye", 4).len(), 6);
/// ```
pub fn ngrams(text: &str, length: usize) -> Vec<String> {
    if length == 0 {
        return Vec::new();
    }

    let text = text.trim().to_lowercase();
    let mut seen = AHashSet::new();
    let mut result = Vec::new();

    for token in text.split_whitespace() {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() < length {
            continue;
        }
        for window in chars.windows(length) {
            let ngram: String = window.iter().collect();
            if seen.insert(ngram.clone()) {
                result.push(ngram);
            }
        }
    }

    result
}

/// Mapping from n-gram to the dictionary words containing it.
///
/// Word lists keep the order in which words were first associated with the
/// n-gram. The index is immutable once built or loaded.
#[derive(Debug, Clone)]
pub struct NGramIndex {
    length: usize,
    entries: AHashMap<String, Vec<String>>,
}

impl NGramIndex {
    /// Build an index over every dictionary word.
    ///
    /// Words are visited in ascending rank order, so more common words come
    /// first in each entry.
    pub fn build(dictionary: &Dictionary, length: usize) -> Result<Self> {
        validate_length(length)?;

        let mut index = NGramIndex {
            length,
            entries: AHashMap::new(),
        };
        // Each word is visited once and its n-grams are distinct, so no entry
        // can receive the same word twice.
        for word in dictionary.words() {
            for ngram in ngrams(word, length) {
                index.entries.entry(ngram).or_default().push(word.to_string());
            }
        }

        info!(
            "Built {}-gram index: {} n-grams over {} words",
            length,
            index.len(),
            dictionary.len()
        );
        Ok(index)
    }

    /// Create an index from already computed entries.
    ///
    /// Every key must be exactly `length` characters long and every word must
    /// be a normalized word.
    pub fn from_entries<I, W>(length: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, W)>,
        W: IntoIterator<Item = String>,
    {
        validate_length(length)?;

        let mut index = NGramIndex {
            length,
            entries: AHashMap::new(),
        };
        let mut seen = AHashMap::new();
        for (position, (ngram, words)) in entries.into_iter().enumerate() {
            index.insert_checked(&mut seen, position + 1, ngram, words)?;
        }
        Ok(index)
    }

    /// Parse persisted `ngram<TAB>word1,word2,...` lines.
    ///
    /// Repeated n-gram lines are merged. Blank lines are ignored.
    pub fn parse_lines<I, S>(lines: I, length: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        validate_length(length)?;

        let mut index = NGramIndex {
            length,
            entries: AHashMap::new(),
        };
        let mut seen = AHashMap::new();
        for (line_num, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let (ngram, words) = line
                .split_once('\t')
                .ok_or_else(|| SpellboundError::malformed_line(line_num + 1, "missing tab"))?;
            let words = words
                .split(',')
                .filter(|word| !word.is_empty())
                .map(str::to_string);
            index.insert_checked(&mut seen, line_num + 1, ngram.to_string(), words)?;
        }
        Ok(index)
    }

    /// Load a persisted index file.
    pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SpellboundError::from_open(path, e))?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| SpellboundError::unreadable_file(path, e.to_string()))?;

        let index = Self::parse_lines(lines, length)?;
        info!(
            "Loaded {}-gram index with {} n-grams from {}",
            length,
            index.len(),
            path.display()
        );
        Ok(index)
    }

    /// Reuse the index persisted at `index_path` when it is newer than the
    /// dictionary file; otherwise build it from `dictionary` and persist it.
    pub fn load_or_build<P: AsRef<Path>, Q: AsRef<Path>>(
        dictionary_path: P,
        index_path: Q,
        dictionary: &Dictionary,
        length: usize,
    ) -> Result<Self> {
        let dictionary_path = dictionary_path.as_ref();
        let index_path = index_path.as_ref();

        if is_fresh(index_path, dictionary_path)? {
            debug!("Index {} is current", index_path.display());
            return Self::load_from_file(index_path, length);
        }

        debug!("Index {} is missing or stale", index_path.display());
        let index = Self::build(dictionary, length)?;
        index.save_to_file(index_path)?;
        Ok(index)
    }

    /// Write the index as `ngram<TAB>word1,word2,...` lines sorted by n-gram.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        for ngram in keys {
            writeln!(writer, "{}\t{}", ngram, self.entries[ngram].join(","))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Persist the index to `path`.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        info!("Saved {} n-grams to {}", self.len(), path.display());
        Ok(())
    }

    /// The n-gram length this index was built with.
    pub fn ngram_length(&self) -> usize {
        self.length
    }

    /// Words associated with `ngram`.
    pub fn get(&self, ngram: &str) -> Option<&[String]> {
        self.entries.get(ngram).map(Vec::as_slice)
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no n-grams.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct indexed words that `dictionary` does not contain.
    pub fn count_unknown_words(&self, dictionary: &Dictionary) -> usize {
        self.entries
            .values()
            .flatten()
            .filter(|word| !dictionary.contains(word))
            .map(String::as_str)
            .collect::<AHashSet<&str>>()
            .len()
    }

    /// Distinct words associated with any of `ngrams`, in first-occurrence
    /// order. Unknown n-grams are skipped.
    pub fn candidates<'a, I, S>(&'a self, ngrams: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = AHashSet::new();
        let mut result = Vec::new();
        for ngram in ngrams {
            if let Some(words) = self.entries.get(ngram.as_ref()) {
                for word in words {
                    if seen.insert(word.as_str()) {
                        result.push(word.as_str());
                    }
                }
            }
        }
        result
    }

    /// Append `words` to the entry for `ngram`, skipping words the entry
    /// already holds. `seen` tracks the words of every entry under
    /// construction.
    fn insert_checked<W>(
        &mut self,
        seen: &mut AHashMap<String, AHashSet<String>>,
        line: usize,
        ngram: String,
        words: W,
    ) -> Result<()>
    where
        W: IntoIterator<Item = String>,
    {
        if ngram.chars().count() != self.length {
            return Err(SpellboundError::malformed_line(
                line,
                format!("n-gram {:?} is not {} characters long", ngram, self.length),
            ));
        }

        let known = seen.entry(ngram.clone()).or_default();
        let mut fresh = Vec::new();
        for word in words {
            if !is_alphabetic(&word) {
                return Err(SpellboundError::malformed_line(
                    line,
                    format!("invalid word {word:?}"),
                ));
            }
            if known.insert(word.clone()) {
                fresh.push(word);
            }
        }
        if !fresh.is_empty() {
            self.entries.entry(ngram).or_default().extend(fresh);
        }
        Ok(())
    }
}

fn validate_length(length: usize) -> Result<()> {
    if length == 0 {
        return Err(SpellboundError::invalid_config(
            "n-gram length must be at least 1",
        ));
    }
    Ok(())
}

fn modified(path: &Path) -> Result<Option<SystemTime>> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(Some(metadata.modified()?)),
        Ok(_) => Ok(None),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SpellboundError::from_open(path, e)),
    }
}

fn is_fresh(index_path: &Path, dictionary_path: &Path) -> Result<bool> {
    let Some(index_time) = modified(index_path)? else {
        return Ok(false);
    };
    let dictionary_time = modified(dictionary_path)?
        .ok_or_else(|| SpellboundError::MissingFile(dictionary_path.to_path_buf()))?;
    Ok(index_time > dictionary_time)
}
