//! Command implementations for the Spellbound CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use ahash::AHashSet;
use log::{debug, info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{CorrectorConfig, SpellboundConfig, SuggesterConfig};
use crate::error::{Result, SpellboundError};
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: SpellboundArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct(correct_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest(suggest_args.clone(), &args),
        Command::BuildIndex(build_args) => build_index(build_args.clone(), &args),
    }
}

/// Check input text with the edit-distance corrector.
fn correct(args: CorrectArgs, cli_args: &SpellboundArgs) -> Result<()> {
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    let config = corrector_config(args.config.as_deref(), args.sequential, args.threads)?;
    let corrector = SpellingCorrector::with_config(dictionary, config)?;

    let lines = read_input(&args.files)?;
    let reports = check_lines(&corrector, &lines)?;
    write_reports(&mut io::stdout().lock(), &reports, cli_args.output_format)
}

/// Check input text with the n-gram suggester.
fn suggest(args: SuggestArgs, cli_args: &SpellboundArgs) -> Result<()> {
    let config = suggester_config(
        args.config.as_deref(),
        args.ngram_length,
        args.max_distance,
        args.metric.as_deref(),
    )?;
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;

    let index = match &args.ngram_index {
        Some(index_path) => NGramIndex::load_or_build(
            &args.dictionary,
            index_path,
            &dictionary,
            config.ngram_length,
        )?,
        None => NGramIndex::build(&dictionary, config.ngram_length)?,
    };
    let suggester = NGramSuggester::new(dictionary, index, &config)?;

    let lines = read_input(&args.files)?;
    let reports = check_lines(&suggester, &lines)?;
    write_reports(&mut io::stdout().lock(), &reports, cli_args.output_format)
}

/// Build an n-gram index and persist it.
fn build_index(args: BuildIndexArgs, cli_args: &SpellboundArgs) -> Result<()> {
    let config = suggester_config(args.config.as_deref(), args.ngram_length, None, None)?;
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;

    let start = Instant::now();
    let index = NGramIndex::build(&dictionary, config.ngram_length)?;
    index.save_to_file(&args.output)?;

    let result = IndexBuildResult {
        path: args.output.to_string_lossy().to_string(),
        ngram_length: index.ngram_length(),
        ngrams: index.len(),
        words: dictionary.len(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    write_index_build(&mut io::stdout().lock(), &result, cli_args.output_format)
}

/// Resolve the corrector configuration: defaults, then the config file,
/// then command line overrides.
pub fn corrector_config(
    config_file: Option<&Path>,
    sequential: bool,
    threads: Option<usize>,
) -> Result<CorrectorConfig> {
    let mut config = match config_file {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            SpellboundConfig::from_json_file(path)?.corrector
        }
        None => CorrectorConfig::default(),
    };

    if sequential {
        config.parallel = false;
    }
    if threads.is_some() {
        config.num_threads = threads;
    }

    config.validate()?;
    Ok(config)
}

/// Resolve the suggester configuration: defaults, then the config file,
/// then command line overrides.
pub fn suggester_config(
    config_file: Option<&Path>,
    ngram_length: Option<usize>,
    max_distance: Option<f64>,
    metric: Option<&str>,
) -> Result<SuggesterConfig> {
    let mut config = match config_file {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            SpellboundConfig::from_json_file(path)?.suggester
        }
        None => SuggesterConfig::default(),
    };

    if let Some(ngram_length) = ngram_length {
        config.ngram_length = ngram_length;
    }
    if let Some(max_distance) = max_distance {
        config.max_distance = max_distance;
    }
    if let Some(metric) = metric {
        config.string_metric = StringMetricKind::parse_str(metric)?;
    }

    config.validate()?;
    Ok(config)
}

/// Read every line of the given files, or of standard input if none.
pub fn read_input(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        debug!("Reading from standard input");
        return Ok(io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?);
    }

    let mut lines = Vec::new();
    for path in files {
        let file = File::open(path).map_err(|e| SpellboundError::from_open(path, e))?;
        for line in BufReader::new(file).lines() {
            lines.push(line.map_err(|e| SpellboundError::unreadable_file(path, e.to_string()))?);
        }
    }
    Ok(lines)
}

/// Split lines into distinct lowercase words made only of ASCII letters,
/// in order of first appearance.
pub fn extract_tokens<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = AHashSet::new();
    let mut tokens = Vec::new();
    for line in lines {
        for token in line.as_ref().split_whitespace() {
            if !token.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            let token = token.to_ascii_lowercase();
            if seen.insert(token.clone()) {
                tokens.push(token);
            }
        }
    }
    tokens
}

/// Run every token through `speller`, keeping only the typos.
pub fn check_tokens(speller: &dyn Speller, tokens: Vec<String>) -> Result<Vec<TypoReport>> {
    let mut reports = Vec::new();
    for token in tokens {
        match speller.suggestions(&token) {
            Ok(Some(suggestions)) => reports.push(TypoReport::new(token, suggestions)),
            Ok(None) => {}
            Err(SpellboundError::InvalidWord(word)) => {
                warn!("Skipping invalid word {word:?}");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(reports)
}

/// Extract the tokens of `lines` and check them with `speller`.
pub fn check_lines<S: AsRef<str>>(speller: &dyn Speller, lines: &[S]) -> Result<Vec<TypoReport>> {
    let tokens = extract_tokens(lines);
    let total = tokens.len();
    let reports = check_tokens(speller, tokens)?;
    info!(
        "Checked {} distinct words with the {} speller: {} typos",
        total,
        speller.name(),
        reports.len()
    );
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_extract_tokens() {
        let tokens = extract_tokens([
            "The speling  of this\tline",
            "is 2 bad, the Speling is bad",
        ]);
        assert_eq!(
            tokens,
            vec!["the", "speling", "of", "this", "line", "is", "bad"]
        );
    }

    #[test]
    fn test_extract_tokens_empty_input() {
        assert!(extract_tokens(Vec::<String>::new()).is_empty());
        assert!(extract_tokens(["   ", "123 !?"]).is_empty());
    }

    #[test]
    fn test_check_lines_with_corrector() {
        let corrector = SpellingCorrector::with_config(
            Dictionary::new([("the", 1), ("spelling", 7302), ("is", 8), ("bad", 900)]).unwrap(),
            CorrectorConfig::sequential(),
        )
        .unwrap();

        let reports = check_lines(&corrector, &["the speling is bda", "xqzvbw"]).unwrap();
        assert_eq!(
            reports,
            vec![
                TypoReport::new("speling".to_string(), vec!["spelling".to_string()]),
                TypoReport::new("bda".to_string(), vec!["bad".to_string()]),
                TypoReport::new("xqzvbw".to_string(), vec![]),
            ]
        );
    }

    #[test]
    fn test_check_lines_with_suggester() {
        let dictionary = Dictionary::new([("ricksha", 40000), ("rickshaw", 30000)]).unwrap();
        let suggester = NGramSuggester::build(dictionary, &SuggesterConfig::default()).unwrap();

        let reports = check_lines(&suggester, &["a ricsha or rickshaw"]).unwrap();
        let words: Vec<_> = reports.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["a", "ricsha", "or"]);
        assert_eq!(reports[1].suggestions, vec!["ricksha", "rickshaw"]);
        assert!(reports[0].suggestions.is_empty());
    }

    #[test]
    fn test_suggester_config_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"suggester": {{"ngram_length": 2, "max_distance": 0.5}}}}"#
        )
        .unwrap();

        let config = suggester_config(Some(file.path()), None, Some(0.3), Some("jaro-winkler"))
            .unwrap();
        assert_eq!(config.ngram_length, 2);
        assert_eq!(config.max_distance, 0.3);
        assert_eq!(config.string_metric, StringMetricKind::JaroWinkler);

        let default = suggester_config(None, None, None, None).unwrap();
        assert_eq!(default, SuggesterConfig::default());
    }

    #[test]
    fn test_corrector_config_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"corrector": {{"parallel": false, "num_threads": 2}}}}"#
        )
        .unwrap();

        let config = corrector_config(Some(file.path()), false, None).unwrap();
        assert_eq!(
            config,
            CorrectorConfig {
                parallel: false,
                num_threads: Some(2),
            }
        );

        let config = corrector_config(Some(file.path()), false, Some(6)).unwrap();
        assert_eq!(config.num_threads, Some(6));
        assert!(!config.parallel);

        let config = corrector_config(None, true, None).unwrap();
        assert_eq!(config, CorrectorConfig::sequential());
        assert_eq!(corrector_config(None, false, None).unwrap(), CorrectorConfig::default());

        assert!(matches!(
            corrector_config(None, false, Some(0)),
            Err(SpellboundError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_suggester_config_rejects_bad_values() {
        assert!(matches!(
            suggester_config(None, None, None, Some("soundex")),
            Err(SpellboundError::InvalidConfig(_))
        ));
        assert!(matches!(
            suggester_config(None, Some(0), None, None),
            Err(SpellboundError::InvalidConfig(_))
        ));
        assert!(matches!(
            suggester_config(Some(Path::new("/nonexistent/config.json")), None, None, None),
            Err(SpellboundError::MissingFile(_))
        ));
    }

    #[test]
    fn test_read_input_from_files() {
        let mut first = NamedTempFile::new().unwrap();
        writeln!(first, "one line").unwrap();
        let mut second = NamedTempFile::new().unwrap();
        writeln!(second, "two\nlines").unwrap();

        let lines =
            read_input(&[first.path().to_path_buf(), second.path().to_path_buf()]).unwrap();
        assert_eq!(lines, vec!["one line", "two", "lines"]);

        let missing = read_input(&[PathBuf::from("/nonexistent/input.txt")]);
        assert!(matches!(missing, Err(SpellboundError::MissingFile(_))));
    }
}
