//! Integration tests for the edit-distance corrector.

use std::io::Write;

use spellbound::config::CorrectorConfig;
use spellbound::error::{Result, SpellboundError};
use spellbound::spelling::{Correction, Dictionary, Speller, SpellingCorrector};
use tempfile::NamedTempFile;

const DICTIONARY: &str = "\
country\t393
sleeping\t5216
spelling\t7302
contra\t13242
sloping\t27280
spewing\t41780
centry\t93832
sliping\t1000000
spiling\t1000000
";

fn dictionary_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DICTIONARY.as_bytes()).unwrap();
    file
}

#[test]
fn test_correct_from_dictionary_file() -> Result<()> {
    let file = dictionary_file();
    let dictionary = Dictionary::load_from_file(file.path())?;
    assert_eq!(dictionary.len(), 9);

    let corrector = SpellingCorrector::new(dictionary)?;

    assert_eq!(corrector.correct("spelling")?, Correction::Known);
    assert_eq!(
        corrector.corrections("speling")?,
        Some(vec![
            "spelling".to_string(),
            "spewing".to_string(),
            "spiling".to_string()
        ])
    );
    assert_eq!(
        corrector.corrections("cotry")?,
        Some(vec![
            "country".to_string(),
            "contra".to_string(),
            "centry".to_string()
        ])
    );
    assert_eq!(corrector.corrections("xqzvbw")?, Some(vec![]));

    Ok(())
}

#[test]
fn test_sequential_and_parallel_agree() -> Result<()> {
    let file = dictionary_file();
    let sequential = SpellingCorrector::with_config(
        Dictionary::load_from_file(file.path())?,
        CorrectorConfig::sequential(),
    )?;
    let parallel = SpellingCorrector::with_config(
        Dictionary::load_from_file(file.path())?,
        CorrectorConfig {
            parallel: true,
            num_threads: Some(4),
        },
    )?;

    for word in ["speling", "slping", "cotry", "sleping", "contry", "xqzvbw", "spelling"] {
        assert_eq!(sequential.correct(word)?, parallel.correct(word)?, "{word}");
    }

    Ok(())
}

#[test]
fn test_corrections_are_deterministic() -> Result<()> {
    let corrector = SpellingCorrector::from_ranks([
        ("alpha", 10),
        ("alphas", 10),
        ("aleph", 10),
        ("delta", 2),
    ])?;

    let first = corrector.corrections("alpah")?;
    for _ in 0..5 {
        assert_eq!(corrector.corrections("alpah")?, first);
    }
    assert_eq!(first, Some(vec!["alpha".to_string()]));

    // Equal ranks are broken alphabetically
    assert_eq!(
        corrector.edits2("alph"),
        vec!["aleph".to_string(), "alpha".to_string(), "alphas".to_string()]
    );

    Ok(())
}

#[test]
fn test_missing_dictionary_file() {
    let result = Dictionary::load_from_file("/nonexistent/dictionary.tsv");
    assert!(matches!(result, Err(SpellboundError::MissingFile(_))));
}

#[test]
fn test_dictionary_file_without_valid_entries() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Not-A-Word\t12\nword\t-3\nnotab").unwrap();

    let result = Dictionary::load_from_file(file.path());
    assert!(matches!(result, Err(SpellboundError::EmptyDictionary)));
}

#[test]
fn test_corrector_as_speller() -> Result<()> {
    let corrector = SpellingCorrector::from_ranks([("word", 1), ("world", 2)])?;
    let speller: Box<dyn Speller> = Box::new(corrector);

    assert_eq!(speller.suggestions("WORD")?, None);
    assert_eq!(
        speller.suggestions("wrld")?,
        Some(vec!["world".to_string()])
    );
    assert!(matches!(
        speller.suggestions("w0rd"),
        Err(SpellboundError::InvalidWord(_))
    ));

    Ok(())
}
