//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::Result;

/// A misspelled token and the words suggested for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoReport {
    pub word: String,
    pub suggestions: Vec<String>,
}

impl TypoReport {
    pub fn new(word: String, suggestions: Vec<String>) -> Self {
        TypoReport { word, suggestions }
    }
}

/// Result structure for index building.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexBuildResult {
    pub path: String,
    pub ngram_length: usize,
    pub ngrams: usize,
    pub words: usize,
    pub duration_ms: u64,
}

/// Write typo reports in the requested format, one per line.
pub fn write_reports<W: Write>(
    writer: &mut W,
    reports: &[TypoReport],
    format: OutputFormat,
) -> Result<()> {
    for report in reports {
        match format {
            OutputFormat::Human => writeln!(writer, "{}", format_human(report))?,
            OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string(report)?)?,
        }
    }
    writer.flush()?;
    Ok(())
}

/// Format a report as `word<TAB>suggestion,suggestion`.
pub fn format_human(report: &TypoReport) -> String {
    format!("{}\t{}", report.word, report.suggestions.join(","))
}

/// Write the summary of an index build.
pub fn write_index_build<W: Write>(
    writer: &mut W,
    result: &IndexBuildResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(
                writer,
                "Wrote {} {}-grams over {} words to {} in {}ms",
                result.ngrams, result.ngram_length, result.words, result.path, result.duration_ms
            )?;
        }
        OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string(result)?)?,
    }
    writer.flush()?;
    Ok(())
}
