//! Command line argument parsing for the Spellbound CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Spellbound - spelling correction against a ranked dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "spellbound")]
#[command(about = "Find typos in text and suggest corrections from a ranked dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellboundArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellboundArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct typos with edit-distance candidates ranked by the dictionary
    Correct(CorrectArgs),

    /// Suggest words sharing n-grams with each typo
    Suggest(SuggestArgs),

    /// Build an n-gram index from a dictionary and save it
    #[command(name = "build-index")]
    BuildIndex(BuildIndexArgs),
}

/// Arguments for the edit-distance corrector
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Tab-separated word/rank dictionary file
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Text files to check (standard input if none)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Generate candidates on a single thread (overrides configuration)
    #[arg(long)]
    pub sequential: bool,

    /// Number of worker threads (overrides configuration)
    #[arg(short, long)]
    pub threads: Option<usize>,
}

/// Arguments for the n-gram suggester
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Tab-separated word/rank dictionary file
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Text files to check (standard input if none)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// N-gram index file, reused when newer than the dictionary and rebuilt otherwise
    #[arg(short = 'i', long, value_name = "INDEX_FILE")]
    pub ngram_index: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// N-gram length (overrides configuration)
    #[arg(short = 'n', long)]
    pub ngram_length: Option<usize>,

    /// Exclusive distance threshold (overrides configuration)
    #[arg(short = 'd', long)]
    pub max_distance: Option<f64>,

    /// String metric: levenshtein, jaro-winkler or damerau (overrides configuration)
    #[arg(short, long)]
    pub metric: Option<String>,
}

/// Arguments for building an n-gram index
#[derive(Parser, Debug, Clone)]
pub struct BuildIndexArgs {
    /// Tab-separated word/rank dictionary file
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Destination index file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// N-gram length (overrides configuration)
    #[arg(short = 'n', long)]
    pub ngram_length: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `typo<TAB>suggestion,suggestion` lines
    Human,
    /// One JSON object per line
    Json,
}
