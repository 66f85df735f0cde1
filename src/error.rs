//! Error types for the Spellbound library.
//!
//! All fallible operations return [`SpellboundError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use spellbound::error::{Result, SpellboundError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellboundError::invalid_word("n0t-a-word"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Spellbound operations.
#[derive(Error, Debug)]
pub enum SpellboundError {
    /// Input does not normalize to a lowercase alphabetic word
    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    /// A dictionary must hold at least one word
    #[error("Dictionary is empty")]
    EmptyDictionary,

    /// A required input file does not exist
    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// A file exists but cannot be read
    #[error("Cannot read {}: {reason}", path.display())]
    UnreadableFile { path: PathBuf, reason: String },

    /// A persisted line could not be parsed
    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// Invalid configuration value or unknown metric name
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Worker pool construction failures
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SpellboundError.
pub type Result<T> = std::result::Result<T, SpellboundError>;

impl SpellboundError {
    /// Create a new invalid word error.
    pub fn invalid_word<S: Into<String>>(word: S) -> Self {
        SpellboundError::InvalidWord(word.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellboundError::InvalidConfig(msg.into())
    }

    /// Create a new malformed line error. `line` is 1-based.
    pub fn malformed_line<S: Into<String>>(line: usize, reason: S) -> Self {
        SpellboundError::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    /// Create a new unreadable file error.
    pub fn unreadable_file<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        SpellboundError::UnreadableFile {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Map an error raised while opening `path` onto the load-time taxonomy.
    pub fn from_open(path: &std::path::Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => SpellboundError::MissingFile(path.to_path_buf()),
            _ => SpellboundError::unreadable_file(path, err.to_string()),
        }
    }
}
