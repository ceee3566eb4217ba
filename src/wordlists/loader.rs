//! Word-list file loading
//!
//! Word lists are JSON documents of the form `{"words": ["crane", ...]}`.
//! Entries that are not valid 5-letter words are skipped; a file that yields
//! no usable words at all is an error.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::Word;

/// Fatal word-list loading failures
#[derive(Debug)]
pub enum LoadError {
    /// File could not be read
    Io(PathBuf, io::Error),
    /// File is not the expected JSON shape
    Parse(PathBuf, serde_json::Error),
    /// File parsed but contained no usable 5-letter words
    Empty(PathBuf),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, err) => write!(f, "cannot read word list {}: {err}", path.display()),
            Self::Parse(path, err) => {
                write!(f, "cannot parse word list {}: {err}", path.display())
            }
            Self::Empty(path) => {
                write!(f, "word list {} contains no usable words", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, err) => Some(err),
            Self::Parse(_, err) => Some(err),
            Self::Empty(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct WordListFile {
    words: Vec<String>,
}

/// Parse a word-list JSON document, skipping malformed entries
///
/// # Errors
/// Returns a `serde_json::Error` if the document is not `{"words": [...]}`.
pub fn words_from_json(content: &str) -> Result<Vec<Word>, serde_json::Error> {
    let file: WordListFile = serde_json::from_str(content)?;
    Ok(file
        .words
        .iter()
        .filter_map(|entry| Word::new(entry.trim()).ok())
        .collect())
}

/// Load a word list from a JSON file
///
/// # Errors
/// Returns `LoadError` if the file cannot be read, is not valid word-list
/// JSON, or yields no usable words.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|err| LoadError::Io(path.to_path_buf(), err))?;
    let words =
        words_from_json(&content).map_err(|err| LoadError::Parse(path.to_path_buf(), err))?;

    if words.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    Ok(words)
}
