//! Word lists for the game
//!
//! `WordLists` holds the two collaborator surfaces the session needs: a
//! dictionary-membership set of accepted guesses and the ordered pool of
//! possible answers. Both come from JSON files; failing to load either is
//! fatal before any session starts.

pub mod loader;

use log::info;
use rustc_hash::FxHashSet;

pub use loader::LoadError;

use crate::core::Word;

/// Default path of the answer pool
pub const ANSWERS_PATH: &str = "data/answers.json";

/// Default path of the accepted-guess dictionary
pub const VALID_WORDS_PATH: &str = "data/valid_words.json";

/// Accepted guesses plus the ordered answer pool
#[derive(Debug, Clone)]
pub struct WordLists {
    valid: FxHashSet<Word>,
    answers: Vec<Word>,
}

impl WordLists {
    /// Load both lists from the default `data/` locations
    ///
    /// # Errors
    /// Returns `LoadError` if either file is missing, malformed, or empty.
    pub fn load_default() -> Result<Self, LoadError> {
        Self::load(ANSWERS_PATH, VALID_WORDS_PATH)
    }

    /// Load both lists from explicit paths
    ///
    /// # Errors
    /// Returns `LoadError` if either file is missing, malformed, or empty.
    pub fn load(
        answers_path: impl AsRef<std::path::Path>,
        valid_words_path: impl AsRef<std::path::Path>,
    ) -> Result<Self, LoadError> {
        let answers = loader::load_from_file(answers_path)?;
        let valid = loader::load_from_file(valid_words_path)?;

        info!(
            "loaded {} answers and {} valid guess words",
            answers.len(),
            valid.len()
        );

        Ok(Self::from_words(valid, answers))
    }

    /// Build lists directly from words (library embedding and tests)
    ///
    /// Every answer is also accepted as a guess, so the answer pool does not
    /// need to be duplicated in the dictionary file.
    #[must_use]
    pub fn from_words(valid: Vec<Word>, answers: Vec<Word>) -> Self {
        let mut valid: FxHashSet<Word> = valid.into_iter().collect();
        valid.extend(answers.iter().cloned());
        Self { valid, answers }
    }

    /// Dictionary-membership test for an accepted guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.valid.contains(word)
    }

    /// The ordered, non-empty pool of possible answers
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}
