//! A single game session: secret answer, attempt ledger, win/loss outcome
//!
//! The ledger holds exactly six slots, filled strictly in order and never
//! overwritten. Rejected guesses (bad shape, unknown word) leave the ledger
//! and attempt index untouched.

use std::fmt;

use crate::core::{GuessRecord, LetterVerdict, Word, WordError, classify};
use crate::wordlists::WordLists;

/// Maximum number of guesses per session
pub const MAX_ATTEMPTS: usize = 6;

/// Dictionary-membership collaborator consulted before a guess is accepted
pub trait Lexicon {
    /// Whether the word is an accepted guess
    fn contains(&self, word: &Word) -> bool;
}

impl Lexicon for WordLists {
    fn contains(&self, word: &Word) -> bool {
        WordLists::contains(self, word)
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Every position scored `Correct`
    Won,
    /// The sixth guess was wrong
    Lost,
    /// Attempts remain
    InProgress,
}

/// Why a submitted guess was rejected (no attempt consumed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    /// Not 5 ASCII letters
    Malformed(WordError),
    /// Shape-valid but not in the dictionary
    UnknownWord(String),
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "invalid word: {err}"),
            Self::UnknownWord(word) => write!(f, "'{word}' is not in the word list"),
        }
    }
}

impl std::error::Error for GuessRejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::UnknownWord(_) => None,
        }
    }
}

/// One run of guessing against a fixed secret answer
#[derive(Debug, Clone)]
pub struct Session {
    answer: Word,
    ledger: [GuessRecord; MAX_ATTEMPTS],
    attempt: usize,
}

impl Session {
    /// Start a fresh session: empty ledger, attempt index 1
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            ledger: std::array::from_fn(|_| GuessRecord::empty()),
            attempt: 1,
        }
    }

    /// The secret answer
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Current 1-based attempt index; `MAX_ATTEMPTS + 1` means exhausted
    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    /// The attempt ledger, empty slots included
    #[inline]
    #[must_use]
    pub const fn records(&self) -> &[GuessRecord; MAX_ATTEMPTS] {
        &self.ledger
    }

    /// Submit a guess
    ///
    /// The guess must be shape-valid and present in the lexicon; otherwise it
    /// is rejected without consuming an attempt. An accepted guess is scored,
    /// written into the next ledger slot, and the attempt index advances.
    ///
    /// # Errors
    /// Returns `GuessRejection` for malformed or unknown words.
    ///
    /// # Panics
    /// Panics if called after the session is already decided (all six slots
    /// filled or a winning guess recorded).
    pub fn submit(
        &mut self,
        raw: &str,
        lexicon: &impl Lexicon,
    ) -> Result<GuessOutcome, GuessRejection> {
        assert!(
            self.attempt <= MAX_ATTEMPTS,
            "guess submitted to an exhausted session"
        );

        let word = Word::new(raw).map_err(GuessRejection::Malformed)?;
        if !lexicon.contains(&word) {
            return Err(GuessRejection::UnknownWord(word.text().to_string()));
        }

        // classify cannot fail here: Word::new already validated the shape
        let record = classify(raw, &self.answer).map_err(GuessRejection::Malformed)?;
        let won = record.is_winning();

        self.ledger[self.attempt - 1] = record;
        self.attempt += 1;

        if won {
            Ok(GuessOutcome::Won)
        } else if self.attempt > MAX_ATTEMPTS {
            Ok(GuessOutcome::Lost)
        } else {
            Ok(GuessOutcome::InProgress)
        }
    }

    /// Best verdict observed so far for each of the 26 letters
    ///
    /// Recomputed on demand from the filled ledger slots; letters never
    /// guessed stay `Unscored`.
    #[must_use]
    pub fn used_letters(&self) -> [LetterVerdict; 26] {
        let mut letters = [LetterVerdict::Unscored; 26];

        for record in self.ledger.iter().filter(|r| r.is_filled()) {
            for (ch, verdict) in record.word().bytes().zip(record.verdicts()) {
                if !ch.is_ascii_alphabetic() {
                    continue;
                }
                let index = usize::from(ch.to_ascii_lowercase() - b'a');
                letters[index] = letters[index].max(*verdict);
            }
        }

        letters
    }
}
