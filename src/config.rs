//! Session configuration
//!
//! `GameConfig` fixes the parameters of a run at startup: an optional forced
//! answer, an optional forced date, time-seeded random mode, and infinite
//! replay. Mutually exclusive combinations fail at construction rather than
//! being silently coerced.

use std::fmt;

use chrono::{Local, NaiveDate};

use crate::core::Word;

/// Epoch floor for forced dates and the zero point of the daily seed
///
/// `NaiveDate::default()` is 1970-01-01.
#[must_use]
pub fn epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Invalid configuration combinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two options that cannot be combined were both supplied
    Conflict(&'static str, &'static str),
    /// A forced date before 1970-01-01
    DateBeforeEpoch(NaiveDate),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict(a, b) => write!(f, "--{a} and --{b} are incompatible"),
            Self::DateBeforeEpoch(date) => {
                write!(f, "date must be 1970-01-01 or later, got {date}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable parameters for a run of the game
#[derive(Debug, Clone)]
pub struct GameConfig {
    word: Option<Word>,
    date: NaiveDate,
    random: bool,
    infinite: bool,
}

impl GameConfig {
    /// Build and validate a configuration
    ///
    /// `infinite` forces `random` on. When neither a date nor any other
    /// override is given, the date defaults to today.
    ///
    /// # Errors
    /// Returns `ConfigError` when mutually exclusive options are combined or
    /// the forced date is before 1970-01-01.
    pub fn new(
        word: Option<Word>,
        date: Option<NaiveDate>,
        random: bool,
        infinite: bool,
    ) -> Result<Self, ConfigError> {
        let random = random || infinite;

        if infinite && word.is_some() {
            return Err(ConfigError::Conflict("infinite", "word"));
        }
        if infinite && date.is_some() {
            return Err(ConfigError::Conflict("infinite", "date"));
        }
        if random && word.is_some() {
            return Err(ConfigError::Conflict("random", "word"));
        }
        if random && date.is_some() {
            return Err(ConfigError::Conflict("random", "date"));
        }
        if word.is_some() && date.is_some() {
            return Err(ConfigError::Conflict("word", "date"));
        }
        if let Some(date) = date
            && date < epoch()
        {
            return Err(ConfigError::DateBeforeEpoch(date));
        }

        Ok(Self {
            word,
            date: date.unwrap_or_else(|| Local::now().date_naive()),
            random,
            infinite,
        })
    }

    /// Configuration with all defaults: today's daily word, one game
    ///
    /// # Panics
    /// Will not panic - the default combination is always valid.
    #[must_use]
    pub fn daily() -> Self {
        Self::new(None, None, false, false).expect("default configuration is valid")
    }

    /// Explicitly forced answer, if any
    #[inline]
    #[must_use]
    pub fn word(&self) -> Option<&Word> {
        self.word.as_ref()
    }

    /// Date used to seed daily answer selection
    #[inline]
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Whether the answer is drawn from a time-seeded source
    #[inline]
    #[must_use]
    pub const fn random(&self) -> bool {
        self.random
    }

    /// Whether the game replays forever after a win or loss
    #[inline]
    #[must_use]
    pub const fn infinite(&self) -> bool {
        self.infinite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn defaults_to_today() {
        let config = GameConfig::daily();
        assert_eq!(config.date(), Local::now().date_naive());
        assert!(config.word().is_none());
        assert!(!config.random());
        assert!(!config.infinite());
    }

    #[test]
    fn infinite_implies_random() {
        let config = GameConfig::new(None, None, false, true).unwrap();
        assert!(config.random());
        assert!(config.infinite());
    }

    #[test]
    fn past_date_is_kept_verbatim() {
        let config = GameConfig::new(None, Some(date(2022, 3, 14)), false, false).unwrap();
        assert_eq!(config.date(), date(2022, 3, 14));
        assert!(!config.random());
    }

    #[test]
    fn epoch_is_the_earliest_valid_date() {
        assert!(GameConfig::new(None, Some(date(1970, 1, 1)), false, false).is_ok());

        let result = GameConfig::new(None, Some(date(1969, 12, 31)), false, false);
        assert!(matches!(result, Err(ConfigError::DateBeforeEpoch(d)) if d == date(1969, 12, 31)));
    }

    #[test]
    fn infinite_and_word_conflict() {
        let result = GameConfig::new(Some(word("crane")), None, false, true);
        assert!(matches!(
            result,
            Err(ConfigError::Conflict("infinite", "word"))
        ));
    }

    #[test]
    fn infinite_and_date_conflict() {
        let result = GameConfig::new(None, Some(date(2022, 3, 14)), false, true);
        assert!(matches!(
            result,
            Err(ConfigError::Conflict("infinite", "date"))
        ));
    }

    #[test]
    fn random_and_word_conflict() {
        let result = GameConfig::new(Some(word("crane")), None, true, false);
        assert!(matches!(
            result,
            Err(ConfigError::Conflict("random", "word"))
        ));
    }

    #[test]
    fn random_and_date_conflict() {
        let result = GameConfig::new(None, Some(date(2022, 3, 14)), true, false);
        assert!(matches!(
            result,
            Err(ConfigError::Conflict("random", "date"))
        ));
    }

    #[test]
    fn word_and_date_conflict() {
        let result = GameConfig::new(Some(word("crane")), Some(date(2022, 3, 14)), false, false);
        assert!(matches!(result, Err(ConfigError::Conflict("word", "date"))));
    }

    #[test]
    fn forced_word_alone_is_valid() {
        let config = GameConfig::new(Some(word("CRANE")), None, false, false).unwrap();
        assert_eq!(config.word().unwrap().text(), "crane");
        assert!(!config.random());
    }
}
