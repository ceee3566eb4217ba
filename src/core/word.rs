//! Five-letter word representation
//!
//! A `Word` stores a validated, lowercase-normalized 5-letter word. Shape
//! validity is purely lexical (exactly 5 ASCII letters) and never consults
//! a dictionary.

use std::fmt;

/// A validated 5-letter word, normalized to lowercase
///
/// Comparison is case-insensitive because construction lowercases the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; 5],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "word contains non-alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Check whether a candidate string has the shape of a playable word:
    /// exactly 5 characters, each an ASCII letter. Case is irrelevant.
    ///
    /// This does NOT test dictionary membership.
    ///
    /// # Examples
    /// ```
    /// use wordrs::core::Word;
    ///
    /// assert!(Word::is_shape_valid("RAISE"));
    /// assert!(Word::is_shape_valid("rAiSe"));
    /// assert!(!Word::is_shape_valid("X-RAY"));
    /// assert!(!Word::is_shape_valid(""));
    /// ```
    #[must_use]
    pub fn is_shape_valid(candidate: &str) -> bool {
        candidate.len() == 5 && candidate.bytes().all(|b| b.is_ascii_alphabetic())
    }

    /// Create a new `Word` from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is not ASCII
    /// - Length is not exactly 5
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordrs::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("toolong").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != 5 {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = text.to_ascii_lowercase();
        let chars: [u8; 5] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a lowercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a lowercase byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_valid_accepts_any_case() {
        assert!(Word::is_shape_valid("RAISE"));
        assert!(Word::is_shape_valid("raise"));
        assert!(Word::is_shape_valid("rAiSe"));
    }

    #[test]
    fn shape_valid_rejects_bad_shapes() {
        assert!(!Word::is_shape_valid("A"));
        assert!(!Word::is_shape_valid("PLIGHT"));
        assert!(!Word::is_shape_valid("X-RAY"));
        assert!(!Word::is_shape_valid("áéíóú"));
        assert!(!Word::is_shape_valid(""));
        assert!(!Word::is_shape_valid("ab de"));
        assert!(!Word::is_shape_valid("12345"));
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("toolong"),
            Err(WordError::InvalidLength(7))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("cran "),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("&*@$%"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(Word::new("áéíóú"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_display() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
