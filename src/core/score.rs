//! Guess scoring against the secret answer
//!
//! `classify` implements the standard two-pass policy with consume-on-match
//! semantics so repeated letters are credited at most once per occurrence in
//! the answer:
//!
//! 1. First pass: mark exact-position matches as `Correct` and consume the
//!    matched answer position.
//! 2. Second pass: for each remaining slot, scan unconsumed answer positions
//!    left to right; the first match becomes `Misplaced` and is consumed.
//!
//! Consumption uses an explicit per-position `[bool; 5]` rather than blanking
//! letters with a sentinel character, so no input byte can collide with the
//! "already used" marker.

use super::{LetterVerdict, Word, WordError};

/// One accepted guess and its per-position verdicts
///
/// Immutable after creation. The stored word preserves the case the player
/// typed; scoring itself is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: String,
    verdicts: [LetterVerdict; 5],
}

impl GuessRecord {
    /// Placeholder for a ledger slot that has not been used yet
    #[must_use]
    pub fn empty() -> Self {
        Self {
            word: "     ".to_string(),
            verdicts: [LetterVerdict::Unscored; 5],
        }
    }

    /// The guessed word as submitted (case preserved); five spaces for an
    /// empty slot
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Per-position verdicts, left to right
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; 5] {
        &self.verdicts
    }

    /// Whether this slot holds a scored guess (empty slots are all `Unscored`)
    #[inline]
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.verdicts[0] != LetterVerdict::Unscored
    }

    /// Whether every position is `Correct`
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.verdicts.iter().all(|v| v.is_correct())
    }
}

/// Score a guess against the answer
///
/// The guess must pass [`Word::is_shape_valid`]; the answer is assumed valid.
/// Pure function: the same `(guess, answer)` pair always yields the same
/// verdicts.
///
/// # Errors
/// Returns `WordError` when the guess is not exactly 5 ASCII letters.
///
/// # Examples
/// ```
/// use wordrs::core::{classify, LetterVerdict, Word};
///
/// let answer = Word::new("eager").unwrap();
/// let record = classify("erase", &answer).unwrap();
/// assert_eq!(
///     record.verdicts(),
///     &[
///         LetterVerdict::Correct,
///         LetterVerdict::Misplaced,
///         LetterVerdict::Misplaced,
///         LetterVerdict::Absent,
///         LetterVerdict::Misplaced,
///     ]
/// );
/// ```
pub fn classify(guess: &str, answer: &Word) -> Result<GuessRecord, WordError> {
    let normalized = Word::new(guess)?;
    let g = normalized.chars();
    let a = answer.chars();

    let mut verdicts = [LetterVerdict::Absent; 5];
    let mut consumed = [false; 5];

    // First pass: exact matches, consuming the answer position immediately
    for i in 0..5 {
        if g[i] == a[i] {
            verdicts[i] = LetterVerdict::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: displaced matches against the unconsumed remainder
    for i in 0..5 {
        if verdicts[i].is_correct() {
            continue;
        }
        for j in 0..5 {
            if j != i && !consumed[j] && a[j] == g[i] {
                verdicts[i] = LetterVerdict::Misplaced;
                consumed[j] = true;
                break;
            }
        }
    }

    Ok(GuessRecord {
        word: guess.to_string(),
        verdicts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterVerdict::{Absent, Correct, Misplaced, Unscored};

    fn verdicts(guess: &str, answer: &str) -> [LetterVerdict; 5] {
        let answer = Word::new(answer).unwrap();
        *classify(guess, &answer).unwrap().verdicts()
    }

    #[test]
    fn erase_against_eager() {
        assert_eq!(
            verdicts("ERASE", "EAGER"),
            [Correct, Misplaced, Misplaced, Absent, Misplaced]
        );
    }

    #[test]
    fn arise_against_eager() {
        assert_eq!(
            verdicts("ARISE", "EAGER"),
            [Misplaced, Misplaced, Absent, Absent, Misplaced]
        );
    }

    #[test]
    fn exact_match_is_all_correct() {
        assert_eq!(
            verdicts("EAGER", "EAGER"),
            [Correct, Correct, Correct, Correct, Correct]
        );
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        assert_eq!(
            verdicts("POUND", "EAGER"),
            [Absent, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn repeated_letter_credited_once() {
        // SPEED vs ERASE: answer has two Es, guess has two Es plus an S.
        // Neither E lands on an answer E, so both are misplaced; the second
        // answer E is consumed by the first guess E's scan.
        assert_eq!(
            verdicts("SPEED", "ERASE"),
            [Misplaced, Absent, Misplaced, Misplaced, Absent]
        );
    }

    #[test]
    fn correct_match_consumes_before_displaced_scan() {
        // ROBOT vs FLOOR: second O is an exact match and must not be stolen
        // by the first O's displaced scan.
        assert_eq!(
            verdicts("ROBOT", "FLOOR"),
            [Misplaced, Misplaced, Absent, Correct, Absent]
        );
    }

    #[test]
    fn scoring_is_case_insensitive_and_case_preserving() {
        let answer = Word::new("EAGER").unwrap();
        let record = classify("eRaSe", &answer).unwrap();
        assert_eq!(record.word(), "eRaSe");
        assert_eq!(
            record.verdicts(),
            &[Correct, Misplaced, Misplaced, Absent, Misplaced]
        );
    }

    #[test]
    fn classify_is_idempotent() {
        let answer = Word::new("eager").unwrap();
        let first = classify("arise", &answer).unwrap();
        let second = classify("arise", &answer).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn classify_rejects_invalid_shapes() {
        let answer = Word::new("eager").unwrap();
        assert!(matches!(
            classify("GARBAGE", &answer),
            Err(WordError::InvalidLength(7))
        ));
        assert!(matches!(
            classify("&*@$%", &answer),
            Err(WordError::InvalidCharacters)
        ));
        assert!(classify("", &answer).is_err());
    }

    #[test]
    fn empty_record_is_unscored_placeholder() {
        let record = GuessRecord::empty();
        assert_eq!(record.word(), "     ");
        assert_eq!(record.verdicts(), &[Unscored; 5]);
        assert!(!record.is_filled());
        assert!(!record.is_winning());
    }

    #[test]
    fn winning_record_detection() {
        let answer = Word::new("crane").unwrap();
        let record = classify("crane", &answer).unwrap();
        assert!(record.is_filled());
        assert!(record.is_winning());

        let near_miss = classify("crate", &answer).unwrap();
        assert!(near_miss.is_filled());
        assert!(!near_miss.is_winning());
    }
}
