//! Per-letter verdicts for scored guesses
//!
//! Every position in a scored guess receives exactly one verdict. The derive
//! order of the variants gives the merge precedence used by the used-letter
//! summary: `Correct` beats `Misplaced` beats `Absent` beats `Unscored`,
//! so folding observations for a letter is a plain `max`.

use std::fmt;

/// Classification outcome for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterVerdict {
    /// Slot not yet evaluated (empty ledger rows, letters never guessed)
    #[default]
    Unscored,
    /// Letter not present in the remaining unmatched answer positions
    Absent,
    /// Letter present in the answer, but at a different position
    Misplaced,
    /// Letter matches this exact position
    Correct,
}

impl LetterVerdict {
    /// Check if this verdict is an exact-position match
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for LetterVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unscored => "unscored",
            Self::Absent => "absent",
            Self::Misplaced => "misplaced",
            Self::Correct => "correct",
        };
        write!(f, "{name}")
    }
}
