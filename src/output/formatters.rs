//! Colored tile formatting for words and the used-letter strip

use colored::{ColoredString, Colorize};

use crate::core::{GuessRecord, LetterVerdict};

/// Format one letter as a colored `[X]` tile
///
/// Correct letters get a green background, misplaced letters yellow, absent
/// letters grey, unscored letters black. Letters always display as capitals.
#[must_use]
pub fn tile(letter: char, verdict: LetterVerdict) -> ColoredString {
    let cell = format!("[{}]", letter.to_ascii_uppercase());
    match verdict {
        LetterVerdict::Correct => cell.white().on_green(),
        LetterVerdict::Misplaced => cell.black().on_yellow(),
        LetterVerdict::Absent => cell.white().on_bright_black(),
        LetterVerdict::Unscored => cell.white().on_black(),
    }
}

/// Format a word as a row of tiles colored by verdict
///
/// The two slices are zipped; callers pass equal lengths.
#[must_use]
pub fn format_word(word: &str, verdicts: &[LetterVerdict]) -> String {
    word.chars()
        .zip(verdicts)
        .map(|(letter, verdict)| tile(letter, *verdict).to_string())
        .collect()
}

/// Format a ledger row
#[must_use]
pub fn format_record(record: &GuessRecord) -> String {
    format_word(record.word(), record.verdicts())
}

/// Format the 26-letter used-letter strip
#[must_use]
pub fn format_letter_strip(letters: &[LetterVerdict; 26]) -> String {
    ('a'..='z')
        .zip(letters)
        .map(|(letter, verdict)| tile(letter, *verdict).to_string())
        .collect()
}
