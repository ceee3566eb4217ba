//! Game screens: logo, intro prompt, help, guess grid, end of game
//!
//! The core emits word/verdict pairs; everything here is presentation. The
//! screen is cleared between frames so the grid redraws in place.

use std::io::{self, Write};

use colored::Colorize;
use crossterm::{cursor::MoveTo, execute, terminal::{Clear, ClearType}};

use super::formatters::{format_letter_strip, format_record, format_word};
use crate::core::{GuessRecord, LetterVerdict, Word};
use crate::game::MAX_ATTEMPTS;

/// Clear the terminal and home the cursor
///
/// # Errors
/// Returns an I/O error if the terminal rejects the escape sequence.
pub fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}

/// Print the game logo banner
pub fn print_logo() {
    println!(
        "{} {} {} {} {}",
        "[W]".black().on_green(),
        "[O]".black().on_white(),
        "[R]".black().on_white(),
        "[D]".black().on_white(),
        "[RS]".black().on_yellow()
    );
}

/// Print the shared menu prompt used by the intro, help, and end screens
pub fn print_menu_prompt() {
    println!("\nPress [enter] to play");
    println!("\nType 'help' for how to play");
    println!("Type 'quit' or press [Ctrl + D] to quit");
}

/// Print the how-to-play screen with worked examples
pub fn print_help() {
    use LetterVerdict::{Correct, Misplaced, Unscored};

    println!("{}", "\nHOW TO PLAY".bold());
    println!("------------------------------");
    println!("Guess the word in {MAX_ATTEMPTS} tries");
    println!("Each guess must be a valid 5-letter word. Hit the enter button to submit.");
    println!(
        "After each guess, the color of the tiles will change to show how close your guess was to the word."
    );
    println!("------------------------------");
    println!("\nExamples");
    println!(
        "\n{}",
        format_word("WEARY", &[Correct, Unscored, Unscored, Unscored, Unscored])
    );
    println!("The letter W is in the word and in the correct spot.");
    println!(
        "\n{}",
        format_word("PILLS", &[Unscored, Misplaced, Unscored, Unscored, Unscored])
    );
    println!("The letter I is in the word but in the wrong spot.");
    println!("\n{}", format_word("VAGUE", &[Unscored; 5]));
    println!("The letter U is not in the word in any spot.");
    println!("\n------------------------------");
    println!("A new word will be available each day");
    println!("------------------------------");
}

/// Print the 6x5 guess grid
pub fn print_grid(records: &[GuessRecord; MAX_ATTEMPTS]) {
    for record in records {
        println!("{}", format_record(record));
    }
}

/// Print the 26-letter used-letter strip
pub fn print_used_letters(letters: &[LetterVerdict; 26]) {
    println!("Used letters: {}", format_letter_strip(letters));
}

/// Print the guess prompt without a trailing newline
///
/// # Errors
/// Returns an I/O error if stdout cannot be flushed.
pub fn print_guess_prompt() -> io::Result<()> {
    print!("Enter guess: ");
    io::stdout().flush()
}

/// Print the retry message for a rejected guess
pub fn print_rejection(reason: &impl std::fmt::Display) {
    println!("{reason}. Try again...");
}

/// Print the win banner
pub fn print_win() {
    println!("\nWell done!");
}

/// Print the loss banner, revealing the answer as an all-correct row
pub fn print_loss(answer: &Word) {
    println!("\nSorry, you lost...");
    println!(
        "The correct answer was {}",
        format_word(answer.text(), &[LetterVerdict::Correct; 5])
    );
}
