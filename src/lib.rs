//! wordrs
//!
//! A terminal word-guessing game: guess the daily 5-letter word in six tries,
//! with per-letter feedback after each guess. The daily answer is seeded from
//! the calendar date, so every player gets the same word without a server.
//!
//! # Quick Start
//!
//! ```rust
//! use wordrs::core::{classify, LetterVerdict, Word};
//!
//! let answer = Word::new("eager").unwrap();
//! let record = classify("erase", &answer).unwrap();
//!
//! assert_eq!(record.verdicts()[0], LetterVerdict::Correct);
//! assert!(!record.is_winning());
//! ```

// Core domain types
pub mod core;

// Session configuration
pub mod config;

// Game progression state machine
pub mod game;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;
