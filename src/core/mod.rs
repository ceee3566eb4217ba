//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and safe to call concurrently.

mod score;
mod verdict;
mod word;

pub use score::{GuessRecord, classify};
pub use verdict::LetterVerdict;
pub use word::{Word, WordError};
