//! Game progression: answer selection, the per-session attempt ledger, and
//! the interactive state machine.

mod machine;
mod select;
mod session;

pub use machine::{Game, GameState};
pub use select::pick_answer;
pub use session::{GuessOutcome, GuessRejection, Lexicon, MAX_ATTEMPTS, Session};
