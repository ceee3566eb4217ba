//! Answer selection
//!
//! A forced word wins outright. Otherwise the answer is drawn uniformly from
//! the pool, either time-seeded (`--random`) or seeded from the whole-day
//! count between the configured date and 1970-01-01. The day-count seed is
//! what makes the daily word identical for every player on a given date
//! without a server; the same word can still recur on different days because
//! the pool is not partitioned by date.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GameConfig, epoch};
use crate::core::Word;

/// Pick the secret answer for a session
///
/// # Panics
/// Panics if `pool` is empty; `WordLists` loading guarantees a non-empty
/// pool before any session starts.
#[must_use]
pub fn pick_answer(config: &GameConfig, pool: &[Word]) -> Word {
    if let Some(word) = config.word() {
        debug!("using forced answer {word}");
        return word.clone();
    }

    let index = if config.random() {
        rand::rng().random_range(0..pool.len())
    } else {
        let days = config
            .date()
            .signed_duration_since(epoch())
            .num_days();
        let mut rng = StdRng::seed_from_u64(days as u64);
        rng.random_range(0..pool.len())
    };

    debug!("selected answer {} of {}", index, pool.len());
    pool[index].clone()
}
