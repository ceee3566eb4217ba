//! wordrs - CLI
//!
//! Terminal word-guessing game. By default the answer is seeded from today's
//! date; flags can force a date, force a word, draw at random, or loop
//! forever.

use std::io;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::Parser;
use wordrs::{
    config::GameConfig,
    core::Word,
    game::Game,
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordrs",
    about = "Guess the daily 5-letter word in six tries",
    version
)]
struct Cli {
    /// Play the word for the given date instead of today's.
    /// Incompatible with --word, --random and --infinite
    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        conflicts_with_all = ["word", "random", "infinite"]
    )]
    date: Option<NaiveDate>,

    /// Force the answer to the given 5-letter word (for testing/sharing).
    /// Incompatible with --date, --random and --infinite
    #[arg(
        long,
        value_name = "WORD",
        conflicts_with_all = ["random", "infinite"]
    )]
    word: Option<String>,

    /// Pick the answer at random instead of by date.
    /// Incompatible with --date and --word
    #[arg(long)]
    random: bool,

    /// Keep playing game after game (implies --random).
    /// Incompatible with --date and --word
    #[arg(long)]
    infinite: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let word = cli
        .word
        .as_deref()
        .map(Word::new)
        .transpose()
        .map_err(|err| anyhow!("invalid --word value: {err}"))?;

    let config = GameConfig::new(word, cli.date, cli.random, cli.infinite)
        .context("invalid configuration")?;

    let lists = WordLists::load_default().context("failed to load word lists")?;

    let stdin = io::stdin();
    let mut game = Game::new(&config, &lists, stdin.lock());
    game.run().context("game loop failed")?;

    Ok(())
}
