//! Interactive game state machine
//!
//! One state per screen: `Intro` is initial, `Quit` is terminal. Entering
//! `Guessing` always starts a fresh session with a newly selected answer.
//! The loop blocks on one line of input at a time and performs a single
//! transition per input; end-of-input at any prompt is a quit.

use std::io::{self, BufRead};

use log::debug;

use super::select::pick_answer;
use super::session::{GuessOutcome, Session};
use crate::config::GameConfig;
use crate::output;
use crate::wordlists::WordLists;

/// Screens of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Intro,
    Help,
    Guessing,
    Won,
    Lost,
    Quit,
}

/// The running game: current state, configuration, word lists, and the
/// line-oriented input source
///
/// Generic over `BufRead` so the whole machine can be driven from a
/// `Cursor` in tests.
pub struct Game<'a, R: BufRead> {
    state: GameState,
    config: &'a GameConfig,
    lists: &'a WordLists,
    session: Session,
    input: R,
}

impl<'a, R: BufRead> Game<'a, R> {
    /// Create a game in the `Intro` state with an initialized session
    #[must_use]
    pub fn new(config: &'a GameConfig, lists: &'a WordLists, input: R) -> Self {
        Self {
            state: GameState::Intro,
            session: Session::new(pick_answer(config, lists.answers())),
            config,
            lists,
            input,
        }
    }

    /// Current state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The active session (inspectable after `run` returns)
    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Run the state machine until `Quit`
    ///
    /// # Errors
    /// Returns an I/O error if reading input or writing to the terminal
    /// fails.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.state {
                GameState::Intro => self.show_intro()?,
                GameState::Help => self.show_help()?,
                GameState::Guessing => self.show_game()?,
                GameState::Won => self.show_end(true)?,
                GameState::Lost => self.show_end(false)?,
                GameState::Quit => {
                    println!();
                    break;
                }
            }
        }
        Ok(())
    }

    fn change_state(&mut self, next: GameState) {
        // Entering Guessing always resets the session: new answer, empty
        // ledger, attempt index back to 1.
        if next == GameState::Guessing {
            self.session = Session::new(pick_answer(self.config, self.lists.answers()));
        }
        debug!("state {:?} -> {next:?}", self.state);
        self.state = next;
    }

    /// Read one trimmed line; `None` means end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }

    /// Shared menu prompt: enter plays, 'help' explains, 'quit' or EOF quits
    ///
    /// Returns true when the state changed and the current screen should
    /// stop redrawing.
    fn prompt_for_command(&mut self) -> io::Result<bool> {
        output::print_menu_prompt();

        let Some(command) = self.read_line()? else {
            self.change_state(GameState::Quit);
            return Ok(true);
        };

        match command.as_str() {
            "help" => {
                self.change_state(GameState::Help);
                Ok(true)
            }
            "quit" => {
                self.change_state(GameState::Quit);
                Ok(true)
            }
            "" => {
                self.change_state(GameState::Guessing);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn show_intro(&mut self) -> io::Result<()> {
        loop {
            output::clear_screen()?;
            output::print_logo();
            if self.prompt_for_command()? {
                return Ok(());
            }
        }
    }

    fn show_help(&mut self) -> io::Result<()> {
        loop {
            output::clear_screen()?;
            output::print_logo();
            output::print_help();
            if self.prompt_for_command()? {
                return Ok(());
            }
        }
    }

    fn show_game(&mut self) -> io::Result<()> {
        output::clear_screen()?;
        output::print_grid(self.session.records());
        println!();
        output::print_used_letters(&self.session.used_letters());
        println!();

        loop {
            output::print_guess_prompt()?;

            let Some(text) = self.read_line()? else {
                self.change_state(GameState::Quit);
                return Ok(());
            };

            match self.session.submit(&text, self.lists) {
                Ok(GuessOutcome::Won) => {
                    self.change_state(GameState::Won);
                    return Ok(());
                }
                Ok(GuessOutcome::Lost) => {
                    self.change_state(GameState::Lost);
                    return Ok(());
                }
                // Stay in Guessing; the grid redraws on the next pass
                Ok(GuessOutcome::InProgress) => return Ok(()),
                Err(rejection) => output::print_rejection(&rejection),
            }
        }
    }

    fn show_end(&mut self, won: bool) -> io::Result<()> {
        loop {
            output::clear_screen()?;
            output::print_grid(self.session.records());
            if won {
                output::print_win();
            } else {
                output::print_loss(self.session.answer());
            }

            if self.config.infinite() {
                if self.prompt_for_command()? {
                    return Ok(());
                }
            } else {
                self.change_state(GameState::Quit);
                return Ok(());
            }
        }
    }
}
