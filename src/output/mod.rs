//! Terminal output formatting
//!
//! Colored tile rendering and the game screens. The core stays agnostic to
//! color and terminal handling; only this module touches them.

pub mod display;
pub mod formatters;

pub use display::{
    clear_screen, print_grid, print_guess_prompt, print_help, print_logo, print_loss,
    print_menu_prompt, print_rejection, print_used_letters, print_win,
};
