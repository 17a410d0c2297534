//! Pure tic-tac-toe rules.
//!
//! Boards are immutable `Copy` values; the rules here only ever build new
//! boards. Rendering, history and input handling live in the `tateti`
//! crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use position::Position;
pub use rules::{LINES, Win, check_winner, is_draw, is_full, place};
pub use types::{Board, BoardParseError, Player, Square};

/// Alias for clarity where a player is referred to by its mark.
pub type Mark = Player;
