//! Reasons a move is rejected.

use super::{Player, Position};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already won.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveError {}
