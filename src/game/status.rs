//! Status line shown above the board.

use serde::{Deserialize, Serialize};
use tateti_rules::{Board, Player, check_winner, is_full};
use tracing::instrument;

/// Outcome summary of a board, in display priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Ganador: {}", _0)]
    Winner(Player),
    /// Every square is filled and no line is complete.
    #[display("Empate")]
    Draw,
    /// The game goes on.
    #[display("Siguiente jugador: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Derives the status of `board` with `to_move` on turn.
    ///
    /// A winner takes precedence over a full board.
    #[instrument(skip(board))]
    pub fn of(board: &Board, to_move: Player) -> Self {
        if let Some(win) = check_winner(board) {
            Status::Winner(win.player)
        } else if is_full(board) {
            Status::Draw
        } else {
            Status::NextPlayer(to_move)
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::Winner(Player::O).to_string(), "Ganador: O");
        assert_eq!(Status::Draw.to_string(), "Empate");
        assert_eq!(
            Status::NextPlayer(Player::X).to_string(),
            "Siguiente jugador: X"
        );
    }

    #[test]
    fn test_winner_beats_full_board() {
        let board: Board = "XXX OOX OXO".parse().unwrap();
        assert_eq!(Status::of(&board, Player::O), Status::Winner(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert_eq!(Status::of(&board, Player::O), Status::Draw);
        assert!(Status::Draw.is_over());
    }

    #[test]
    fn test_next_player() {
        let board: Board = "X.. ... ...".parse().unwrap();
        let status = Status::of(&board, Player::O);
        assert_eq!(status, Status::NextPlayer(Player::O));
        assert!(!status.is_over());
    }
}
