//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values. Nothing here mutates a board
//! in place; every accepted move yields a fresh board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Win, check_winner};

use crate::{Board, MoveError, Player, Position, Square};
use tracing::instrument;

/// Places `player`'s mark at `pos`, returning the resulting board.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the board already holds a winning line.
/// - [`MoveError::SquareOccupied`] if `pos` is taken.
#[instrument(skip(board))]
pub fn place(board: &Board, pos: Position, player: Player) -> Result<Board, MoveError> {
    if let Some(win) = check_winner(board) {
        return Err(MoveError::GameOver(win.player));
    }
    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }
    Ok(board.with(pos, Square::Occupied(player)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_square() {
        let board = Board::new();
        let next = place(&board, Position::Center, Player::X).unwrap();
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_on_occupied_square() {
        let board: Board = "X.. ... ...".parse().unwrap();
        assert_eq!(
            place(&board, Position::TopLeft, Player::O),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_place_after_win() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(
            place(&board, Position::BottomRight, Player::O),
            Err(MoveError::GameOver(Player::X))
        );
    }
}
