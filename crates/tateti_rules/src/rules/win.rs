//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the winning player and the three cells forming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// Player owning the line.
    pub player: Player,
    /// Cells of the line, in [`LINES`] order.
    pub line: [Position; 3],
}

impl Win {
    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are checked in [`LINES`] order and the first complete one wins.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player().map(|player| Win { player, line });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let win = check_winner(&board).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO .OX O..".parse().unwrap();
        let win = check_winner(&board).unwrap();
        assert_eq!(win.player, Player::O);
        assert_eq!(
            win.line,
            [Position::TopRight, Position::Center, Position::BottomLeft]
        );
        assert!(win.contains(Position::Center));
        assert!(!win.contains(Position::TopLeft));
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Row 0 and column 0 are both complete; the row is checked first.
        let board: Board = "XXX XO. XOO".parse().unwrap();
        let win = check_winner(&board).unwrap();
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX ... ...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
