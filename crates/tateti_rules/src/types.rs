//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player whose turn it is after `moves_played` moves.
    ///
    /// X moves on even counts, O on odd counts.
    pub fn to_move_after(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true for an empty square.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Placing a mark produces a new board
/// through [`Board::with`]; the original is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns a copy of this board with `square` stored at `pos`.
    pub fn with(self, pos: Position, square: Square) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = square;
        Self { squares }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Finds the square that went from empty to marked since `previous`.
    ///
    /// Scans in row-major order and returns the first such square.
    pub fn placed_since(&self, previous: &Board) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|&pos| !self.get(pos).is_empty() && previous.get(pos).is_empty())
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The text did not hold exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
    /// A character was not `X`, `O`, `.` or `_`.
    #[display("Unexpected square character {:?}", _0)]
    BadSquare(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine squares in row-major order: `X`, `O`, and `.` or `_`
    /// for empty. Whitespace and `|` separators are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' => Square::Empty,
                other => return Err(BoardParseError::BadSquare(other)),
            };
            squares.push(square);
        }
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_leaves_original_untouched() {
        let empty = Board::new();
        let next = empty.with(Position::Center, Square::Occupied(Player::X));
        assert!(empty.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_placed_since_finds_new_mark() {
        let before: Board = "X.. .O. ...".parse().unwrap();
        let after: Board = "X.. .O. ..X".parse().unwrap();
        assert_eq!(after.placed_since(&before), Some(Position::BottomRight));
        assert_eq!(before.placed_since(&before), None);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "X.O".parse::<Board>(),
            Err(BoardParseError::WrongLength(3))
        );
        assert_eq!(
            "X.O......Z".parse::<Board>(),
            Err(BoardParseError::BadSquare('Z'))
        );
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X.. ... ..O".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_turn_alternates_from_x() {
        assert_eq!(Player::to_move_after(0), Player::X);
        assert_eq!(Player::to_move_after(1), Player::O);
        assert_eq!(Player::to_move_after(4), Player::X);
    }

    #[test]
    fn test_board_serializes() {
        let board: Board = "X.. ... ...".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
