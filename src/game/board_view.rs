//! Board component: the nine cells of one board state, the status line,
//! and the move rule that routes a cell selection to a new board.

use super::status::Status;
use serde::{Deserialize, Serialize};
use tateti_rules::{Board, Player, Position, Square, Win, check_winner, place};
use tracing::{debug, instrument};

/// One rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Which cell this is.
    pub position: Position,
    /// What the cell holds.
    pub square: Square,
    /// Whether the cell is part of the winning line.
    pub winning: bool,
}

/// Projection of a board state for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Cells in row-major order.
    pub cells: [CellView; 9],
    /// Status line.
    pub status: Status,
    /// Completed line, if any.
    pub win: Option<Win>,
}

impl BoardView {
    /// Projects `board` with `to_move` on turn.
    #[instrument(skip(board))]
    pub fn new(board: &Board, to_move: Player) -> Self {
        let win = check_winner(board);
        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            winning: win.is_some_and(|w| w.contains(position)),
        });
        Self {
            cells,
            status: Status::of(board, to_move),
            win,
        }
    }

    /// Returns the cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }
}

/// Applies a move of `mark` at `pos` to `board`.
///
/// Returns the new board, or `None` when the square is taken or the game
/// is already won. Rejections are only logged.
#[instrument(skip(board))]
pub fn apply_move(pos: Position, board: &Board, mark: Player) -> Option<Board> {
    match place(board, pos, mark) {
        Ok(next) => Some(next),
        Err(e) => {
            debug!(error = %e, "Ignoring move");
            None
        }
    }
}
