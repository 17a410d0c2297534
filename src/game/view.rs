//! Render-ready snapshot of the whole game screen.

use super::board_view::BoardView;
use super::controller::GameController;
use super::move_list::{ListOrder, MoveEntry};
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Status line text.
    pub status: String,
    /// Board projection of the current position.
    pub board: BoardView,
    /// Index of the displayed history entry.
    pub current: usize,
    /// Move-list order.
    pub order: ListOrder,
    /// Order toggle button label.
    pub toggle_label: String,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    /// Projects `game`.
    pub fn new(game: &GameController) -> Self {
        let board = game.board_view();
        Self {
            status: board.status.to_string(),
            board,
            current: game.current(),
            order: game.order(),
            toggle_label: game.order().label(),
            moves: game.moves(),
        }
    }
}
