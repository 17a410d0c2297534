//! Game controller: history, current position and move-list order.
//!
//! The controller is a small state machine. Every transition consumes the
//! controller and returns the next one; nothing is mutated behind the
//! caller's back, so any earlier controller value stays a valid snapshot.

use super::board_view::{BoardView, apply_move};
use super::invariants::{HistoryInvariants, HistoryViolation, InvariantSet};
use super::move_list::{EntryKind, ListOrder, MoveEntry};
use super::view::GameView;
use serde::{Deserialize, Serialize};
use tateti_rules::{Board, Player, Position, place};
use tracing::{debug, instrument, warn};

/// Chronological list of board states. Index 0 is the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// History holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of stored boards (always at least one).
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Whether no board is stored. A history holds at least the empty
    /// board, so this is `false`.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Board at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// All boards, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Index of the newest board.
    pub fn last_index(&self) -> usize {
        self.boards.len() - 1
    }

    /// Cell marked between `index - 1` and `index`; `None` for index 0.
    pub fn placed_at(&self, index: usize) -> Option<Position> {
        let previous = self.boards.get(index.checked_sub(1)?)?;
        self.boards.get(index)?.placed_since(previous)
    }

    /// Keeps entries `0..=at` and appends `board`.
    fn branch(mut self, at: usize, board: Board) -> Self {
        self.boards.truncate(at + 1);
        self.boards.push(board);
        self
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of the game's history and of the move-list presentation state.
///
/// Deserialized controllers are checked against [`HistoryInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ControllerParts")]
pub struct GameController {
    history: History,
    current: usize,
    order: ListOrder,
}

/// Serialized form of a [`GameController`], not yet validated.
#[derive(Deserialize)]
struct ControllerParts {
    history: HistoryParts,
    current: usize,
    order: ListOrder,
}

#[derive(Deserialize)]
struct HistoryParts {
    boards: Vec<Board>,
}

impl TryFrom<ControllerParts> for GameController {
    type Error = HistoryViolation;

    fn try_from(parts: ControllerParts) -> Result<Self, Self::Error> {
        let game = Self {
            history: History {
                boards: parts.history.boards,
            },
            current: parts.current,
            order: parts.order,
        };
        HistoryInvariants::check_all(&game)?;
        Ok(game)
    }
}

impl GameController {
    /// Creates a controller at the start of a new game, list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(ListOrder::Ascending)
    }

    /// Creates a controller at the start of a new game with the given
    /// list order.
    #[instrument]
    pub fn with_order(order: ListOrder) -> Self {
        Self {
            history: History::new(),
            current: 0,
            order,
        }
    }

    /// Full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed history entry.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Move-list display order.
    pub fn order(&self) -> ListOrder {
        self.order
    }

    /// Board at the current position.
    pub fn current_board(&self) -> &Board {
        &self.history.boards[self.current]
    }

    /// Player whose turn it is at the current position.
    pub fn to_move(&self) -> Player {
        Player::to_move_after(self.current)
    }

    /// Records a board reported by the board component.
    ///
    /// Entries after the current position are discarded first, then the
    /// board is appended and becomes current. A board that is not one
    /// legal move of the player to move away from the current board is
    /// ignored.
    #[instrument(skip(self, board), fields(current = self.current, len = self.history.len()))]
    pub fn record_move(self, board: Board) -> Self {
        let current = self.current_board();
        let legal = board
            .placed_since(current)
            .and_then(|pos| place(current, pos, self.to_move()).ok())
            .is_some_and(|expected| expected == board);
        if !legal {
            warn!("Ignoring board that is not one legal move from the current one");
            return self;
        }

        let dropped = self.history.last_index() - self.current;
        if dropped > 0 {
            debug!(dropped, "Discarding future history");
        }
        let history = self.history.branch(self.current, board);
        let next = Self {
            current: history.last_index(),
            history,
            order: self.order,
        };
        next.checked()
    }

    /// Places the current player's mark at `pos` on the current board.
    ///
    /// Occupied squares and finished games leave the controller unchanged.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn play(self, pos: Position) -> Self {
        let next = apply_move(pos, self.current_board(), self.to_move());
        match next {
            Some(board) => self.record_move(board),
            None => self,
        }
    }

    /// Moves the current position to `target` without touching history.
    ///
    /// Targets outside the history are ignored.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(self, target: usize) -> Self {
        if target >= self.history.len() {
            warn!(target, "Ignoring jump outside history");
            return self;
        }
        Self {
            current: target,
            ..self
        }
        .checked()
    }

    /// Flips the move-list order.
    #[instrument(skip(self), fields(order = %self.order))]
    pub fn toggle_order(self) -> Self {
        Self {
            order: self.order.toggle(),
            ..self
        }
    }

    /// Move-list entries in display order.
    ///
    /// The newest history entry is the "current" label whatever the
    /// order, so in descending order it is the first row.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let last = self.history.last_index();
        let entries = (0..=last).map(|index| {
            let kind = if index == last {
                EntryKind::Current
            } else {
                EntryKind::JumpTo
            };
            MoveEntry::new(index, kind, self.history.placed_at(index))
        });
        match self.order {
            ListOrder::Ascending => entries.collect(),
            ListOrder::Descending => entries.rev().collect(),
        }
    }

    /// Projection of the current board.
    pub fn board_view(&self) -> BoardView {
        BoardView::new(self.current_board(), self.to_move())
    }

    /// Full projection of the controller for rendering.
    pub fn view(&self) -> GameView {
        GameView::new(self)
    }

    #[cfg(debug_assertions)]
    fn checked(self) -> Self {
        if let Err(violations) = HistoryInvariants::check_all(&self) {
            let violation = HistoryViolation::from(violations);
            tracing::error!(%violation, "History invariant violated");
            panic!("{violation}");
        }
        self
    }

    #[cfg(not(debug_assertions))]
    fn checked(self) -> Self {
        self
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tateti_rules::Square;

    #[test]
    fn test_init() {
        let game = GameController::new();
        assert_eq!(game.history().len(), 1);
        assert!(!game.history().is_empty());
        assert_eq!(game.current(), 0);
        assert_eq!(game.order(), ListOrder::Ascending);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(*game.current_board(), Board::new());
    }

    #[test]
    fn test_play_appends_and_advances() {
        let game = GameController::new()
            .play(Position::Center)
            .play(Position::TopLeft);
        assert_eq!(game.current(), 2);
        assert_eq!(game.history().len(), 3);
        assert_eq!(
            game.current_board().get(Position::TopLeft),
            Square::Occupied(Player::O)
        );
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_jump_keeps_history() {
        let game = GameController::new()
            .play(Position::Center)
            .play(Position::TopLeft)
            .jump_to(1);
        assert_eq!(game.current(), 1);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let game = GameController::new().play(Position::Center);
        let same = game.clone().jump_to(5);
        assert_eq!(same, game);
    }

    #[test]
    fn test_record_move_from_past_discards_future() {
        let game = GameController::new()
            .play(Position::Center)
            .play(Position::TopLeft)
            .play(Position::BottomRight)
            .jump_to(1)
            .play(Position::BottomLeft);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current(), 2);
        assert_eq!(game.history().placed_at(2), Some(Position::BottomLeft));
    }

    #[test]
    fn test_placed_at() {
        let game = GameController::new().play(Position::MiddleRight);
        assert_eq!(game.history().placed_at(0), None);
        assert_eq!(game.history().placed_at(1), Some(Position::MiddleRight));
        assert_eq!(game.history().placed_at(2), None);
    }

    #[test]
    fn test_current_label_follows_last_entry_in_descending_order() {
        let game = GameController::new()
            .play(Position::Center)
            .play(Position::TopLeft)
            .toggle_order();
        let moves = game.moves();
        assert_eq!(moves[0].index, 2);
        assert_eq!(moves[0].kind, EntryKind::Current);
        assert!(moves[1..].iter().all(|m| m.kind == EntryKind::JumpTo));
        assert_eq!(moves[2].index, 0);
    }

    #[test]
    fn test_record_move_ignores_illegal_boards() {
        let game = GameController::new();

        let two_marks: Board = "O.. .O. ...".parse().unwrap();
        assert_eq!(game.clone().record_move(two_marks), game);

        let wrong_player: Board = "O.. ... ...".parse().unwrap();
        assert_eq!(game.clone().record_move(wrong_player), game);

        assert_eq!(game.clone().record_move(Board::new()), game);

        let game = game.play(Position::TopLeft);
        let overwrite: Board = "O.. ... ...".parse().unwrap();
        assert_eq!(game.clone().record_move(overwrite), game);
    }

    #[test]
    fn test_record_move_accepts_next_move() {
        let board: Board = "... .X. ...".parse().unwrap();
        let game = GameController::new().record_move(board);
        assert_eq!(game.current(), 1);
        assert_eq!(*game.current_board(), board);
    }

    #[test]
    fn test_record_move_ignores_moves_after_win() {
        let game = GameController::new()
            .play(Position::TopLeft)
            .play(Position::MiddleLeft)
            .play(Position::TopCenter)
            .play(Position::Center)
            .play(Position::TopRight);
        let after_win: Board = "XXX OO. ..O".parse().unwrap();
        assert_eq!(game.clone().record_move(after_win), game);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let game = GameController::new()
            .play(Position::Center)
            .play(Position::TopLeft)
            .jump_to(1)
            .toggle_order();
        let json = serde_json::to_string(&game).unwrap();
        let back: GameController = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }

    #[test]
    fn test_deserialize_rejects_broken_state() {
        let empty = r#"{"history":{"boards":[]},"current":0,"order":"asc"}"#;
        assert!(serde_json::from_str::<GameController>(empty).is_err());

        let game = GameController::new().play(Position::Center);
        let mut value = serde_json::to_value(&game).unwrap();
        value["current"] = 7.into();
        let err = serde_json::from_value::<GameController>(value).unwrap_err();
        assert!(
            err.to_string()
                .contains("Current position lies within the history")
        );

        let two_marks: Board = "OO. ... ...".parse().unwrap();
        let mut value = serde_json::to_value(&game).unwrap();
        value["history"]["boards"][1] = serde_json::to_value(two_marks).unwrap();
        assert!(serde_json::from_value::<GameController>(value).is_err());
    }
}
