//! Application state and logic.

use super::input::{Action, Direction, move_cursor};
use crate::game::GameController;
use tateti_rules::Position;
use tracing::debug;

/// Which pane receives arrow keys and `Enter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    Moves,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameController,
    focus: Focus,
    cursor: Position,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `game`.
    pub fn new(game: GameController) -> Self {
        Self {
            game,
            focus: Focus::Board,
            cursor: Position::Center,
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Selected row of the move list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, focus = ?self.focus, "Handling action");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Place(pos) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.transition(|game| game.play(pos));
            }
            Action::Cursor(direction) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, direction),
                Focus::Moves => self.move_selection(direction),
            },
            Action::Select => match self.focus {
                Focus::Board => {
                    let pos = self.cursor;
                    self.transition(|game| game.play(pos));
                }
                Focus::Moves => self.activate_row(self.selected),
            },
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            Action::ToggleOrder => {
                // Keep the same entry selected after the list flips.
                self.selected = self.last_row() - self.selected;
                self.transition(GameController::toggle_order);
            }
            Action::SelectRow(row) => {
                self.focus = Focus::Moves;
                self.activate_row(row);
            }
        }
    }

    /// Runs a controller transition in place.
    fn transition(&mut self, f: impl FnOnce(GameController) -> GameController) {
        let game = std::mem::take(&mut self.game);
        self.game = f(game);
        self.selected = self.selected.min(self.last_row());
    }

    fn last_row(&self) -> usize {
        self.game.history().len() - 1
    }

    fn move_selection(&mut self, direction: Direction) {
        self.selected = match direction {
            Direction::Up => self.selected.saturating_sub(1),
            Direction::Down => (self.selected + 1).min(self.last_row()),
            Direction::Left | Direction::Right => self.selected,
        };
    }

    /// Jumps to the entry shown at `row`; the "current" label does nothing.
    fn activate_row(&mut self, row: usize) {
        let Some(entry) = self.game.moves().get(row).copied() else {
            return;
        };
        self.selected = row;
        if let Some(target) = entry.jump_target() {
            self.transition(|game| game.jump_to(target));
        }
    }
}
