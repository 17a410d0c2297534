//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tateti_rules::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top row / first list entry.
    Up,
    /// Towards the bottom row / last list entry.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// A user intent, independent of the input device that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Place the current mark at a cell.
    Place(Position),
    /// Move the board cursor or the move-list selection.
    Cursor(Direction),
    /// Activate whatever has focus: the cell under the cursor or the
    /// selected move-list entry.
    Select,
    /// Switch focus between the board and the move list.
    SwitchFocus,
    /// Flip the move-list order.
    ToggleOrder,
    /// Activate the move-list row at this visual index.
    SelectRow(usize),
}

/// Maps a key press to an action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Place),
        KeyCode::Up => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right => Some(Action::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Char('o') => Some(Action::ToggleOrder),
        _ => None,
    }
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}
