//! Screen geometry shared by rendering and mouse hit-testing.

use super::input::Action;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use tateti_rules::Position;

const GRID_WIDTH: u16 = 38;
const GRID_HEIGHT: u16 = 11;

/// Areas of every widget on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line box.
    pub status: Rect,
    /// Cells in row-major order.
    pub cells: [Rect; 9],
    /// Horizontal separators between rows.
    pub row_separators: [Rect; 2],
    /// Vertical separators between columns, two per row.
    pub col_separators: [Rect; 6],
    /// Order toggle button.
    pub toggle: Rect,
    /// Move list box, borders included.
    pub moves: Rect,
    /// Move list rows, inside the borders.
    pub move_rows: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Computes the layout for a frame of size `area`.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Board and moves
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GRID_WIDTH + 4), Constraint::Min(0)])
            .split(chunks[1]);

        let board_pane = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(GRID_HEIGHT)])
            .split(body[0]);

        let info_pane = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(body[1]);

        let grid = center_rect(board_pane[1], GRID_WIDTH, GRID_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(grid);

        let mut cells = [Rect::default(); 9];
        let mut col_separators = [Rect::default(); 6];
        for row in 0..3 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(12),
                    Constraint::Length(1),
                    Constraint::Length(12),
                    Constraint::Length(1),
                    Constraint::Length(12),
                ])
                .split(rows[row * 2]);
            for col in 0..3 {
                cells[row * 3 + col] = cols[col * 2];
            }
            col_separators[row * 2] = cols[1];
            col_separators[row * 2 + 1] = cols[3];
        }

        let toggle = Rect {
            width: info_pane[0].width.min(10),
            ..info_pane[0]
        };
        let moves = info_pane[1];
        let move_rows = Block::default().borders(Borders::ALL).inner(moves);

        Self {
            title: chunks[0],
            status: board_pane[0],
            cells,
            row_separators: [rows[1], rows[3]],
            col_separators,
            toggle,
            moves,
            move_rows,
            help: chunks[2],
        }
    }

    /// Finds the action under a left click at (`column`, `row`).
    ///
    /// `move_count` is the number of move-list rows currently shown.
    pub fn hit(&self, column: u16, row: u16, move_count: usize) -> Option<Action> {
        if let Some(i) = self.cells.iter().position(|r| contains(*r, column, row)) {
            return Position::from_index(i).map(Action::Place);
        }
        if contains(self.toggle, column, row) {
            return Some(Action::ToggleOrder);
        }
        if contains(self.move_rows, column, row) {
            let index = usize::from(row - self.move_rows.y);
            if index < move_count {
                return Some(Action::SelectRow(index));
            }
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 100, 30))
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = layout();
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!(a.width, 12);
            assert_eq!(a.height, 3);
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_click_on_cell() {
        let layout = layout();
        let center = layout.cells[4];
        assert_eq!(
            layout.hit(center.x + 1, center.y + 1, 1),
            Some(Action::Place(Position::Center))
        );
    }

    #[test]
    fn test_click_on_toggle() {
        let layout = layout();
        assert_eq!(
            layout.hit(layout.toggle.x + 2, layout.toggle.y + 1, 1),
            Some(Action::ToggleOrder)
        );
    }

    #[test]
    fn test_click_on_move_rows() {
        let layout = layout();
        let rows = layout.move_rows;
        assert_eq!(
            layout.hit(rows.x, rows.y + 2, 3),
            Some(Action::SelectRow(2))
        );
        assert_eq!(layout.hit(rows.x, rows.y + 3, 3), None);
    }

    #[test]
    fn test_click_on_separator_misses() {
        let layout = layout();
        let sep = layout.col_separators[0];
        assert_eq!(layout.hit(sep.x, sep.y, 1), None);
    }
}
