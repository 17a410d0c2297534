//! Headless replay: drive the controller from a script and print the view.

use crate::game::{GameController, GameView, ListOrder};
use derive_more::{Display, Error, From};
use tateti_rules::{Position, Square};
use tracing::{debug, info, instrument};

/// Output format of the replay command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Status line, board grid and move list.
    #[default]
    Text,
    /// The serialized [`GameView`].
    Json,
}

/// Replay failure.
#[derive(Debug, Display, Error, From)]
pub enum ReplayError {
    /// A `--moves` item is not a cell index.
    #[display("Invalid move {:?}: expected a cell index 0-8", _0)]
    InvalidMove(#[error(not(source))] String),
    /// The jump target lies outside the history.
    #[display("Cannot jump to move {}: history has {} entries", target, len)]
    JumpOutOfRange {
        /// Requested history index.
        target: usize,
        /// History length at the time of the jump.
        len: usize,
    },
    /// The view could not be serialized.
    #[display("Failed to serialize view: {}", _0)]
    #[from]
    Json(serde_json::Error),
}

/// Parses a comma- or space-separated list of cell indices (0-8).
#[instrument]
pub fn parse_moves(s: &str) -> Result<Vec<Position>, ReplayError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<usize>()
                .ok()
                .and_then(Position::from_index)
                .ok_or_else(|| ReplayError::InvalidMove(item.to_string()))
        })
        .collect()
}

/// A scripted session: moves, then an optional jump, then an optional
/// order toggle.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct ReplayScript {
    moves: Vec<Position>,
    jump: Option<usize>,
    toggle: bool,
    order: ListOrder,
}

impl ReplayScript {
    /// Runs the script. Rejected moves are skipped the same way the
    /// interactive board ignores them.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn run(&self) -> Result<GameController, ReplayError> {
        let mut game = GameController::with_order(self.order);
        for &pos in &self.moves {
            let before = game.current();
            game = game.play(pos);
            if game.current() == before {
                debug!(position = %pos, "Move had no effect");
            }
        }

        if let Some(target) = self.jump {
            let len = game.history().len();
            if target >= len {
                return Err(ReplayError::JumpOutOfRange { target, len });
            }
            game = game.jump_to(target);
        }

        if self.toggle {
            game = game.toggle_order();
        }

        info!(current = game.current(), len = game.history().len(), "Replay finished");
        Ok(game)
    }
}

/// Renders `view` in the requested format.
pub fn render(view: &GameView, format: OutputFormat) -> Result<String, ReplayError> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

/// Plain-text rendering. Winning cells are bracketed.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    out.push_str(&view.status);
    out.push_str("\n\n");

    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .filter_map(|col| Position::from_coords(row, col))
            .map(|pos| {
                let cell = view.board.cell(pos);
                let symbol = match cell.square {
                    Square::Empty => (pos.to_index() + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                if cell.winning {
                    format!("[{symbol}]")
                } else {
                    format!(" {symbol} ")
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(&format!("[{}]\n", view.toggle_label));
    for (n, entry) in view.moves.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", n + 1, entry.line()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves_accepts_commas_and_spaces() {
        let moves = parse_moves("4, 0 8").unwrap();
        assert_eq!(
            moves,
            vec![Position::Center, Position::TopLeft, Position::BottomRight]
        );
        assert!(parse_moves("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_moves_rejects_bad_items() {
        assert!(matches!(
            parse_moves("4,9"),
            Err(ReplayError::InvalidMove(item)) if item == "9"
        ));
        assert!(matches!(
            parse_moves("a"),
            Err(ReplayError::InvalidMove(_))
        ));
    }

    #[test]
    fn test_jump_out_of_range() {
        let script = ReplayScript::new(vec![Position::Center], Some(4), false, ListOrder::Ascending);
        assert!(matches!(
            script.run(),
            Err(ReplayError::JumpOutOfRange { target: 4, len: 2 })
        ));
    }

    #[test]
    fn test_text_brackets_winning_cells() {
        let moves = parse_moves("0,1,4,2,8").unwrap();
        let game = ReplayScript::new(moves, None, false, ListOrder::Ascending)
            .run()
            .unwrap();
        let text = render_text(&game.view());
        assert!(text.starts_with("Ganador: X\n"));
        assert!(text.contains("[X]| O | O \n"));
        assert!(text.contains(" 4 |[X]| 6 \n"));
        assert!(text.contains("6. Estás en el movimiento 5   -> (2,2)\n"));
    }

    #[test]
    fn test_error_sources() {
        use std::error::Error as _;

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ReplayError::from(json);
        assert!(err.to_string().starts_with("Failed to serialize view: "));
        assert!(err.source().is_some());

        let err = ReplayError::InvalidMove("z".to_string());
        assert!(err.source().is_none());
    }
}
