//! Ta-te-ti: two-player tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules** (`tateti_rules`): boards, positions, win and draw detection
//! - **Game**: the controller owning history, current position and list order,
//!   plus the board, status and move-list projections
//! - **TUI**: ratatui front end over the controller
//! - **Replay**: headless driver printing the same view as text or JSON
//!
//! # Example
//!
//! ```
//! use tateti::{GameController, Position, Status};
//!
//! let game = GameController::new()
//!     .play(Position::Center)
//!     .play(Position::TopLeft)
//!     .jump_to(1);
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.board_view().status, Status::NextPlayer(tateti::Player::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod game;
pub mod logging;
pub mod replay;
pub mod tui;

// Crate-level exports - Settings
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};

// Crate-level exports - Game controller and views
pub use game::{
    BoardView, CellView, EntryKind, GameController, GameView, History, ListOrder, MoveEntry,
    Status, apply_move,
};

// Crate-level exports - Replay
pub use replay::{OutputFormat, ReplayError, ReplayScript, parse_moves, render, render_text};

// Crate-level exports - Rules
pub use tateti_rules::{Board, Mark, MoveError, Player, Position, Square, Win, check_winner};
