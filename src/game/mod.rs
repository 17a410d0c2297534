//! Game state and its projections.

mod board_view;
mod controller;
pub mod invariants;
mod move_list;
mod status;
mod view;

pub use board_view::{BoardView, CellView, apply_move};
pub use controller::{GameController, History};
pub use move_list::{EntryKind, ListOrder, MoveEntry};
pub use status::Status;
pub use view::GameView;
