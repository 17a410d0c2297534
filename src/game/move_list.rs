//! Move list entries and their display order.

use serde::{Deserialize, Serialize};
use tateti_rules::Position;

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
pub enum ListOrder {
    /// Oldest move first.
    #[default]
    #[strum(serialize = "Asc")]
    #[serde(rename = "asc")]
    #[value(name = "asc")]
    Ascending,
    /// Newest move first.
    #[strum(serialize = "Desc")]
    #[serde(rename = "desc")]
    #[value(name = "desc")]
    Descending,
}

impl ListOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the order toggle button.
    pub fn label(self) -> String {
        self.to_string()
    }
}

/// How a move list entry behaves when selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// The latest history entry; shown as a plain label.
    Current,
    /// Any earlier entry; selecting it jumps there.
    JumpTo,
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveEntry {
    /// History index this entry stands for.
    pub index: usize,
    /// Label or jump target.
    pub kind: EntryKind,
    /// Cell marked by this move; `None` for the game start.
    pub placed: Option<Position>,
}

impl MoveEntry {
    /// Text of the entry without its annotation.
    pub fn label(&self) -> String {
        match (self.kind, self.index) {
            (EntryKind::Current, m) => format!("Estás en el movimiento {m}"),
            (EntryKind::JumpTo, 0) => "Ir al inicio del juego".to_string(),
            (EntryKind::JumpTo, m) => format!("Ir al movimiento #{m}"),
        }
    }

    /// `   -> (row,col)` suffix naming the marked cell.
    pub fn annotation(&self) -> Option<String> {
        self.placed
            .map(|pos| format!("   -> ({},{})", pos.row(), pos.col()))
    }

    /// Full rendered line: label followed by the annotation.
    pub fn line(&self) -> String {
        match self.annotation() {
            Some(annotation) => format!("{}{}", self.label(), annotation),
            None => self.label(),
        }
    }

    /// History index to jump to when this entry is selected.
    pub fn jump_target(&self) -> Option<usize> {
        match self.kind {
            EntryKind::JumpTo => Some(self.index),
            EntryKind::Current => None,
        }
    }
}
