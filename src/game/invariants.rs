//! History invariants.
//!
//! Logical properties every [`GameController`] must satisfy. They are
//! checked after each transition in debug builds and can be tested
//! independently.

use super::controller::GameController;
use tateti_rules::{Board, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A state that violates one or more history invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("History invariant violated: {}", descriptions)]
pub struct HistoryViolation {
    /// Descriptions of the violated invariants, joined with `; `.
    pub descriptions: String,
}

impl From<Vec<InvariantViolation>> for HistoryViolation {
    fn from(violations: Vec<InvariantViolation>) -> Self {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self { descriptions }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: history starts empty and grows one mark per step.
///
/// Each board differs from its predecessor in exactly one square, which
/// went from empty to a mark. No earlier mark is ever changed.
pub struct SingleStepInvariant;

impl SingleStepInvariant {
    fn is_step(before: &Board, after: &Board) -> bool {
        let mut added = 0;
        for (b, a) in before.squares().iter().zip(after.squares()) {
            match (b, a) {
                (x, y) if x == y => {}
                (Square::Empty, Square::Occupied(_)) => added += 1,
                _ => return false,
            }
        }
        added == 1
    }
}

impl Invariant<GameController> for SingleStepInvariant {
    fn holds(game: &GameController) -> bool {
        let boards = game.history().boards();
        boards.first() == Some(&Board::new())
            && boards.windows(2).all(|w| Self::is_step(&w[0], &w[1]))
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to the previous one"
    }
}

/// Invariant: marks alternate X, O, X, ... starting with X.
pub struct AlternatingMarkInvariant;

impl Invariant<GameController> for AlternatingMarkInvariant {
    fn holds(game: &GameController) -> bool {
        let boards = game.history().boards();
        boards.windows(2).enumerate().all(|(step, w)| {
            let expected = Player::to_move_after(step);
            w[1].placed_since(&w[0])
                .is_some_and(|pos| w[1].get(pos) == Square::Occupied(expected))
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

/// Invariant: the current position indexes an existing history entry.
pub struct PositionInBoundsInvariant;

impl Invariant<GameController> for PositionInBoundsInvariant {
    fn holds(game: &GameController) -> bool {
        game.current() < game.history().len()
    }

    fn description() -> &'static str {
        "Current position lies within the history"
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    SingleStepInvariant,
    AlternatingMarkInvariant,
    PositionInBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use tateti_rules::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryInvariants::check_all(&GameController::new()).is_ok());
    }

    #[test]
    fn test_played_game_holds() {
        let game = GameController::new()
            .play(Position::Center)
            .play(Position::TopLeft)
            .play(Position::BottomRight)
            .jump_to(1)
            .play(Position::TopRight);
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_single_step_rejects_two_marks() {
        let before = Board::new();
        let after: Board = "X.. ... ..O".parse().unwrap();
        assert!(!SingleStepInvariant::is_step(&before, &after));
    }

    #[test]
    fn test_single_step_rejects_overwrite() {
        let before: Board = "X.. ... ...".parse().unwrap();
        let after: Board = "O.. ... ..X".parse().unwrap();
        assert!(!SingleStepInvariant::is_step(&before, &after));
    }

    #[test]
    fn test_violations_join_descriptions() {
        let violation = HistoryViolation::from(vec![
            InvariantViolation::new("first"),
            InvariantViolation::new("second"),
        ]);
        assert_eq!(
            violation.to_string(),
            "History invariant violated: first; second"
        );
    }
}
