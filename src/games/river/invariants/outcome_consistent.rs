//! Outcome consistency invariant: a terminal outcome matches the board.

use super::super::rules::{evaluate_bank, is_solved};
use super::super::{GameOutcome, Puzzle};
use super::Invariant;

/// Invariant: the recorded outcome agrees with the board.
///
/// - `Lost(hazard)`: the bank opposite the boat reports exactly that hazard
/// - `Won`: every item stands on the right bank
pub struct OutcomeConsistentInvariant;

impl Invariant<Puzzle> for OutcomeConsistentInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        let state = puzzle.state();
        match puzzle.outcome() {
            GameOutcome::InProgress => true,
            GameOutcome::Lost(hazard) => {
                evaluate_bank(state, state.boat().opposite()).hazard() == Some(hazard)
            }
            GameOutcome::Won => is_solved(state),
        }
    }

    fn description() -> &'static str {
        "Terminal outcome agrees with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::river::{Entity, Hazard, Move};

    #[test]
    fn test_loss_holds() {
        let puzzle = Puzzle::replay(&[
            Move::Toggle(Entity::Farmer),
            Move::Toggle(Entity::Tiger),
            Move::Cross,
        ])
        .unwrap();
        assert_eq!(puzzle.outcome(), GameOutcome::Lost(Hazard::SnakeEatsChicken));
        assert!(OutcomeConsistentInvariant::holds(&puzzle));
    }

    #[test]
    fn test_mismatched_hazard_violates() {
        let mut puzzle = Puzzle::replay(&[
            Move::Toggle(Entity::Farmer),
            Move::Toggle(Entity::Tiger),
            Move::Cross,
        ])
        .unwrap();
        puzzle.outcome = GameOutcome::Lost(Hazard::SheepEatsApple);
        assert!(!OutcomeConsistentInvariant::holds(&puzzle));
    }
}
