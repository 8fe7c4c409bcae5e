//! Boat capacity invariant: never more than two aboard.

use super::super::contracts::BoatHasRoom;
use super::super::Puzzle;
use super::Invariant;

/// Invariant: at most two entities are aboard.
pub struct BoatCapacityInvariant;

impl Invariant<Puzzle> for BoatCapacityInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        puzzle.state().passengers().len() <= BoatHasRoom::CAPACITY
    }

    fn description() -> &'static str {
        "At most two entities are aboard the boat"
    }
}
