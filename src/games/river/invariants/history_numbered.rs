//! History numbering invariant: steps run 1, 2, 3, ... in order.

use super::super::Puzzle;
use super::Invariant;

/// Invariant: the crossing log is numbered consecutively from 1.
pub struct HistoryNumberedInvariant;

impl Invariant<Puzzle> for HistoryNumberedInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        puzzle
            .log()
            .records()
            .iter()
            .enumerate()
            .all(|(i, record)| *record.step() == i + 1)
    }

    fn description() -> &'static str {
        "Crossing history is numbered consecutively from 1"
    }
}
