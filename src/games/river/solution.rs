//! The scripted solution and a step-by-step replay driver.
//!
//! The solution is plain table data. Replaying it goes through
//! [`Puzzle::apply`], exactly like a player's input, so every step is
//! validated.

use super::action::{Move, MoveError};
use super::{Entity, Puzzle};
use tracing::{debug, instrument};

/// A safe way across: apple, snake, tiger, chicken, sheep, returning alone
/// after each trip but the last.
pub const SOLUTION: [Move; 23] = [
    // Apple over.
    Move::Toggle(Entity::Farmer),
    Move::Toggle(Entity::Apple),
    Move::Cross,
    // Back alone.
    Move::Toggle(Entity::Farmer),
    Move::Cross,
    // Snake over.
    Move::Toggle(Entity::Farmer),
    Move::Toggle(Entity::Snake),
    Move::Cross,
    // Back alone.
    Move::Toggle(Entity::Farmer),
    Move::Cross,
    // Tiger over.
    Move::Toggle(Entity::Farmer),
    Move::Toggle(Entity::Tiger),
    Move::Cross,
    // Back alone.
    Move::Toggle(Entity::Farmer),
    Move::Cross,
    // Chicken over.
    Move::Toggle(Entity::Farmer),
    Move::Toggle(Entity::Chicken),
    Move::Cross,
    // Back alone.
    Move::Toggle(Entity::Farmer),
    Move::Cross,
    // Sheep over.
    Move::Toggle(Entity::Farmer),
    Move::Toggle(Entity::Sheep),
    Move::Cross,
];

/// Cursor over a fixed move list.
///
/// Each call to [`Replay::advance`] applies exactly one move in full.
#[derive(Debug, Clone)]
pub struct Replay {
    moves: &'static [Move],
    cursor: usize,
}

impl Replay {
    /// Replays [`SOLUTION`].
    #[instrument]
    pub fn solution() -> Self {
        Self::new(&SOLUTION)
    }

    /// Replays an arbitrary move list.
    pub fn new(moves: &'static [Move]) -> Self {
        Self { moves, cursor: 0 }
    }

    /// Moves applied so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns true once every move has been applied.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.moves.len()
    }

    /// The move the next [`Replay::advance`] will apply.
    pub fn peek(&self) -> Option<Move> {
        self.moves.get(self.cursor).copied()
    }

    /// Applies the next move to `puzzle`.
    ///
    /// Returns `None` once the list is exhausted. A rejected move does not
    /// advance the cursor.
    #[instrument(skip(self, puzzle), fields(cursor = self.cursor))]
    pub fn advance(&mut self, puzzle: &Puzzle) -> Option<Result<Puzzle, MoveError>> {
        let action = self.peek()?;
        debug!(%action, "Replaying move");
        let result = puzzle.apply(action);
        if result.is_ok() {
            self.cursor += 1;
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::river::{GameOutcome, Location};

    #[test]
    fn test_solution_wins() {
        let puzzle = Puzzle::replay(&SOLUTION).unwrap();
        assert_eq!(puzzle.outcome(), GameOutcome::Won);
        for item in Entity::ITEMS {
            assert_eq!(puzzle.state().location(item), Location::Right);
        }
        assert_eq!(puzzle.log().len(), 9);
    }

    #[test]
    fn test_replay_steps_match_bulk_replay() {
        let mut replay = Replay::solution();
        let mut puzzle = Puzzle::new();
        while let Some(result) = replay.advance(&puzzle) {
            puzzle = result.unwrap();
        }
        assert!(replay.is_finished());
        assert_eq!(replay.position(), SOLUTION.len());
        assert_eq!(puzzle, Puzzle::replay(&SOLUTION).unwrap());
    }

    #[test]
    fn test_rejected_step_does_not_advance() {
        static BAD: [Move; 1] = [Move::Cross];
        let mut replay = Replay::new(&BAD);
        let result = replay.advance(&Puzzle::new());
        assert_eq!(result, Some(Err(MoveError::FarmerNotAboard)));
        assert_eq!(replay.position(), 0);
        assert_eq!(replay.peek(), Some(Move::Cross));
    }
}
