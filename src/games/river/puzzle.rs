//! The puzzle engine.
//!
//! A [`Puzzle`] is an immutable value: every operation borrows the current
//! puzzle and hands back a new one, so a rejected move can never leave a
//! half-applied state behind. The host keeps one authoritative instance and
//! replaces it after each successful call.

use super::action::{Move, MoveError};
use super::contracts::{assert_invariants, BoardContract, Contract, CrossContract};
use super::log::{CrossingLog, CrossingRecord};
use super::outcome::GameOutcome;
use super::rules::{evaluate_bank, is_solved, BankReport};
use super::{Bank, Entity, GameState, Location};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Game state, outcome and history of one play-through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub(super) state: GameState,
    pub(super) outcome: GameOutcome,
    pub(super) log: CrossingLog,
}

/// Result of a successful crossing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossing {
    puzzle: Puzzle,
    record: CrossingRecord,
}

impl Crossing {
    /// The puzzle after the crossing.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Board positions after the crossing.
    pub fn state(&self) -> &GameState {
        &self.puzzle.state
    }

    /// Outcome of the crossing.
    pub fn outcome(&self) -> GameOutcome {
        self.puzzle.outcome
    }

    /// Full history including this crossing.
    pub fn log(&self) -> &CrossingLog {
        &self.puzzle.log
    }

    /// The history entry appended for this crossing.
    pub fn record(&self) -> &CrossingRecord {
        &self.record
    }

    /// Consumes the crossing, keeping the new puzzle.
    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }
}

impl Puzzle {
    /// Creates a puzzle in the canonical starting position.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::initial(),
            outcome: GameOutcome::InProgress,
            log: CrossingLog::new(),
        }
    }

    /// Returns a fresh puzzle, discarding this one's progress.
    #[instrument(skip(self), fields(steps = self.log.len()))]
    pub fn reset(&self) -> Self {
        info!("Resetting puzzle");
        Self::new()
    }

    /// Current board positions.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Crossing history.
    pub fn log(&self) -> &CrossingLog {
        &self.log
    }

    /// Returns true once the puzzle is won or lost.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Judges one bank as it stands right now.
    #[instrument(skip(self))]
    pub fn evaluate_bank(&self, bank: Bank) -> BankReport {
        evaluate_bank(&self.state, bank)
    }

    /// Boards `entity` if it stands on the boat's bank, or puts it ashore if
    /// it is aboard.
    ///
    /// Never evaluates bank safety or the win condition.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the puzzle is won or lost
    /// - [`MoveError::WrongSide`] if the entity is on the other bank
    /// - [`MoveError::BoatFull`] if two are already aboard
    #[instrument(skip(self), fields(boat = %self.state.boat()))]
    pub fn toggle_board(&self, entity: Entity) -> Result<Puzzle, MoveError> {
        BoardContract::pre(self, &entity)?;

        let location = match self.state.location(entity) {
            Location::Boat => self.state.boat().into(),
            Location::Left | Location::Right => Location::Boat,
        };
        debug!(%entity, %location, "Moving entity");

        let next = Puzzle {
            state: self.state.with_location(entity, location),
            outcome: self.outcome,
            log: self.log.clone(),
        };

        #[cfg(debug_assertions)]
        BoardContract::post(self, &next)?;

        Ok(next)
    }

    /// Rows the boat, with everyone aboard, to the other bank and judges the
    /// result.
    ///
    /// Both banks are evaluated and logged. The bank the boat just left is
    /// unattended: if it is unsafe the puzzle is lost. Otherwise the puzzle is
    /// won once every item stands on the right bank.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the puzzle is won or lost
    /// - [`MoveError::FarmerNotAboard`] if nobody can row
    #[instrument(skip(self), fields(boat = %self.state.boat(), passengers = %self.state.passengers()))]
    pub fn cross_river(&self) -> Result<Crossing, MoveError> {
        CrossContract::pre(self, &())?;

        let passengers = self.state.passengers();
        let destination = self.state.boat().opposite();
        let state = self.state.with_boat_at(destination);

        let left = evaluate_bank(&state, Bank::Left);
        let right = evaluate_bank(&state, Bank::Right);
        let unattended = match destination.opposite() {
            Bank::Left => left,
            Bank::Right => right,
        };

        let outcome = if let Some(hazard) = unattended.hazard() {
            info!(%hazard, bank = %unattended.bank(), "Puzzle lost");
            GameOutcome::Lost(hazard)
        } else if is_solved(&state) {
            info!("Puzzle solved");
            GameOutcome::Won
        } else {
            GameOutcome::InProgress
        };

        let mut log = self.log.clone();
        let record = log.append(passengers, destination, left, right);
        debug!(step = record.step(), %outcome, "Crossing logged");

        let next = Puzzle {
            state,
            outcome,
            log,
        };

        #[cfg(debug_assertions)]
        CrossContract::post(self, &next)?;

        assert_invariants(&next);

        Ok(Crossing {
            puzzle: next,
            record,
        })
    }

    /// Applies a single move.
    #[instrument(skip(self))]
    pub fn apply(&self, action: Move) -> Result<Puzzle, MoveError> {
        match action {
            Move::Toggle(entity) => self.toggle_board(entity),
            Move::Cross => self.cross_river().map(Crossing::into_puzzle),
        }
    }

    /// Replays moves from the starting position, stopping at the first
    /// rejection.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Puzzle, MoveError> {
        moves
            .iter()
            .try_fold(Puzzle::new(), |puzzle, action| puzzle.apply(*action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::river::Hazard;

    fn board(puzzle: &Puzzle, entities: &[Entity]) -> Puzzle {
        entities.iter().fold(puzzle.clone(), |p, e| {
            p.toggle_board(*e).expect("boarding should succeed")
        })
    }

    #[test]
    fn test_board_and_disembark() {
        let puzzle = Puzzle::new();
        let aboard = puzzle.toggle_board(Entity::Sheep).unwrap();
        assert_eq!(aboard.state().location(Entity::Sheep), Location::Boat);

        let ashore = aboard.toggle_board(Entity::Sheep).unwrap();
        assert_eq!(ashore.state().location(Entity::Sheep), Location::Left);
        assert_eq!(ashore, puzzle);
    }

    #[test]
    fn test_wrong_side_rejected() {
        let puzzle = board(&Puzzle::new(), &[Entity::Farmer, Entity::Apple]);
        let puzzle = puzzle.cross_river().unwrap().into_puzzle();
        // Boat is now on the right; the tiger is still on the left.
        let result = puzzle.toggle_board(Entity::Tiger);
        assert_eq!(
            result,
            Err(MoveError::WrongSide {
                entity: Entity::Tiger,
                bank: Bank::Left,
                boat: Bank::Right,
            })
        );
    }

    #[test]
    fn test_boat_full_rejected() {
        let puzzle = board(&Puzzle::new(), &[Entity::Farmer, Entity::Snake]);
        assert_eq!(puzzle.toggle_board(Entity::Apple), Err(MoveError::BoatFull));
        // Disembarking is still fine with a full boat.
        assert!(puzzle.toggle_board(Entity::Snake).is_ok());
    }

    #[test]
    fn test_cross_requires_farmer() {
        let puzzle = board(&Puzzle::new(), &[Entity::Apple]);
        assert_eq!(puzzle.cross_river(), Err(MoveError::FarmerNotAboard));
        assert_eq!(puzzle.state().boat(), Bank::Left);
        assert_eq!(puzzle.state().location(Entity::Apple), Location::Boat);
    }

    #[test]
    fn test_farmer_and_chicken_first_loses() {
        let puzzle = board(&Puzzle::new(), &[Entity::Farmer, Entity::Chicken]);
        let crossing = puzzle.cross_river().unwrap();

        assert_eq!(crossing.outcome(), GameOutcome::Lost(Hazard::TigerEatsSheep));
        assert_eq!(crossing.state().boat(), Bank::Right);
        assert_eq!(crossing.state().location(Entity::Chicken), Location::Right);
        assert_eq!(*crossing.record().step(), 1);
        assert!(!crossing.record().report(Bank::Left).is_safe());
        assert!(crossing.puzzle().is_terminal());
    }

    #[test]
    fn test_terminal_rejects_moves_until_reset() {
        let puzzle = board(&Puzzle::new(), &[Entity::Farmer, Entity::Chicken]);
        let lost = puzzle.cross_river().unwrap().into_puzzle();

        assert_eq!(lost.toggle_board(Entity::Farmer), Err(MoveError::GameOver));
        assert_eq!(lost.cross_river(), Err(MoveError::GameOver));

        let fresh = lost.reset();
        assert!(!fresh.is_terminal());
        assert!(fresh.log().is_empty());
        assert_eq!(*fresh.state(), GameState::initial());
    }

    #[test]
    fn test_apply_and_replay_agree() {
        let moves = [
            Move::Toggle(Entity::Farmer),
            Move::Toggle(Entity::Apple),
            Move::Cross,
        ];
        let replayed = Puzzle::replay(&moves).unwrap();
        let stepped = moves
            .iter()
            .fold(Puzzle::new(), |p, m| p.apply(*m).unwrap());
        assert_eq!(replayed, stepped);
        assert_eq!(replayed.log().len(), 1);
    }
}
