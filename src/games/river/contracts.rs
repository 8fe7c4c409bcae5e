//! Contract-based validation for the river crossing.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, RiverInvariants};
use super::puzzle::Puzzle;
use super::{Entity, Location};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the puzzle is neither won nor lost.
pub struct NotFinished;

impl NotFinished {
    #[instrument(skip(puzzle))]
    pub fn check(puzzle: &Puzzle) -> Result<(), MoveError> {
        if puzzle.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: a boarding entity stands on the boat's bank.
pub struct SameSideAsBoat;

impl SameSideAsBoat {
    #[instrument(skip(puzzle))]
    pub fn check(entity: Entity, puzzle: &Puzzle) -> Result<(), MoveError> {
        let boat = puzzle.state().boat();
        match puzzle.state().location(entity).bank() {
            Some(bank) if bank != boat => Err(MoveError::WrongSide { entity, bank, boat }),
            _ => Ok(()),
        }
    }
}

/// Precondition: there is a free seat.
pub struct BoatHasRoom;

impl BoatHasRoom {
    /// Farmer plus one item.
    pub const CAPACITY: usize = 2;

    #[instrument(skip(puzzle))]
    pub fn check(puzzle: &Puzzle) -> Result<(), MoveError> {
        if puzzle.state().passengers().len() >= Self::CAPACITY {
            Err(MoveError::BoatFull)
        } else {
            Ok(())
        }
    }
}

/// Precondition: somebody can row.
pub struct FarmerAboard;

impl FarmerAboard {
    #[instrument(skip(puzzle))]
    pub fn check(puzzle: &Puzzle) -> Result<(), MoveError> {
        if puzzle.state().passengers().contains(Entity::Farmer) {
            Ok(())
        } else {
            Err(MoveError::FarmerNotAboard)
        }
    }
}

/// Composite precondition for boarding or disembarking.
///
/// Disembarking only needs an unfinished puzzle; boarding also needs the
/// right bank and a free seat.
pub struct LegalToggle;

impl LegalToggle {
    /// Validates all preconditions for a toggle.
    #[instrument(skip(puzzle))]
    pub fn check(entity: Entity, puzzle: &Puzzle) -> Result<(), MoveError> {
        NotFinished::check(puzzle)?;
        if puzzle.state().location(entity) == Location::Boat {
            return Ok(());
        }
        SameSideAsBoat::check(entity, puzzle)?;
        BoatHasRoom::check(puzzle)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Contracts (Pre + Post)
// ─────────────────────────────────────────────────────────────

fn check_invariants(after: &Puzzle) -> Result<(), MoveError> {
    RiverInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Contract for boarding and disembarking.
///
/// Postconditions: the history and the boat's bank are untouched, and the
/// puzzle invariants still hold.
pub struct BoardContract;

impl Contract<Puzzle, Entity> for BoardContract {
    fn pre(puzzle: &Puzzle, entity: &Entity) -> Result<(), MoveError> {
        LegalToggle::check(*entity, puzzle)
    }

    fn post(before: &Puzzle, after: &Puzzle) -> Result<(), MoveError> {
        if before.log() != after.log() || before.state().boat() != after.state().boat() {
            warn!("Toggle changed more than one location");
            return Err(MoveError::InvariantViolation(
                "Toggle must only move a single entity".to_string(),
            ));
        }
        check_invariants(after)
    }
}

/// Contract for crossing the river.
///
/// Postconditions: exactly one record was appended, the boat switched banks
/// and nobody is left aboard.
pub struct CrossContract;

impl Contract<Puzzle, ()> for CrossContract {
    fn pre(puzzle: &Puzzle, _action: &()) -> Result<(), MoveError> {
        NotFinished::check(puzzle)?;
        FarmerAboard::check(puzzle)
    }

    fn post(before: &Puzzle, after: &Puzzle) -> Result<(), MoveError> {
        if after.log().len() != before.log().len() + 1 {
            return Err(MoveError::InvariantViolation(
                "Crossing must append exactly one record".to_string(),
            ));
        }
        if after.state().boat() != before.state().boat().opposite() {
            return Err(MoveError::InvariantViolation(
                "Crossing must move the boat".to_string(),
            ));
        }
        if !after.state().passengers().is_empty() {
            return Err(MoveError::InvariantViolation(
                "Passengers must disembark on arrival".to_string(),
            ));
        }
        check_invariants(after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Debug assertions
// ─────────────────────────────────────────────────────────────

/// Asserts that the puzzle invariants hold (panic on violation in debug builds).
#[instrument(skip(puzzle))]
pub fn assert_invariants(puzzle: &Puzzle) {
    debug_assert!(
        RiverInvariants::check_all(puzzle).is_ok(),
        "River invariants violated"
    );
}
