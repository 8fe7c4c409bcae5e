//! First-class action types for the river crossing.
//!
//! Moves are domain events: they are validated against a puzzle before
//! anything changes, can be replayed from a table, and are logged.

use super::{Bank, Entity};
use serde::{Deserialize, Serialize};

/// A player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Board the entity if it is on a bank, disembark it if it is aboard.
    Toggle(Entity),
    /// Row the boat to the other bank.
    Cross,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Toggle(entity) => write!(f, "toggle {}", entity),
            Move::Cross => write!(f, "cross"),
        }
    }
}

/// Why a move was rejected.
///
/// Rejections are ordinary user errors; the puzzle they were attempted on is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The entity stands on the other bank from the boat.
    #[display("The {} is on the {} bank but the boat is on the {} bank", entity, bank, boat)]
    WrongSide {
        /// Entity that tried to board.
        entity: Entity,
        /// Bank the entity stands on.
        bank: Bank,
        /// Bank the boat is moored at.
        boat: Bank,
    },

    /// Two entities are already aboard.
    #[display("The boat already holds two things")]
    BoatFull,

    /// Nobody to row.
    #[display("The farmer must be aboard to cross")]
    FarmerNotAboard,

    /// The puzzle is won or lost.
    #[display("The puzzle is over; reset to play again")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
