//! The farmer's river crossing.

mod action;
mod contracts;
mod invariants;
mod log;
mod outcome;
mod puzzle;
mod rules;
mod solution;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{
    BoardContract, BoatHasRoom, Contract, CrossContract, FarmerAboard, LegalToggle, NotFinished,
    SameSideAsBoat,
};
pub use invariants::{
    BoatCapacityInvariant, HistoryNumberedInvariant, Invariant, InvariantSet, InvariantViolation,
    OutcomeConsistentInvariant, RiverInvariants,
};
pub use log::{CrossingLog, CrossingRecord};
pub use outcome::GameOutcome;
pub use puzzle::{Crossing, Puzzle};
pub use rules::{
    evaluate_bank, evaluate_occupants, is_solved, BankReport, BankStatus, Hazard, PredationRule,
    SafeReason, PREDATION_RULES,
};
pub use solution::{Replay, SOLUTION};
pub use types::{Bank, Entity, GameState, Location, Occupants};
