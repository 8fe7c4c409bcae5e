//! Strictly River - a contract-checked river-crossing puzzle
//!
//! A farmer has to ferry a tiger, a sheep, a snake, a chicken and an apple
//! across a river, one at a time, without leaving anything to be eaten.
//!
//! # Architecture
//!
//! - **Engine**: immutable [`Puzzle`] values with validated transitions
//! - **Rules**: bank safety and win detection as pure functions
//! - **Contracts**: preconditions and debug-build postconditions per move
//! - **Solution**: a scripted replay driven through the same API as a player
//! - **Unlock**: a hidden key-sequence detector for the front end
//!
//! # Example
//!
//! ```
//! use strictly_river::{Entity, GameOutcome, Hazard, Puzzle};
//!
//! # fn example() -> Result<(), strictly_river::MoveError> {
//! let puzzle = Puzzle::new()
//!     .toggle_board(Entity::Farmer)?
//!     .toggle_board(Entity::Chicken)?;
//! let crossing = puzzle.cross_river()?;
//! assert_eq!(crossing.outcome(), GameOutcome::Lost(Hazard::TigerEatsSheep));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod unlock;

// Crate-level exports - Configuration
pub use config::{ConfigError, PuzzleConfig};

// Crate-level exports - Secret sequence detection
pub use unlock::{SecretKey, SequenceDetector, KONAMI};

// Crate-level exports - River crossing
pub use games::river::{
    evaluate_bank, evaluate_occupants, is_solved, Bank, BankReport, BankStatus,
    BoardContract, BoatCapacityInvariant, BoatHasRoom, Contract, CrossContract, Crossing,
    CrossingLog, CrossingRecord, Entity, FarmerAboard, GameOutcome, GameState, Hazard,
    HistoryNumberedInvariant, Invariant, InvariantSet, InvariantViolation, LegalToggle,
    Location, Move, MoveError, NotFinished, Occupants, OutcomeConsistentInvariant,
    PredationRule, Puzzle, Replay, RiverInvariants, SafeReason, SameSideAsBoat, PREDATION_RULES,
    SOLUTION,
};
