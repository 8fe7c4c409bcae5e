//! Puzzle rules for the river crossing.
//!
//! Pure functions over [`GameState`](super::GameState) values. Rules are kept
//! apart from the engine so contracts and invariants can reuse them.

pub mod safety;
pub mod win;

pub use safety::{
    evaluate_bank, evaluate_occupants, BankReport, BankStatus, Hazard, PredationRule, SafeReason,
    PREDATION_RULES,
};
pub use win::is_solved;
