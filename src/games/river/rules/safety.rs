//! Bank safety evaluation.
//!
//! A bank is judged in isolation from its current occupants. With the farmer
//! present nothing can go wrong; otherwise each predator/prey pair is only
//! dangerous when its guardian is absent.

use super::super::{Bank, Entity, GameState, Occupants};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Something that gets eaten on an unattended bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Hazard {
    /// Tiger and sheep left without the chicken.
    #[display("tiger would eat the sheep")]
    TigerEatsSheep,
    /// Snake and chicken left without the tiger.
    #[display("snake would eat the chicken")]
    SnakeEatsChicken,
    /// Sheep and apple left without the snake.
    #[display("sheep would eat the apple")]
    SheepEatsApple,
}

/// Why a bank was judged safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum SafeReason {
    /// The farmer is standing on the bank.
    #[display("farmer present")]
    FarmerPresent,
    /// Zero or one occupant.
    #[display("fewer than two items, no conflict possible")]
    TooFewItems,
    /// Several occupants but no rule fires.
    #[display("combination is safe, no conflict")]
    NoConflict,
}

/// Verdict for a single bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum BankStatus {
    /// Nothing gets eaten.
    #[display("{}", _0)]
    Safe(SafeReason),
    /// Something gets eaten.
    #[display("{}", _0)]
    Unsafe(Hazard),
}

impl BankStatus {
    /// Returns true for [`BankStatus::Safe`].
    pub fn is_safe(&self) -> bool {
        matches!(self, BankStatus::Safe(_))
    }

    /// Returns the hazard if the bank is unsafe.
    pub fn hazard(&self) -> Option<Hazard> {
        match self {
            BankStatus::Safe(_) => None,
            BankStatus::Unsafe(hazard) => Some(*hazard),
        }
    }
}

/// Result of [`evaluate_bank`]: which bank, and its verdict.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
)]
pub struct BankReport {
    /// The bank that was evaluated.
    bank: Bank,
    /// Its verdict.
    status: BankStatus,
}

impl BankReport {
    /// Returns true if nothing gets eaten on this bank.
    pub fn is_safe(&self) -> bool {
        self.status.is_safe()
    }

    /// Returns the hazard if the bank is unsafe.
    pub fn hazard(&self) -> Option<Hazard> {
        self.status.hazard()
    }
}

impl std::fmt::Display for BankReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bank: {}", self.bank, self.status)
    }
}

/// One row of the predation table.
///
/// Fires when `predator` and `prey` share a bank and `guardian` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredationRule {
    /// The one doing the eating.
    pub predator: Entity,
    /// The one being eaten.
    pub prey: Entity,
    /// Presence of this entity neutralises the pair.
    pub guardian: Entity,
    /// Reported when the rule fires.
    pub hazard: Hazard,
}

impl PredationRule {
    /// Tests this rule against a bank's occupants.
    pub fn fires(&self, occupants: Occupants) -> bool {
        occupants.contains(self.predator)
            && occupants.contains(self.prey)
            && !occupants.contains(self.guardian)
    }
}

/// The predation rules, in reporting order.
pub const PREDATION_RULES: [PredationRule; 3] = [
    PredationRule {
        predator: Entity::Tiger,
        prey: Entity::Sheep,
        guardian: Entity::Chicken,
        hazard: Hazard::TigerEatsSheep,
    },
    PredationRule {
        predator: Entity::Snake,
        prey: Entity::Chicken,
        guardian: Entity::Tiger,
        hazard: Hazard::SnakeEatsChicken,
    },
    PredationRule {
        predator: Entity::Sheep,
        prey: Entity::Apple,
        guardian: Entity::Snake,
        hazard: Hazard::SheepEatsApple,
    },
];

/// Judges a set of entities sharing a bank.
#[instrument]
pub fn evaluate_occupants(occupants: Occupants) -> BankStatus {
    if occupants.contains(Entity::Farmer) {
        return BankStatus::Safe(SafeReason::FarmerPresent);
    }
    if occupants.len() <= 1 {
        return BankStatus::Safe(SafeReason::TooFewItems);
    }

    // Every rule is tested on its own; the first that fires is reported.
    let fired = PREDATION_RULES
        .iter()
        .filter(|rule| rule.fires(occupants))
        .map(|rule| rule.hazard)
        .collect::<Vec<_>>();

    match fired.first() {
        Some(hazard) => {
            debug!(%occupants, ?fired, "Unsafe combination");
            BankStatus::Unsafe(*hazard)
        }
        None => BankStatus::Safe(SafeReason::NoConflict),
    }
}

/// Judges one bank of `state`, ignoring anyone aboard the boat.
#[instrument(skip(state), fields(boat = %state.boat()))]
pub fn evaluate_bank(state: &GameState, bank: Bank) -> BankReport {
    BankReport::new(bank, evaluate_occupants(state.occupants(bank)))
}
