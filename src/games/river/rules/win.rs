//! Win detection for the river crossing.

use super::super::{Entity, GameState, Location};
use tracing::instrument;

/// Returns true when all five items stand on the right bank.
///
/// The farmer and the boat are not consulted.
#[instrument]
pub fn is_solved(state: &GameState) -> bool {
    Entity::ITEMS
        .iter()
        .all(|item| state.location(*item) == Location::Right)
}
