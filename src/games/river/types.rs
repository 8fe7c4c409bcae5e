//! Core domain types for the river crossing.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Something that has to get across the river.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    /// The only one who can row.
    Farmer,
    /// Eats the sheep unless the chicken is around.
    Tiger,
    /// Eats the apple unless the snake is around.
    Sheep,
    /// Eats the chicken unless the tiger is around.
    Snake,
    /// Prey for the snake.
    Chicken,
    /// Prey for the sheep.
    Apple,
}

impl Entity {
    /// Every entity, farmer first.
    pub const ALL: [Entity; 6] = [
        Entity::Farmer,
        Entity::Tiger,
        Entity::Sheep,
        Entity::Snake,
        Entity::Chicken,
        Entity::Apple,
    ];

    /// The five items the farmer has to ferry.
    pub const ITEMS: [Entity; 5] = [
        Entity::Tiger,
        Entity::Sheep,
        Entity::Snake,
        Entity::Chicken,
        Entity::Apple,
    ];

    /// Stable index of this entity (0-5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the five ferried items.
    pub fn is_item(self) -> bool {
        self != Entity::Farmer
    }

    /// Lowercase display label.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// One side of the river.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    /// Starting side.
    Left,
    /// Goal side.
    Right,
}

impl Bank {
    /// The bank across the river.
    pub fn opposite(self) -> Self {
        match self {
            Bank::Left => Bank::Right,
            Bank::Right => Bank::Left,
        }
    }
}

/// Where an entity currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// On the left bank.
    Left,
    /// On the right bank.
    Right,
    /// Aboard the boat.
    Boat,
}

impl Location {
    /// Returns the bank for a bank location, `None` when aboard.
    pub fn bank(self) -> Option<Bank> {
        match self {
            Location::Left => Some(Bank::Left),
            Location::Right => Some(Bank::Right),
            Location::Boat => None,
        }
    }
}

impl From<Bank> for Location {
    fn from(bank: Bank) -> Self {
        match bank {
            Bank::Left => Location::Left,
            Bank::Right => Location::Right,
        }
    }
}

/// A set of entities, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Occupants(u8);

impl Occupants {
    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// Returns a copy of the set with `entity` added.
    pub fn with(self, entity: Entity) -> Self {
        Self(self.0 | (1 << entity.index()))
    }

    /// Membership test.
    pub fn contains(self, entity: Entity) -> bool {
        self.0 & (1 << entity.index()) != 0
    }

    /// Number of entities in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true when nobody is in the set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates members in `Entity` order.
    pub fn iter(self) -> impl Iterator<Item = Entity> {
        Entity::iter().filter(move |e| self.contains(*e))
    }
}

impl FromIterator<Entity> for Occupants {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        iter.into_iter().fold(Occupants::empty(), Occupants::with)
    }
}

impl std::fmt::Display for Occupants {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "nobody");
        }
        let names = self.iter().map(Entity::label).collect::<Vec<_>>();
        write!(f, "{}", names.join(", "))
    }
}

/// Positions of all six entities plus the boat's mooring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Location per entity, indexed by [`Entity::index`].
    locations: [Location; 6],
    /// Bank the boat is moored at.
    boat: Bank,
}

impl GameState {
    /// Everyone and the boat on the left bank.
    pub fn initial() -> Self {
        Self {
            locations: [Location::Left; 6],
            boat: Bank::Left,
        }
    }

    /// Returns where `entity` is.
    pub fn location(&self, entity: Entity) -> Location {
        self.locations[entity.index()]
    }

    /// Returns the bank the boat is moored at.
    pub fn boat(&self) -> Bank {
        self.boat
    }

    /// Entities currently aboard.
    pub fn passengers(&self) -> Occupants {
        self.occupants_at(Location::Boat)
    }

    /// Entities standing on `bank` (not counting anyone aboard).
    pub fn occupants(&self, bank: Bank) -> Occupants {
        self.occupants_at(bank.into())
    }

    fn occupants_at(&self, location: Location) -> Occupants {
        Entity::iter()
            .filter(|e| self.location(*e) == location)
            .collect()
    }

    /// Returns a copy with `entity` moved to `location` (unchecked).
    pub(super) fn with_location(mut self, entity: Entity, location: Location) -> Self {
        self.locations[entity.index()] = location;
        self
    }

    /// Returns a copy with the boat and all passengers moved to `bank` (unchecked).
    pub(super) fn with_boat_at(mut self, bank: Bank) -> Self {
        for slot in self.locations.iter_mut() {
            if *slot == Location::Boat {
                *slot = bank.into();
            }
        }
        self.boat = bank;
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_all_left() {
        let state = GameState::initial();
        assert_eq!(state.boat(), Bank::Left);
        for entity in Entity::ALL {
            assert_eq!(state.location(entity), Location::Left);
        }
        assert_eq!(state.occupants(Bank::Left).len(), 6);
        assert!(state.occupants(Bank::Right).is_empty());
        assert!(state.passengers().is_empty());
    }

    #[test]
    fn test_boat_move_carries_passengers() {
        let state = GameState::initial()
            .with_location(Entity::Farmer, Location::Boat)
            .with_location(Entity::Apple, Location::Boat)
            .with_boat_at(Bank::Right);

        assert_eq!(state.boat(), Bank::Right);
        assert_eq!(state.location(Entity::Farmer), Location::Right);
        assert_eq!(state.location(Entity::Apple), Location::Right);
        assert_eq!(state.location(Entity::Tiger), Location::Left);
        assert!(state.passengers().is_empty());
    }

    #[test]
    fn test_occupants_display_and_iter() {
        let set: Occupants = [Entity::Apple, Entity::Tiger].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Entity::Tiger, Entity::Apple]);
        assert_eq!(set.to_string(), "tiger, apple");
        assert_eq!(Occupants::empty().to_string(), "nobody");
    }

    #[test]
    fn test_entity_parses_case_insensitively() {
        assert_eq!("Chicken".parse::<Entity>(), Ok(Entity::Chicken));
        assert_eq!("APPLE".parse::<Entity>(), Ok(Entity::Apple));
        assert!("goat".parse::<Entity>().is_err());
    }

    #[test]
    fn test_label_matches_display() {
        for entity in Entity::ALL {
            assert_eq!(entity.label(), entity.to_string());
        }
        assert_eq!(Entity::Chicken.label(), "chicken");
    }

    #[test]
    fn test_bank_opposite() {
        assert_eq!(Bank::Left.opposite(), Bank::Right);
        assert_eq!(Bank::Right.opposite(), Bank::Left);
    }
}
