//! Append-only, numbered history of crossings.

use super::{Bank, BankReport, Entity, Occupants};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One crossing, as it appears in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CrossingRecord {
    /// 1-based step number.
    step: usize,
    /// Item rowed across with the farmer, if any.
    passenger: Option<Entity>,
    /// Bank the boat arrived at.
    destination: Bank,
    /// Left bank after the crossing.
    left: BankReport,
    /// Right bank after the crossing.
    right: BankReport,
}

impl CrossingRecord {
    /// Describes who crossed and where to.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn description(&self) -> String {
        match self.passenger {
            Some(item) => format!(
                "The farmer takes the {} to the {} bank.",
                item, self.destination
            ),
            None => format!("The farmer rows alone to the {} bank.", self.destination),
        }
    }

    /// Returns the report for `bank`.
    pub fn report(&self, bank: Bank) -> &BankReport {
        match bank {
            Bank::Left => &self.left,
            Bank::Right => &self.right,
        }
    }
}

impl std::fmt::Display for CrossingRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Step {}: {} Left bank: {}. Right bank: {}.",
            self.step,
            self.description(),
            self.left.status(),
            self.right.status()
        )
    }
}

/// Ordered crossing history. Records are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingLog {
    records: Vec<CrossingRecord>,
}

impl CrossingLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a crossing and returns the numbered record.
    pub(super) fn append(
        &mut self,
        passengers: Occupants,
        destination: Bank,
        left: BankReport,
        right: BankReport,
    ) -> CrossingRecord {
        let record = CrossingRecord {
            step: self.records.len() + 1,
            passenger: passengers.iter().find(|e| e.is_item()),
            destination,
            left,
            right,
        };
        self.records.push(record);
        record
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[CrossingRecord] {
        &self.records
    }

    /// Number of crossings made.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true before the first crossing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records newest first, the way the history panel shows them.
    pub fn newest_first(&self) -> impl Iterator<Item = &CrossingRecord> {
        self.records.iter().rev()
    }
}
