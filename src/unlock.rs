//! Hidden key-sequence detector.
//!
//! Lives outside the puzzle engine: the front end feeds it every key press
//! and reveals extra controls when the sequence completes.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A key press as far as the detector is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecretKey {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// A character key, lowercased.
    Char(char),
}

impl SecretKey {
    /// Builds a character key, normalising case.
    pub fn char(c: char) -> Self {
        SecretKey::Char(c.to_ascii_lowercase())
    }
}

/// ↑ ↑ ↓ ↓ ← → ← → B A
pub const KONAMI: [SecretKey; 10] = [
    SecretKey::Up,
    SecretKey::Up,
    SecretKey::Down,
    SecretKey::Down,
    SecretKey::Left,
    SecretKey::Right,
    SecretKey::Left,
    SecretKey::Right,
    SecretKey::Char('b'),
    SecretKey::Char('a'),
];

/// Tracks progress through a target key sequence.
///
/// Any key that does not match the next expected one drops progress back to
/// the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceDetector<K: 'static> {
    target: &'static [K],
    position: usize,
}

impl SequenceDetector<SecretKey> {
    /// Detector for [`KONAMI`].
    #[instrument]
    pub fn konami() -> Self {
        Self::new(&KONAMI)
    }
}

impl<K: PartialEq + std::fmt::Debug + 'static> SequenceDetector<K> {
    /// Creates a detector for `target`.
    pub fn new(target: &'static [K]) -> Self {
        Self {
            target,
            position: 0,
        }
    }

    /// Keys matched so far.
    pub fn progress(&self) -> usize {
        self.position
    }

    /// Feeds one key. Returns true when it completes the sequence; progress
    /// then starts over.
    #[instrument(skip(self), fields(position = self.position))]
    pub fn feed(&mut self, key: K) -> bool {
        match self.target.get(self.position) {
            Some(expected) if *expected == key => {
                self.position += 1;
                if self.position == self.target.len() {
                    info!("Secret sequence completed");
                    self.position = 0;
                    return true;
                }
                false
            }
            _ => {
                if self.position > 0 {
                    debug!(?key, "Sequence broken");
                }
                self.position = 0;
                false
            }
        }
    }

    /// Drops any progress.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}
