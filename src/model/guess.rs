//! Guess records: one per country the player submits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geography::{Direction, compute_proximity_percent};

use super::Country;

/// Every stored guess, keyed by day (`YYYY-MM-DD`), in guess order.
pub type AllGuesses = BTreeMap<String, Vec<Guess>>;

/// A submitted guess and its feedback. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    /// Display name of what was guessed.
    pub name: String,

    /// Meters from the guess to the target. Zero is the winning guess.
    pub distance: u32,

    /// Which way the target lies. Not shown for an exact match.
    pub direction: Direction,

    /// The guessed country, when the guess maps to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

impl Guess {
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }

    pub fn proximity(&self) -> u8 {
        compute_proximity_percent(self.distance)
    }
}
