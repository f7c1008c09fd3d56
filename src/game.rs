//! A day's game: the secret country, the guesses so far, and the rules for
//! adding one.
//!
//! Each guess is scored against the day's target and saved immediately, so
//! a game can be picked up again from any later invocation.

use std::fmt;
use std::str::FromStr;

use jiff::Zoned;
use jiff::civil::{self, Date};
use tracing::info;

use crate::geography::{self, Geodesy, GeographyError, Point};
use crate::model::{self, CatalogEntry, Country, Guess};
use crate::storage::{self, KeyValueStore, StorageError};

/// Guesses allowed per day.
pub const MAX_GUESSES: usize = 6;

/// Day one of the game; puzzle numbers count from here.
pub const FIRST_DAY: Date = civil::date(2022, 3, 6);

/// Step through the catalog between consecutive days. Coprime with the
/// catalog size, so every country comes up once per cycle.
const TARGET_STRIDE: i64 = 37;

/// Errors from playing a day.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("unknown country: {0}")]
    UnknownCountry(String),

    #[error("{0} was already guessed")]
    AlreadyGuessed(String),

    #[error("the game for {0} is over")]
    GameOver(DayKey),

    #[error("invalid day {input:?}: {source}")]
    InvalidDay { input: String, source: jiff::Error },

    #[error(transparent)]
    Geography(#[from] GeographyError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A calendar day. Displays as `YYYY-MM-DD`, which is also its storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayKey(Date);

impl DayKey {
    /// Today in the local time zone.
    pub fn today() -> Self {
        Self(Zoned::now().date())
    }

    /// Whole days since [`FIRST_DAY`]. Negative before it.
    pub fn day_count(self) -> i32 {
        (self.0 - FIRST_DAY).get_days()
    }

    pub fn is_april_fools(self) -> bool {
        self.0.month() == 4 && self.0.day() == 1
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for DayKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Date>()
            .map(Self)
            .map_err(|source| GameError::InvalidDay {
                input: s.to_string(),
                source,
            })
    }
}

/// The secret country for a day.
pub fn daily_target(day: DayKey) -> &'static CatalogEntry {
    let catalog = model::catalog();
    let len = i64::try_from(catalog.len()).unwrap_or(i64::MAX);
    let index = (i64::from(day.day_count()) * TARGET_STRIDE).rem_euclid(len);
    &catalog[usize::try_from(index).unwrap_or_default()]
}

/// Score a guess against the target.
///
/// The direction is computed even for an exact match; it just isn't shown.
pub fn assemble_guess(
    geodesy: &impl Geodesy,
    name: &str,
    guessed: Point,
    target: Point,
    country: Option<Country>,
) -> Result<Guess, GeographyError> {
    let distance = geodesy.distance(guessed, target);
    let direction = geography::get_compass_direction(geodesy, guessed, target)?;
    Ok(Guess {
        name: name.to_string(),
        distance,
        direction,
        country,
    })
}

/// One day's game, backed by a store.
pub struct Game<'a, S> {
    store: &'a S,
    day: DayKey,
    target: &'static CatalogEntry,
    guesses: Vec<Guess>,
}

impl<'a, S: KeyValueStore> Game<'a, S> {
    /// Loads the day's guesses so far.
    pub fn load(store: &'a S, day: DayKey) -> Result<Self, GameError> {
        let mut all = storage::load_all_guesses(store)?;
        let guesses = all.remove(&day.to_string()).unwrap_or_default();
        Ok(Self {
            store,
            day,
            target: daily_target(day),
            guesses,
        })
    }

    pub fn day(&self) -> DayKey {
        self.day
    }

    pub fn target(&self) -> &'static CatalogEntry {
        self.target
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// The last guess found the target.
    pub fn is_won(&self) -> bool {
        self.guesses.last().is_some_and(Guess::is_exact)
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.guesses.len() >= MAX_GUESSES
    }

    pub fn remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    /// Guess a country by name (or alpha-2 code), score it, and save it.
    pub fn submit(&mut self, geodesy: &impl Geodesy, query: &str) -> Result<&Guess, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver(self.day));
        }

        let query = query.trim();
        let entry = model::find_by_name(query)
            .or_else(|| model::find_by_code(query))
            .ok_or_else(|| GameError::UnknownCountry(query.to_string()))?;

        if self.guesses.iter().any(|g| g.name.eq_ignore_ascii_case(entry.name)) {
            return Err(GameError::AlreadyGuessed(entry.name.to_string()));
        }

        let guess = assemble_guess(
            geodesy,
            entry.name,
            entry.point(),
            self.target.point(),
            Some(entry.to_country()),
        )?;
        info!(
            day = %self.day,
            name = entry.name,
            distance = guess.distance,
            "guess scored"
        );

        let mut guesses = self.guesses.clone();
        guesses.push(guess);
        storage::save_guesses(self.store, &self.day.to_string(), &guesses)?;
        self.guesses = guesses;

        Ok(&self.guesses[self.guesses.len() - 1])
    }
}
