//! Core data model for Tradle.
//!
//! These types are what the game stores and shares: guesses, the countries
//! they point at, and the special modes a day can be played in.

mod country;
mod guess;
mod modes;

pub use country::{
    CatalogEntry, Country, catalog, construct_oec_link, find_by_code, find_by_name,
};
pub use guess::{AllGuesses, Guess};
pub use modes::GameModes;
