//! The guess book: every day's guesses, stored as one blob.
//!
//! Saving a day reads the whole mapping, replaces that day's entry, and
//! writes the whole mapping back.

use tracing::{debug, warn};

use crate::model::{AllGuesses, Guess};

use super::{KeyValueStore, Result};

/// The key the guess book is stored under.
const GUESSES_KEY: &str = "guesses";

/// Loads every stored day's guesses.
///
/// Nothing stored yields an empty mapping. So does a blob that can't be
/// parsed: a corrupt store shouldn't stop anyone from playing.
pub fn load_all_guesses(store: &impl KeyValueStore) -> Result<AllGuesses> {
    let Some(json) = store.get(GUESSES_KEY)? else {
        return Ok(AllGuesses::new());
    };
    match serde_json::from_str(&json) {
        Ok(all) => Ok(all),
        Err(e) => {
            warn!("ignoring unreadable guess history: {e}");
            Ok(AllGuesses::new())
        }
    }
}

/// Replaces one day's guesses, leaving every other day untouched.
pub fn save_guesses(store: &impl KeyValueStore, day: &str, guesses: &[Guess]) -> Result<()> {
    let mut all = load_all_guesses(store)?;
    all.insert(day.to_string(), guesses.to_vec());
    let json = serde_json::to_string(&all)?;
    store.set(GUESSES_KEY, &json)?;
    debug!(day, count = guesses.len(), "saved guesses");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::geography::Direction;
    use crate::model::find_by_code;
    use crate::storage::{MemoryStore, Storage};

    fn sample_guesses() -> Vec<Guess> {
        vec![
            Guess {
                name: "Brazil".into(),
                distance: 8_765_432,
                direction: Direction::NE,
                country: find_by_code("BR").map(|c| c.to_country()),
            },
            Guess {
                name: "Spain".into(),
                distance: 0,
                direction: Direction::N,
                country: None,
            },
        ]
    }

    #[test]
    fn empty_store_loads_empty() {
        let store = MemoryStore::default();
        assert!(load_all_guesses(&store).unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::default();
        let guesses = sample_guesses();
        save_guesses(&store, "2022-03-06", &guesses).unwrap();

        let all = load_all_guesses(&store).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all["2022-03-06"], guesses);
    }

    #[test]
    fn saving_a_day_keeps_other_days() {
        let store = MemoryStore::default();
        let guesses = sample_guesses();
        save_guesses(&store, "2022-03-06", &guesses[..1]).unwrap();
        save_guesses(&store, "2022-03-07", &guesses).unwrap();
        save_guesses(&store, "2022-03-06", &guesses).unwrap();

        let all = load_all_guesses(&store).unwrap();
        assert_eq!(all["2022-03-06"], guesses);
        assert_eq!(all["2022-03-07"], guesses);
    }

    #[test]
    fn malformed_blob_loads_empty() {
        let store = MemoryStore::default();
        store.set(GUESSES_KEY, "{not json").unwrap();
        assert!(load_all_guesses(&store).unwrap().is_empty());

        // The next save starts over from an empty book.
        save_guesses(&store, "2022-03-06", &sample_guesses()).unwrap();
        assert_eq!(load_all_guesses(&store).unwrap().len(), 1);
    }

    #[test]
    fn reads_blob_written_by_the_web_game() {
        let store = MemoryStore::default();
        store
            .set(
                GUESSES_KEY,
                r#"{"2022-04-01":[{"name":"Chile","distance":11234567,"direction":"SW"}]}"#,
            )
            .unwrap();
        let all = load_all_guesses(&store).unwrap();
        let day = &all["2022-04-01"];
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].direction, Direction::SW);
        assert!(day[0].country.is_none());
    }

    #[test]
    fn file_store_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();
        let guesses = sample_guesses();
        save_guesses(&storage, "2022-03-06", &guesses).unwrap();

        let reopened = Storage::new(dir.path()).unwrap();
        assert_eq!(load_all_guesses(&reopened).unwrap()["2022-03-06"], guesses);
    }
}
