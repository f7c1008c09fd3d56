//! Board formatting for CLI display.

use crate::config::Config;
use crate::game::MAX_GUESSES;
use crate::geography::{Direction, SQUARE_COUNT, format_distance, generate_square_characters};
use crate::model::{Guess, construct_oec_link};

const EXACT_MATCH: &str = "🎉";
const WITHHELD: &str = "⁇";

/// Shown in place of the proximity under the April Fools rules, one per row.
const APRIL_FOOLS_MARKS: [&str; MAX_GUESSES] = ["🐶", "🌪", "🏚", "🚲", "👠", "🦁"];

fn direction_arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::N => "⬆️",
        Direction::NE => "↗️",
        Direction::E => "➡️",
        Direction::SE => "↘️",
        Direction::S => "⬇️",
        Direction::SW => "↙️",
        Direction::W => "⬅️",
        Direction::NW => "↖️",
    }
}

/// One board row: squares, proximity, name, distance, direction, profile link.
pub(super) fn format_guess_row(index: usize, guess: &Guess, settings: Config) -> String {
    let squares = generate_square_characters(guess.proximity(), settings.theme).concat();

    let (score, distance, direction) = if settings.modes.alt_mode {
        let mark = APRIL_FOOLS_MARKS.get(index).copied().unwrap_or(WITHHELD);
        let direction = if guess.is_exact() { EXACT_MATCH } else { WITHHELD };
        (mark.to_string(), WITHHELD.to_string(), direction)
    } else {
        let direction = if guess.is_exact() {
            EXACT_MATCH
        } else {
            direction_arrow(guess.direction)
        };
        (
            format!("{}%", guess.proximity()),
            format_distance(guess.distance, settings.distance_unit),
            direction,
        )
    };

    let mut row = format!(
        "{squares}  {score:>4}  {name:<22} {distance:>10}  {direction}",
        name = guess.name
    );
    if let Some(country) = &guess.country {
        row.push_str("  ");
        row.push_str(&construct_oec_link(country));
    }
    row
}

/// Every guess row, then a placeholder for each guess still available.
pub(super) fn format_board(guesses: &[Guess], settings: Config) -> Vec<String> {
    let mut lines: Vec<String> = guesses
        .iter()
        .enumerate()
        .map(|(i, g)| format_guess_row(i, g, settings))
        .collect();
    let empty = "·".repeat(SQUARE_COUNT);
    lines.resize(MAX_GUESSES.max(guesses.len()), empty);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::geography::DistanceUnit;
    use crate::model::{GameModes, find_by_code};

    fn guess(distance: u32, direction: Direction) -> Guess {
        Guess {
            name: "Peru".into(),
            distance,
            direction,
            country: None,
        }
    }

    fn alt_mode() -> Config {
        Config {
            modes: GameModes {
                alt_mode: true,
                ..GameModes::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn arrows_cover_every_direction() {
        let all = [
            Direction::N,
            Direction::NE,
            Direction::E,
            Direction::SE,
            Direction::S,
            Direction::SW,
            Direction::W,
            Direction::NW,
        ];
        let arrows: std::collections::HashSet<_> = all.into_iter().map(direction_arrow).collect();
        assert_eq!(arrows.len(), all.len());
    }

    #[test]
    fn row_shows_feedback() {
        let row = format_guess_row(0, &guess(10_000_000, Direction::SW), Config::default());
        assert!(row.starts_with("🟩🟩🟨⬜⬜"), "{row}");
        assert!(row.contains("50%"));
        assert!(row.contains("Peru"));
        assert!(row.contains("10,000 km"));
        assert!(row.ends_with("↙️"));
    }

    #[test]
    fn row_in_miles() {
        let settings = Config {
            distance_unit: DistanceUnit::Miles,
            ..Config::default()
        };
        let row = format_guess_row(0, &guess(1609, Direction::N), settings);
        assert!(row.contains(" 1 mi"), "{row}");
    }

    #[test]
    fn exact_match_replaces_direction() {
        let row = format_guess_row(2, &guess(0, Direction::W), Config::default());
        assert!(row.contains("100%"));
        assert!(row.ends_with(EXACT_MATCH));
        assert!(!row.contains("⬅️"));
    }

    #[test]
    fn row_links_country_profile() {
        let mut g = guess(1_000, Direction::E);
        g.country = find_by_code("PE").map(|c| c.to_country());
        let row = format_guess_row(0, &g, Config::default());
        assert!(row.ends_with("https://oec.world/en/profile/country/per"), "{row}");
    }

    #[test]
    fn alt_mode_withholds_feedback() {
        let row = format_guess_row(3, &guess(10_000_000, Direction::SW), alt_mode());
        assert!(row.starts_with("🟩🟩🟨⬜⬜"), "{row}");
        assert!(row.contains("🚲"));
        assert!(!row.contains("50%"));
        assert!(!row.contains("km"));
        assert!(row.ends_with(WITHHELD));

        let won = format_guess_row(0, &guess(0, Direction::N), alt_mode());
        assert!(won.contains("🐶"));
        assert!(won.ends_with(EXACT_MATCH));
    }

    #[test]
    fn board_pads_to_max_guesses() {
        let guesses = [guess(5_000_000, Direction::N), guess(0, Direction::N)];
        let lines = format_board(&guesses, Config::default());
        assert_eq!(lines.len(), MAX_GUESSES);
        assert!(lines[1].contains("100%"));
        assert_eq!(lines[2], "·····");
        assert_eq!(lines[5], "·····");
    }
}
