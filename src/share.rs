//! Share text: the spoiler-free result players paste elsewhere.
//!
//! ```text
//! #Tradle #26 3/6 🙈
//! 🟩🟩🟨⬜⬜
//! 🟩🟩🟩🟩🟨
//! 🟩🟩🟩🟩🟩
//! https://oec.world/en/games/tradle
//! ```
//!
//! Square lines are rebuilt from stored distances, so sharing the same day
//! twice yields the same text character for character.

use crate::game::{DayKey, MAX_GUESSES};
use crate::geography::{Theme, generate_square_characters};
use crate::model::{GameModes, Guess};

pub const GAME_NAME: &str = "Tradle";

pub const SHARE_URL: &str = "https://oec.world/en/games/tradle";

/// Emoji appended to the title for each active mode, in a fixed order.
fn modifier_suffix(modes: GameModes) -> String {
    let mut suffix = String::new();
    if modes.hide_image {
        suffix.push_str(" 🙈");
    }
    if modes.rotation {
        suffix.push_str(" 🌀");
    }
    suffix
}

/// `#Tradle #<day> <guesses|X>/6<modes>`.
pub fn share_title(guesses: &[Guess], day_count: i32, modes: GameModes) -> String {
    let guess_count = if guesses.last().is_some_and(Guess::is_exact) {
        guesses.len().to_string()
    } else {
        "X".to_string()
    };
    let tag = if modes.alt_mode { " #AprilFoolsDay" } else { "" };
    let suffix = modifier_suffix(modes);
    format!("#{GAME_NAME}{tag} #{day_count} {guess_count}/{MAX_GUESSES}{suffix}")
}

/// The full share text: title, one square line per guess, link.
pub fn share_text(guesses: &[Guess], day: DayKey, modes: GameModes, theme: Theme) -> String {
    let mut lines = Vec::with_capacity(guesses.len() + 2);
    lines.push(share_title(guesses, day.day_count(), modes));
    lines.extend(
        guesses
            .iter()
            .map(|g| generate_square_characters(g.proximity(), theme).concat()),
    );
    lines.push(SHARE_URL.to_string());
    lines.join("\n")
}
