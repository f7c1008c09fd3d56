//! Progress squares: the 5-slot bar shown on the board and in shared results.
//!
//! Each green square is worth 20 points; a yellow square marks at least 10
//! more. The quantization is echoed verbatim into shared text, so the slot
//! counts must never drift.

use serde::{Deserialize, Serialize};

pub const SQUARE_COUNT: usize = 5;

const POINTS_PER_SQUARE: u8 = 20;
const POINTS_FOR_YELLOW: u8 = 10;

/// One slot of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Green,
    Yellow,
    Empty,
}

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Square {
    pub fn glyph(self, theme: Theme) -> &'static str {
        match (self, theme) {
            (Self::Green, _) => "🟩",
            (Self::Yellow, _) => "🟨",
            // Shared text must read the same whichever theme produced it.
            (Self::Empty, Theme::Light | Theme::Dark) => "⬜",
        }
    }
}

/// Quantize a proximity percentage into five squares.
pub fn squares(proximity: u8) -> [Square; SQUARE_COUNT] {
    let green = (proximity / POINTS_PER_SQUARE).min(5);
    let remainder = proximity - green * POINTS_PER_SQUARE;
    let yellow = u8::from(remainder >= POINTS_FOR_YELLOW && green < 5);
    let (green, yellow) = (usize::from(green), usize::from(yellow));

    let mut slots = [Square::Empty; SQUARE_COUNT];
    for (i, slot) in slots.iter_mut().enumerate() {
        if i < green {
            *slot = Square::Green;
        } else if i < green + yellow {
            *slot = Square::Yellow;
        }
    }
    slots
}

/// The glyphs for a proximity percentage in the given theme.
pub fn generate_square_characters(proximity: u8, theme: Theme) -> [&'static str; SQUARE_COUNT] {
    squares(proximity).map(|square| square.glyph(theme))
}
