//! Guess scoring: how far, which way, and how close a guess is to the target.
//!
//! Everything here is pure. The only input from the outside world is the
//! [`Geodesy`] provider, which turns two points into a distance and a bearing.

mod direction;
mod distance;
mod geodesy;
mod proximity;
mod squares;

pub use direction::{Direction, get_compass_direction};
pub use distance::{DistanceUnit, format_distance};
pub use geodesy::{Earth, Geodesy, Point};
pub use proximity::compute_proximity_percent;
pub use squares::{SQUARE_COUNT, Theme, generate_square_characters};

/// Errors from scoring a guess.
#[derive(Debug, thiserror::Error)]
pub enum GeographyError {
    #[error("could not calculate bearing for given points (got {0})")]
    InvalidBearing(f64),
}
