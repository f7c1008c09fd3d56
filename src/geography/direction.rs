use serde::{Deserialize, Serialize};

use super::{Geodesy, GeographyError, Point};

/// One of the eight 45° compass octants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// Octants in clockwise order, starting at north.
const OCTANTS: [Direction; 8] = [
    Direction::N,
    Direction::NE,
    Direction::E,
    Direction::SE,
    Direction::S,
    Direction::SW,
    Direction::W,
    Direction::NW,
];

/// Classify a bearing in degrees into its octant.
///
/// Each octant is centered on its compass point, so north covers
/// `[337.5, 22.5)`. Ties round half away from zero: 22.5° is `NE`.
#[allow(clippy::cast_possible_truncation)]
pub fn direction_from_bearing(bearing: f64) -> Result<Direction, GeographyError> {
    if bearing.is_nan() {
        return Err(GeographyError::InvalidBearing(bearing));
    }
    let sector = (bearing / 45.0).round() as i64;
    let index = usize::try_from(sector.rem_euclid(8)).unwrap_or_default();
    Ok(OCTANTS[index])
}

/// Compass direction from `from` towards `to`, along the rhumb line.
pub fn get_compass_direction(
    geodesy: &impl Geodesy,
    from: Point,
    to: Point,
) -> Result<Direction, GeographyError> {
    let bearing = geodesy.bearing(from, to);
    direction_from_bearing(bearing).inspect_err(|_| {
        tracing::error!(?from, ?to, "geodesy returned a NaN bearing");
    })
}
