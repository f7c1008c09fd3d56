/// Roughly the largest distance between two points on Earth, in meters.
pub const MAX_DISTANCE_ON_EARTH: u32 = 20_000_000;

/// How close a guess is, as a percentage: 100 for an exact match, 0 at the
/// far side of the planet.
///
/// A non-zero distance never scores 100, however close it rounds.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_proximity_percent(distance: u32) -> u8 {
    let proximity = MAX_DISTANCE_ON_EARTH.saturating_sub(distance);
    let rounded =
        (f64::from(proximity) / f64::from(MAX_DISTANCE_ON_EARTH) * 100.0).round() as u8;
    if distance > 0 && rounded >= 100 {
        return 99;
    }
    rounded
}
