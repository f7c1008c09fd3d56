//! Geodesy provider: distances and bearings between points on the globe.

use geo::{Bearing, Distance, Haversine, Rhumb};
use serde::{Deserialize, Serialize};

/// A location on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Point> for geo::Point {
    fn from(point: Point) -> Self {
        // geo is x/y ordered.
        geo::Point::new(point.longitude, point.latitude)
    }
}

/// Measures the path between two points.
///
/// Implementations may return a NaN bearing for degenerate input; callers
/// are expected to detect it (see [`super::get_compass_direction`]).
pub trait Geodesy {
    /// Distance from `from` to `to`, in whole meters.
    fn distance(&self, from: Point, to: Point) -> u32;

    /// Rhumb-line bearing from `from` to `to`, in degrees clockwise from north.
    fn bearing(&self, from: Point, to: Point) -> f64;
}

/// Spherical Earth: haversine distance and rhumb-line bearing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Earth;

impl Geodesy for Earth {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn distance(&self, from: Point, to: Point) -> u32 {
        let meters: f64 = Haversine.distance(geo::Point::from(from), geo::Point::from(to));
        // Saturating cast; half of any great circle fits comfortably in u32.
        meters.round() as u32
    }

    fn bearing(&self, from: Point, to: Point) -> f64 {
        let degrees: f64 = Rhumb.bearing(geo::Point::from(from), geo::Point::from(to));
        degrees.rem_euclid(360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: Point = Point {
        latitude: 48.8566,
        longitude: 2.3522,
    };
    const BERLIN: Point = Point {
        latitude: 52.52,
        longitude: 13.405,
    };

    #[test]
    fn same_point_is_zero_meters() {
        assert_eq!(Earth.distance(PARIS, PARIS), 0);
    }

    #[test]
    fn paris_to_berlin() {
        let d = Earth.distance(PARIS, BERLIN);
        assert!((860_000..890_000).contains(&d), "got {d}");
        assert_eq!(d, Earth.distance(BERLIN, PARIS));
    }

    #[test]
    fn quarter_meridian_uses_mean_radius() {
        // Mean radius 6,371,008.8 m; the equatorial radius would give 10,018,754.
        let d = Earth.distance(Point::new(0.0, 0.0), Point::new(90.0, 0.0));
        assert!(d.abs_diff(10_007_557) <= 1, "got {d}");
    }

    #[test]
    fn cardinal_bearings() {
        let origin = Point::new(0.0, 0.0);
        let cases = [
            (Point::new(10.0, 0.0), 0.0),
            (Point::new(0.0, 10.0), 90.0),
            (Point::new(-10.0, 0.0), 180.0),
            (Point::new(0.0, -10.0), 270.0),
        ];
        for (to, expected) in cases {
            let b = Earth.bearing(origin, to);
            assert!((b - expected).abs() < 1e-6, "to {to:?}: got {b}");
        }
    }

    #[test]
    fn bearing_stays_in_range() {
        let b = Earth.bearing(BERLIN, PARIS);
        assert!((0.0..360.0).contains(&b), "got {b}");
        assert!(b > 180.0 && b < 270.0, "got {b}");
    }
}
