use serde::{Deserialize, Serialize};

#[allow(clippy::unreadable_literal)]
const MILES_PER_KM: f64 = 0.621371;

/// The player's preferred unit for displaying distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Miles,
}

/// Render a distance in meters as whole kilometers or miles, with thousands
/// separators: `"1,235 km"`, `"767 mi"`.
///
/// Rounds half away from zero, so 1500 m is `"2 km"`.
pub fn format_distance(meters: u32, unit: DistanceUnit) -> String {
    let km = f64::from(meters) / 1000.0;
    match unit {
        DistanceUnit::Km => format!("{} km", group_thousands(km.round())),
        DistanceUnit::Miles => format!("{} mi", group_thousands((km * MILES_PER_KM).round())),
    }
}

/// `1234567.0` → `"1,234,567"`. Expects a whole, non-negative value.
fn group_thousands(value: f64) -> String {
    let digits = format!("{value:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilometers() {
        assert_eq!(format_distance(0, DistanceUnit::Km), "0 km");
        assert_eq!(format_distance(1000, DistanceUnit::Km), "1 km");
        assert_eq!(format_distance(1499, DistanceUnit::Km), "1 km");
        assert_eq!(format_distance(1500, DistanceUnit::Km), "2 km");
        assert_eq!(format_distance(999_499, DistanceUnit::Km), "999 km");
        assert_eq!(format_distance(1_234_567, DistanceUnit::Km), "1,235 km");
        assert_eq!(format_distance(12_345_678, DistanceUnit::Km), "12,346 km");
    }

    #[test]
    fn miles() {
        assert_eq!(format_distance(1609, DistanceUnit::Miles), "1 mi");
        assert_eq!(format_distance(0, DistanceUnit::Miles), "0 mi");
        assert_eq!(format_distance(12_345_678, DistanceUnit::Miles), "7,671 mi");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(100_000.0), "100,000");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
    }
}
