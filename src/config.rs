//! Tradle configuration.
//!
//! Loaded from `~/.tradle/config.toml`. A missing file means defaults:
//!
//! ```toml
//! distance-unit = "miles"   # or "km"
//! theme = "dark"            # or "light"
//!
//! [modes]
//! hide-image = false
//! rotation = false
//! alt-mode = false
//! ```

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::geography::{DistanceUnit, Theme};
use crate::model::GameModes;

/// Player preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Unit distances are displayed in.
    pub distance_unit: DistanceUnit,

    pub theme: Theme,

    /// Special modes applied to every day.
    pub modes: GameModes,
}

impl Config {
    /// Load config from `~/.tradle/config.toml`.
    /// Returns defaults if the file is missing, an error if it is invalid.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        Self::parse(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The config file path: `~/.tradle/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".tradle").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn full_config() {
        let config = Config::parse(
            r#"
            distance-unit = "miles"
            theme = "dark"

            [modes]
            hide-image = true
            alt-mode = true
            "#,
        )
        .unwrap();
        assert_eq!(config.distance_unit, DistanceUnit::Miles);
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.modes.hide_image);
        assert!(!config.modes.rotation);
        assert!(config.modes.alt_mode);
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(Config::parse(r#"distance-unit = "furlongs""#).is_err());
    }
}
