use serde::{Deserialize, Serialize};

/// Special ways a day can be played. Each flag is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GameModes {
    /// The export chart is hidden.
    pub hide_image: bool,

    /// The export chart is shown rotated.
    pub rotation: bool,

    /// The April Fools ruleset: distances and directions are withheld.
    pub alt_mode: bool,
}
