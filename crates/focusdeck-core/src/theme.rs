//! Theme choice, persisted under the `theme` record.
//!
//! Palette colors are a rendering concern and live with the host; the
//! core only knows the choice and how `Dynamic` resolves by hour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "Pastel Pink")]
    PastelPink,
    #[serde(rename = "Olive Forest")]
    OliveForest,
    #[serde(rename = "Midnight Blue")]
    MidnightBlue,
    #[serde(rename = "Beige Minimal")]
    BeigeMinimal,
    #[default]
    Dynamic,
}

impl Theme {
    /// Resolve `Dynamic` to a concrete theme by local hour (0..=23):
    /// calm mornings, green afternoons, warm evenings, dark nights.
    pub fn resolve(self, hour: u32) -> Theme {
        match self {
            Theme::Dynamic => match hour {
                6..=11 => Theme::BeigeMinimal,
                12..=17 => Theme::OliveForest,
                18..=21 => Theme::PastelPink,
                _ => Theme::MidnightBlue,
            },
            concrete => concrete,
        }
    }
}
