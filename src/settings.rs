//! Game settings and preferences
//!
//! Supplied by the host at startup (JSON). Only the best score is persisted;
//! settings live for the session.

use serde::{Deserialize, Serialize};

use crate::audio::MixLevels;
use crate::locale::Language;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Silence background music
    pub muted: bool,
    /// UI and flavor-text language
    pub language: Language,

    // === Audio ===
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f64,
    /// Music volume while a bonus scene plays (0.0 - 1.0)
    pub ducked_volume: f64,
    /// Background music source (web builds)
    pub bgm_src: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            language: Language::En,
            music_volume: 0.5,
            ducked_volume: 0.2,
            bgm_src: "/bgm/sergio_magic.mp3".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.music_volume = settings.music_volume.clamp(0.0, 1.0);
        settings.ducked_volume = settings.ducked_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Volume levels for the audio channel
    pub fn mix_levels(&self) -> MixLevels {
        MixLevels {
            music: self.music_volume,
            ducked: self.ducked_volume,
        }
    }
}
