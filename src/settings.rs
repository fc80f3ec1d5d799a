//! Session settings
//!
//! Handed in by the host app as JSON. Nothing is stored between launches.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background music starts enabled
    pub music_enabled: bool,

    // === Accessibility ===
    /// Reduced motion (skip the deliberate pauses before reveals)
    pub reduced_motion: bool,

    /// Seed for the tile shuffle; `None` lets the host pick one per launch
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            reduced_motion: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        log::info!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pause length in ticks, respecting reduced_motion
    pub fn effective_delay_ticks(&self, ms: u32) -> u32 {
        if self.reduced_motion {
            0
        } else {
            crate::ms_to_ticks(ms)
        }
    }

    /// Seed to use for this session
    pub fn effective_seed(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }
}
