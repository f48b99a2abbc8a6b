//! Game settings
//!
//! Every tunable the engine reads lives here. Defaults reproduce the classic
//! rules (11 blocks of 3, a 7-slot tray, 90s easy / 20s hard, +10s bonus).

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Pattern;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Countdown for easy difficulty (ms)
    pub easy_duration_ms: u64,
    /// Countdown for hard difficulty (ms)
    pub hard_duration_ms: u64,
    /// Time added by the one-shot bonus (ms)
    pub bonus_ms: u64,
    /// Tray capacity
    pub tray_capacity: usize,
    /// Blocks per board
    pub block_count: usize,
    /// Tiles per block at creation
    pub tiles_per_block: usize,
    /// Number of distinct patterns
    pub pattern_count: u8,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            easy_duration_ms: EASY_DURATION_MS,
            hard_duration_ms: HARD_DURATION_MS,
            bonus_ms: BONUS_MS,
            tray_capacity: TRAY_CAPACITY,
            block_count: NUM_BLOCKS,
            tiles_per_block: TILES_PER_BLOCK,
            pattern_count: PATTERN_COUNT,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The pattern set boards are generated from
    pub fn patterns(&self) -> Vec<Pattern> {
        (0..self.pattern_count).map(Pattern).collect()
    }

    /// Load settings from an optional JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
