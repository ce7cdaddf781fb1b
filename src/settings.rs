//! Match settings
//!
//! Loaded from a JSON file next to the binary; anything missing falls back
//! to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::WIN_SCORE;
use crate::sim::{Match, Side};

/// Runtime configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Points needed to take the match
    pub win_score: u32,
    /// Serve RNG seed; `None` picks one from the clock
    pub seed: Option<u64>,

    // === Idle/demo mode ===
    /// Let the autopilot play the left side
    pub left_autopilot: bool,
    /// Let the autopilot play the right side
    pub right_autopilot: bool,

    // === Headless runs ===
    /// Stop after this many ticks even without a winner
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            win_score: WIN_SCORE,
            seed: None,
            left_autopilot: true,
            right_autopilot: true,
            // Ten minutes at 60 Hz
            max_ticks: 60 * 60 * 10,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings file {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Can't read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// A zero winning score would end the match before the first serve
    fn sanitized(mut self) -> Self {
        if self.win_score == 0 {
            log::warn!("win_score 0 is not playable, using {}", WIN_SCORE);
            self.win_score = WIN_SCORE;
        }
        self
    }

    /// Whether the autopilot drives `side`
    pub fn autopilot(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_autopilot,
            Side::Right => self.right_autopilot,
        }
    }

    /// Start a match with these settings, using `fallback_seed` if none is set
    pub fn new_match(&self, fallback_seed: u64) -> Match {
        Match::new(self.seed.unwrap_or(fallback_seed), self.win_score)
    }
}
