//! Game settings
//!
//! Read from `settings.json` in the working directory. Every field is
//! optional; anything missing or unreadable falls back to the defaults. A
//! missing file is written out with the defaults on first launch.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::sim::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Rules ===
    /// Levels on the path
    pub level_count: usize,
    /// Chance (0.0 - 1.0) of a destiny card after each non-final level
    pub destiny_card_chance: f64,
    /// Absolute tolerance when checking answers
    pub answer_tolerance: f64,
    /// Fixed RNG seed (random per launch when absent)
    pub seed: Option<u64>,

    // === Files ===
    /// Leaderboard JSON file
    pub leaderboard_path: PathBuf,
    /// Directory holding cover/character/path images
    pub assets_dir: PathBuf,

    // === Loop ===
    /// Main loop iterations per second
    pub target_fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level_count: DEFAULT_LEVEL_COUNT,
            destiny_card_chance: DESTINY_CARD_CHANCE,
            answer_tolerance: ANSWER_TOLERANCE,
            seed: None,

            leaderboard_path: PathBuf::from("leaderboard.json"),
            assets_dir: PathBuf::from("."),

            target_fps: TARGET_FPS,
        }
    }
}

impl Settings {
    /// Settings file name
    pub const FILE_NAME: &'static str = "settings.json";

    /// Rule knobs for a new session
    pub fn tuning(&self) -> Tuning {
        Tuning {
            level_count: self.level_count,
            destiny_card_chance: self.destiny_card_chance,
            answer_tolerance: self.answer_tolerance,
        }
        .sanitized()
    }

    /// Time budget of one loop iteration
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }

    /// Load `settings.json` from the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Load settings, using defaults when the file is absent or unreadable.
    /// An absent file is created with the defaults so it can be edited.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                let settings = Self::default();
                if let Err(e) = settings.save_to(path) {
                    log::warn!("Could not write default settings: {}", e);
                }
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings; `Ok(None)` when the file does not exist
    pub fn try_load_from(path: &Path) -> Result<Option<Self>> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(GameError::persistence(path, e)),
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| GameError::corrupt(path, e))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| GameError::corrupt(path, e))?;
        fs::write(path, json).map_err(|e| GameError::persistence(path, e))?;
        log::info!("Settings saved");
        Ok(())
    }
}
