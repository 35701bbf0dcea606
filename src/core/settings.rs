//! AI settings persistence
//!
//! [`AiSettings`] is stored as pretty JSON in `settings.json` under the
//! platform configuration directory, e.g.
//! `~/.config/xiangqi/settings.json` on Linux.
//!
//! Loading never fails: a missing, unreadable or malformed file yields the
//! defaults and a warning. Saving reports errors to the caller.

use super::error::CoreResult;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use xiangqi_engine::{Difficulty, Player};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Chance of attaching a reaction to a quiet AI move
pub const DEFAULT_REACTION_CHANCE: f64 = 0.2;

/// User preferences for the computer opponent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    /// Side played by the computer
    pub ai_player: Player,
    pub difficulty: Difficulty,
    /// Probability in `[0, 1]` of a reaction on a non-checking move
    pub reaction_chance: f64,
}

impl Default for AiSettings {
    /// AI plays Black at medium strength
    fn default() -> Self {
        Self {
            ai_player: Player::Black,
            difficulty: Difficulty::Medium,
            reaction_chance: DEFAULT_REACTION_CHANCE,
        }
    }
}

/// Resolve the settings file path
///
/// Falls back to `settings.json` in the working directory when the system
/// config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "xiangqi") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from `path`, or defaults if that fails
pub fn load_settings(path: &Path) -> AiSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return AiSettings::default();
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.", path, e);
            return AiSettings::default();
        }
    };

    match serde_json::from_str::<AiSettings>(&contents) {
        Ok(mut settings) => {
            settings.reaction_chance = settings.reaction_chance.clamp(0.0, 1.0);
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.", path, e);
            AiSettings::default()
        }
    }
}

/// Write `settings` to `path`, creating parent directories as needed
pub fn save_settings(path: &Path, settings: &AiSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
