//! Settings persistence for QuickDig.
//!
//! A single JSON file beside the executable holding the dark-mode flag. Reads
//! fail soft to the dark default; writes are best-effort and never surface
//! errors to the user.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

const SETTINGS_FILE: &str = "settings.json";

fn dark_mode_default() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "dark_mode_default")]
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to the defaults on any failure.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                info!("no settings at {} ({e}), using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("malformed settings at {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Overwrites `path` with the current settings, single attempt.
    pub fn save_to(&self, path: &Path) {
        let payload = match serde_json::to_string(self) {
            Ok(payload) => payload,
            Err(e) => {
                error!("failed to serialize settings: {e}");
                return;
            }
        };

        if let Err(e) = fs::write(path, payload) {
            error!("failed to save settings to {}: {e}", path.display());
        }
    }
}

/// The settings file lives next to the executable.
pub fn settings_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(SETTINGS_FILE)))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
}
