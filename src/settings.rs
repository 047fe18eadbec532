//! Game settings and preferences
//!
//! Stored as JSON next to the working directory. Missing or malformed
//! files fall back to defaults; the game itself never persists anything
//! else.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Settings file name
pub const SETTINGS_FILE: &str = "pixel-invaders.json";

/// Environment variable overriding the quality preset for one run
pub const QUALITY_ENV: &str = "PIXEL_INVADERS_QUALITY";

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Display name, also accepted back by [`QualityPreset::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Parse a preset name, case-insensitively
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum particles drawn for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 64,
            QualityPreset::Medium => 192,
            QualityPreset::High => 256,
        }
    }

    /// Whether to render the starfield background
    pub fn starfield_enabled(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => true,
            QualityPreset::High => true,
        }
    }

    /// Background star count
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 0,
            QualityPreset::Medium => 70,
            QualityPreset::High => 140,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Kill burst particles
    pub particles: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings file {}: {}", path.display(), e);
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings file, using defaults");
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
            }
        }
        Self::default()
    }

    /// Apply a one-run quality override from [`QUALITY_ENV`], if set
    pub fn with_env_override(mut self) -> Self {
        if let Ok(value) = std::env::var(QUALITY_ENV) {
            match QualityPreset::from_str(&value) {
                Some(preset) => {
                    log::info!("Quality preset {} (from {})", preset.as_str(), QUALITY_ENV);
                    self.quality = preset;
                }
                None => {
                    log::warn!("Ignoring unrecognized {} value {:?}", QUALITY_ENV, value);
                }
            }
        }
        self
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {}", path.display(), e);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}
