//! Game settings
//!
//! Loaded from an optional JSON file; anything missing falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::tuning::Tuning;

/// Options for the headless driver binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Number of simulation ticks to run
    pub ticks: u64,
    /// Ticks the automatic player "thinks" before answering
    pub answer_delay_ticks: u32,
    /// Probability of picking the correct option (0.0 - 1.0)
    pub accuracy: f64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            ticks: 60 * 60,
            answer_delay_ticks: 45,
            accuracy: 0.8,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for formation wraps and question generation
    pub seed: u64,
    /// Gameplay speeds
    pub tuning: Tuning,
    /// Headless driver
    pub demo: DemoSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed_0f_1a5e,
            tuning: Tuning::default(),
            demo: DemoSettings::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults when the file is absent or bad
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring settings at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.tuning.validate()?;
        if !(0.0..=1.0).contains(&self.demo.accuracy) {
            return Err(SettingsError::Invalid {
                field: "demo.accuracy",
                reason: "must be between 0 and 1",
            });
        }
        Ok(())
    }
}
