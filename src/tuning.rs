//! Data-driven game balance
//!
//! Speeds the simulation reads every tick. Defaults match `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player horizontal speed (pixels/s)
    pub player_speed: f32,
    /// Projectile launch speed, upward (pixels/s)
    pub projectile_speed: f32,
    /// Enemy descent per reference frame (pixels)
    pub enemy_base_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            enemy_base_speed: ENEMY_BASE_SPEED,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_speed("tuning.player_speed", self.player_speed)?;
        check_speed("tuning.projectile_speed", self.projectile_speed)?;
        check_speed("tuning.enemy_base_speed", self.enemy_base_speed)
    }
}

fn check_speed(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if !value.is_finite() {
        return Err(SettingsError::Invalid {
            field,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(SettingsError::Invalid {
            field,
            reason: "must be positive",
        });
    }
    Ok(())
}
