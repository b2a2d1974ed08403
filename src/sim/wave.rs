//! Wave state machine
//!
//! `Active -> Cleared -> Active` is the only cycle. A cleared wave respawns in
//! the same tick, so `Cleared` is never observed between ticks.

use serde::{Deserialize, Serialize};

use super::state::Enemy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveState {
    /// At least one enemy alive
    Active,
    /// Every enemy down, respawn pending this tick
    Cleared,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveController {
    state: WaveState,
    active_enemies: usize,
    waves_cleared: u32,
}

impl WaveController {
    pub fn new(formation_size: usize) -> Self {
        Self {
            state: WaveState::Active,
            active_enemies: formation_size,
            waves_cleared: 0,
        }
    }

    pub fn state(&self) -> WaveState {
        self.state
    }

    pub fn active_enemies(&self) -> usize {
        self.active_enemies
    }

    pub fn waves_cleared(&self) -> u32 {
        self.waves_cleared
    }

    /// Recount after an enemy was deactivated
    pub fn enemy_destroyed(&mut self, enemies: &[Enemy]) {
        self.active_enemies = enemies.iter().filter(|e| e.active).count();
        if self.active_enemies == 0 && self.state == WaveState::Active {
            self.state = WaveState::Cleared;
            log::info!("Wave {} cleared", self.waves_cleared + 1);
        }
    }

    /// Restore the formation if the wave is cleared. Returns whether it did.
    pub fn respawn(&mut self, enemies: &mut [Enemy]) -> bool {
        if self.state != WaveState::Cleared {
            return false;
        }
        for enemy in enemies.iter_mut() {
            enemy.pos = Enemy::home(enemy.slot());
            enemy.active = true;
        }
        self.active_enemies = enemies.len();
        self.waves_cleared += 1;
        self.state = WaveState::Active;
        log::info!("Formation respawned, {} enemies active", self.active_enemies);
        true
    }
}
