//! Game state and entity storage
//!
//! Holds the player, the enemy formation and the projectile pool. Behavior
//! lives in the sibling modules; this is storage and iteration.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::formation::spawn_formation;
use super::gate::{AnswerGate, GateOutcome};
use super::pool::ProjectilePool;
use super::wave::WaveController;
use crate::consts::*;
use crate::tuning::Tuning;

/// Something that happened during a tick or an answer call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The question subsystem should present a new question
    QuestionRequested,
    /// A correct answer launched a projectile from this pool slot
    ShotFired { slot: usize },
    /// An enemy was hit and deactivated
    EnemyDestroyed { slot: usize },
    /// A projectile left the top of the world without hitting anything
    ProjectileExpired { slot: usize },
    /// An enemy crossed the bottom and re-entered at the top
    EnemyWrapped { slot: usize },
    /// Every enemy was down; the formation has respawned
    WaveCleared { wave: u32 },
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity (pixels/s)
    pub vel_x: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: PLAYER_START,
            size: PLAYER_SIZE,
            vel_x: 0.0,
        }
    }
}

impl Player {
    /// Set velocity from the polled keys. Left wins when both are held.
    pub fn apply_input(&mut self, left: bool, right: bool, speed: f32) {
        self.vel_x = if left {
            -speed
        } else if right {
            speed
        } else {
            0.0
        };
    }

    /// Move by current velocity, then clamp inside the world
    pub fn integrate(&mut self, dt: f32) {
        let half = self.size.x / 2.0;
        self.pos.x = (self.pos.x + self.vel_x * dt).clamp(half, WORLD_WIDTH - half);
    }

    /// Where a fired projectile appears
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y - MUZZLE_OFFSET)
    }
}

/// One member of the formation. Its slot never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    slot: usize,
    pub pos: Vec2,
    pub active: bool,
}

impl Enemy {
    pub fn new(slot: usize) -> Self {
        Self {
            slot,
            pos: Self::home(slot),
            active: true,
        }
    }

    /// Formation layout position for a slot
    pub fn home(slot: usize) -> Vec2 {
        Vec2::new(FORMATION_BASE_X + slot as f32 * FORMATION_SPACING, FORMATION_TOP_Y)
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, ENEMY_SIZE)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the wrap RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Formation, always in slot order
    pub enemies: Vec<Enemy>,
    pub projectiles: ProjectilePool,
    pub(crate) wave: WaveController,
    pub(crate) gate: AnswerGate,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let enemies = spawn_formation();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            projectiles: ProjectilePool::new(POOL_CAPACITY, tuning.projectile_speed),
            tuning,
            time_ticks: 0,
            player: Player::default(),
            wave: WaveController::new(enemies.len()),
            enemies,
            gate: AnswerGate::default(),
            events: Vec::new(),
        }
    }

    pub fn wave(&self) -> &WaveController {
        &self.wave
    }

    pub fn gate(&self) -> &AnswerGate {
        &self.gate
    }

    pub fn active_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.active).count()
    }

    /// Events recorded since the last drain, oldest first
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Ask for a new question and open the gate for its answer
    pub fn request_question(&mut self) {
        self.gate.request_question(&mut self.events);
    }

    /// Correct answer: fire from the player's muzzle
    pub fn fire(&mut self) -> GateOutcome {
        let muzzle = self.player.muzzle();
        self.gate
            .on_correct_answer(&mut self.projectiles, muzzle, &mut self.events)
    }

    /// Incorrect answer: move straight on to the next question
    pub fn skip(&mut self) -> GateOutcome {
        self.gate.on_incorrect_answer(&mut self.events)
    }
}
