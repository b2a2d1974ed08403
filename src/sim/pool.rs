//! Fixed-capacity projectile pool
//!
//! Slots are addressed by index and reused across activations. A free-list
//! hands out inactive slots in O(1). Only `acquire` and `release` flip a
//! slot's active flag.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::{PROJECTILE_DESPAWN_Y, PROJECTILE_SIZE};

/// Index of a pool slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectileHandle(usize);

impl ProjectileHandle {
    pub fn slot(self) -> usize {
        self.0
    }
}

/// Transient state of one pool slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Vertical velocity (pixels/s, negative is up)
    pub vel_y: f32,
    active: bool,
}

impl Projectile {
    fn idle() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel_y: 0.0,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, PROJECTILE_SIZE)
    }
}

/// What the loop should do with a projectile after moving it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileFate {
    InFlight,
    /// Past the top boundary; must be released
    OffScreen,
}

/// Advance a projectile one step and report whether it has left the world
pub fn update_projectile(projectile: &mut Projectile, dt: f32) -> ProjectileFate {
    projectile.pos.y += projectile.vel_y * dt;
    if projectile.pos.y < PROJECTILE_DESPAWN_Y {
        ProjectileFate::OffScreen
    } else {
        ProjectileFate::InFlight
    }
}

#[derive(Debug, Clone)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
    /// Inactive slot indices; the lowest index is on top
    free: Vec<usize>,
    launch_speed: f32,
}

impl ProjectilePool {
    pub fn new(capacity: usize, launch_speed: f32) -> Self {
        Self {
            slots: (0..capacity).map(|_| Projectile::idle()).collect(),
            free: (0..capacity).rev().collect(),
            launch_speed,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.free.is_empty()
    }

    /// Activate a free slot at `spawn`, moving upward. `None` when every slot is live.
    pub fn acquire(&mut self, spawn: Vec2) -> Option<ProjectileHandle> {
        let slot = self.free.pop()?;
        let projectile = &mut self.slots[slot];
        projectile.pos = spawn;
        projectile.vel_y = -self.launch_speed;
        projectile.active = true;
        Some(ProjectileHandle(slot))
    }

    /// Return a slot to the pool. Returns false if it was already inactive.
    pub fn release(&mut self, handle: ProjectileHandle) -> bool {
        let Some(projectile) = self.slots.get_mut(handle.0) else {
            return false;
        };
        if !projectile.active {
            return false;
        }
        projectile.active = false;
        projectile.vel_y = 0.0;
        self.free.push(handle.0);
        true
    }

    pub fn get(&self, handle: ProjectileHandle) -> Option<&Projectile> {
        self.slots.get(handle.0)
    }

    /// Live projectiles in slot order
    pub fn iter_active(&self) -> impl Iterator<Item = (ProjectileHandle, &Projectile)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active)
            .map(|(i, p)| (ProjectileHandle(i), p))
    }

    /// Move every live projectile, returning those that left the world
    pub(crate) fn advance(&mut self, dt: f32) -> Vec<ProjectileHandle> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, p)| p.active)
            .filter_map(|(i, p)| match update_projectile(p, dt) {
                ProjectileFate::OffScreen => Some(ProjectileHandle(i)),
                ProjectileFate::InFlight => None,
            })
            .collect()
    }
}
