//! Projectile/enemy collision detection and resolution
//!
//! Everything is axis-aligned rectangles centered on their position, so the
//! test is a plain AABB overlap computed from raw positions and sizes. Counts
//! are tiny (10 projectiles x 10 enemies), so pairs are scanned exhaustively.

use glam::Vec2;

use super::pool::{ProjectileHandle, ProjectilePool};
use super::state::Enemy;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// A resolved projectile/enemy pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub projectile: ProjectileHandle,
    pub enemy_slot: usize,
}

/// Resolve every overlapping (projectile, enemy) pair for this tick
///
/// Projectiles are scanned in pool-slot order. Each claims at most one enemy:
/// the first active overlapping enemy in formation-slot order. The projectile
/// is released and the enemy deactivated immediately, so a claimed enemy is
/// invisible to the projectiles scanned after it.
///
/// `enemies` must be in slot order.
pub fn resolve_collisions(pool: &mut ProjectilePool, enemies: &mut [Enemy]) -> Vec<Hit> {
    debug_assert!(enemies.iter().enumerate().all(|(i, e)| e.slot() == i));

    let shots: Vec<(ProjectileHandle, Aabb)> = pool
        .iter_active()
        .map(|(handle, projectile)| (handle, projectile.bounds()))
        .collect();

    let mut hits = Vec::new();
    for (handle, bounds) in shots {
        let target = enemies
            .iter_mut()
            .filter(|enemy| enemy.active)
            .find(|enemy| bounds.overlaps(&enemy.bounds()));

        if let Some(enemy) = target {
            pool.release(handle);
            enemy.active = false;
            log::debug!("Projectile {} hit enemy {}", handle.slot(), enemy.slot());
            hits.push(Hit {
                projectile: handle,
                enemy_slot: enemy.slot(),
            });
        }
    }
    hits
}
