//! Enemy formation movement
//!
//! Enemies descend at a frame-rate independent speed. Crossing the bottom is
//! a wrap, not a kill: the enemy re-enters on the top row at a random x.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameEvent};
use crate::consts::*;

/// The full formation at its home positions, in slot order
pub fn spawn_formation() -> Vec<Enemy> {
    (0..FORMATION_SIZE).map(Enemy::new).collect()
}

/// Descent for one tick of `dt` seconds, scaled against the reference frame
#[inline]
pub fn descent_step(base_speed: f32, dt: f32) -> f32 {
    base_speed * (dt * 1000.0 / REFERENCE_FRAME_MS)
}

/// Move every active enemy down, wrapping those past the lower bound
pub fn advance_formation<R: Rng>(
    enemies: &mut [Enemy],
    base_speed: f32,
    dt: f32,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let step = descent_step(base_speed, dt);
    for enemy in enemies.iter_mut().filter(|e| e.active) {
        enemy.pos.y += step;
        if enemy.pos.y > WORLD_HEIGHT {
            wrap_to_top(enemy, rng);
            log::debug!("Enemy {} reached bottom, wrapped to x={:.0}", enemy.slot(), enemy.pos.x);
            events.push(GameEvent::EnemyWrapped { slot: enemy.slot() });
        }
    }
}

/// Put an enemy back on the top row at a random x inside the world
pub fn wrap_to_top<R: Rng>(enemy: &mut Enemy, rng: &mut R) {
    let x = rng.random_range(WRAP_MARGIN_X..WORLD_WIDTH - WRAP_MARGIN_X);
    enemy.pos = Vec2::new(x, WRAP_TOP_Y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_descent_is_frame_rate_independent() {
        let one_frame = descent_step(0.5, REFERENCE_FRAME_MS / 1000.0);
        assert!((one_frame - 0.5).abs() < 1e-5);

        let half = descent_step(0.5, 0.01);
        let double = descent_step(0.5, 0.02);
        assert!((double - 2.0 * half).abs() < 1e-6);
    }

    #[test]
    fn test_active_enemies_descend_inactive_stay() {
        let mut enemies = spawn_formation();
        enemies[1].active = false;
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();

        advance_formation(&mut enemies, 0.5, REFERENCE_FRAME_MS / 1000.0, &mut rng, &mut events);

        assert!(enemies[0].pos.y > FORMATION_TOP_Y);
        assert_eq!(enemies[1].pos, Enemy::home(1));
        assert!(events.is_empty());
    }

    #[test]
    fn test_enemy_wraps_to_top_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..100 {
            let mut enemies = spawn_formation();
            enemies[5].pos.y = WORLD_HEIGHT - 0.1;
            let mut events = Vec::new();

            advance_formation(&mut enemies, 0.5, 0.1, &mut rng, &mut events);

            let wrapped = &enemies[5];
            assert!(wrapped.active);
            assert_eq!(wrapped.pos.y, WRAP_TOP_Y);
            assert!(wrapped.pos.x >= WRAP_MARGIN_X && wrapped.pos.x < WORLD_WIDTH - WRAP_MARGIN_X);
            assert_eq!(events, vec![GameEvent::EnemyWrapped { slot: 5 }]);
        }
    }

    #[test]
    fn test_wrapped_enemy_keeps_moving() {
        let mut enemies = spawn_formation();
        enemies[0].pos.y = WORLD_HEIGHT;
        let mut rng = Pcg32::seed_from_u64(2);
        let mut events = Vec::new();

        advance_formation(&mut enemies, 0.5, 0.1, &mut rng, &mut events);
        assert_eq!(enemies[0].pos.y, WRAP_TOP_Y);
        advance_formation(&mut enemies, 0.5, 0.1, &mut rng, &mut events);
        assert!(enemies[0].pos.y > WRAP_TOP_Y);
        assert_eq!(events.len(), 1);
    }
}
