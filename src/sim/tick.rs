//! Per-frame simulation tick
//!
//! Core game loop. Steps run in a fixed order every tick:
//! 1. input -> player velocity, move and clamp
//! 2. formation descent / wrap, projectile movement
//! 3. collision resolution, then release of off-screen projectiles
//! 4. respawn if the wave was cleared
//!
//! The answer gate never blocks a tick: enemies and projectiles keep moving
//! however long a question stays unanswered.

use super::collision::resolve_collisions;
use super::formation::advance_formation;
use super::state::{GameEvent, GameState};
use super::wave::WaveState;

/// Input polled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // 1. Player
    state
        .player
        .apply_input(input.left, input.right, state.tuning.player_speed);
    state.player.integrate(dt);

    // 2. Formation and projectiles
    advance_formation(
        &mut state.enemies,
        state.tuning.enemy_base_speed,
        dt,
        &mut state.rng,
        &mut state.events,
    );
    let off_screen = state.projectiles.advance(dt);

    // 3. Collisions first: a projectile that hits on its way out counts as a hit
    for hit in resolve_collisions(&mut state.projectiles, &mut state.enemies) {
        state.events.push(GameEvent::EnemyDestroyed {
            slot: hit.enemy_slot,
        });
        state.wave.enemy_destroyed(&state.enemies);
        state.gate.shot_resolved(hit.projectile, &mut state.events);
    }
    for handle in off_screen {
        if state.projectiles.release(handle) {
            log::debug!("Projectile {} off screen, released", handle.slot());
            state.events.push(GameEvent::ProjectileExpired {
                slot: handle.slot(),
            });
            state.gate.shot_resolved(handle, &mut state.events);
        }
    }

    // 4. Wave
    if state.wave.state() == WaveState::Cleared {
        state.events.push(GameEvent::WaveCleared {
            wave: state.wave.waves_cleared() + 1,
        });
        state.wave.respawn(&mut state.enemies);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::gate::{AnswerGateState, GateOutcome};
    use crate::sim::state::Enemy;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn fresh() -> GameState {
        let mut state = GameState::new(12345, Tuning::default());
        state.request_question();
        state.drain_events().for_each(drop);
        state
    }

    fn requests(events: &[GameEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::QuestionRequested))
            .count()
    }

    /// Leave only `slot` alive and sync the wave count
    fn keep_only(state: &mut GameState, slot: usize) {
        for enemy in state.enemies.iter_mut().filter(|e| e.slot() != slot) {
            enemy.active = false;
        }
        state.wave.enemy_destroyed(&state.enemies);
    }

    #[test]
    fn test_tick_moves_player_and_formation() {
        let mut state = fresh();
        let input = TickInput {
            left: true,
            right: false,
        };
        tick(&mut state, &input, SIM_DT);

        assert!(state.player.pos.x < PLAYER_START.x);
        assert_eq!(state.player.vel_x, -PLAYER_SPEED);
        assert!(state.enemies.iter().all(|e| e.pos.y > FORMATION_TOP_Y));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_world_keeps_moving_while_awaiting_answer() {
        let mut state = fresh();
        assert_eq!(state.gate().state(), AnswerGateState::AwaitingAnswer);
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.gate().state(), AnswerGateState::AwaitingAnswer);
        assert!(state.enemies[0].pos.y > FORMATION_TOP_Y + 100.0);
        assert_eq!(requests(state.pending_events()), 0);
    }

    #[test]
    fn test_hit_requests_next_question() {
        let mut state = fresh();
        // Park slot 5 right above the muzzle
        state.enemies[5].pos = Vec2::new(PLAYER_START.x, 515.0);

        assert!(matches!(state.fire(), GateOutcome::Fired(_)));
        assert_eq!(requests(state.pending_events()), 0);

        tick(&mut state, &TickInput::default(), SIM_DT);

        let events: Vec<_> = state.drain_events().collect();
        assert!(events.contains(&GameEvent::EnemyDestroyed { slot: 5 }));
        assert_eq!(requests(&events), 1);
        assert!(!state.enemies[5].active);
        assert_eq!(state.wave().active_enemies(), 9);
        assert_eq!(state.projectiles.active_count(), 0);
        assert_eq!(state.gate().state(), AnswerGateState::AwaitingAnswer);
    }

    #[test]
    fn test_last_enemy_hit_respawns_same_tick() {
        let mut state = fresh();
        keep_only(&mut state, 0);
        assert_eq!(state.wave().active_enemies(), 1);
        state.enemies[0].pos = Vec2::new(PLAYER_START.x, 520.0);

        state.fire();
        tick(&mut state, &TickInput::default(), SIM_DT);

        let events: Vec<_> = state.drain_events().collect();
        assert_eq!(requests(&events), 1);
        assert!(events.contains(&GameEvent::WaveCleared { wave: 1 }));
        assert_eq!(state.wave().state(), WaveState::Active);
        assert_eq!(state.wave().active_enemies(), FORMATION_SIZE);
        assert_eq!(state.active_enemy_count(), FORMATION_SIZE);
        assert_eq!(state.wave().waves_cleared(), 1);
        assert!(state.enemies.iter().all(|e| e.pos == Enemy::home(e.slot())));
    }

    #[test]
    fn test_missed_shot_is_released_and_requests() {
        let mut state = fresh();
        // Left of slot 0, nothing in the column
        state.player.pos.x = 40.0;

        state.fire();
        assert_eq!(state.projectiles.active_count(), 1);

        let mut events = Vec::new();
        let mut ticks = 0;
        while state.projectiles.active_count() > 0 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            events.extend(state.drain_events());
            ticks += 1;
            assert!(ticks < 1000, "projectile never left the world");
        }

        assert!(events.iter().any(|e| matches!(e, GameEvent::ProjectileExpired { .. })));
        assert_eq!(requests(&events), 1);
        assert_eq!(state.wave().active_enemies(), FORMATION_SIZE);
        assert_eq!(state.wave().state(), WaveState::Active);
    }

    #[test]
    fn test_hit_while_leaving_the_top_counts_as_hit() {
        let mut state = fresh();
        // Muzzle at y=-6: the shot ends the tick past the despawn line
        state.player.pos.y = MUZZLE_OFFSET - 6.0;
        state.enemies[5].pos = Vec2::new(PLAYER_START.x, WRAP_TOP_Y);

        assert!(matches!(state.fire(), GateOutcome::Fired(_)));
        tick(&mut state, &TickInput::default(), SIM_DT);

        let events: Vec<_> = state.drain_events().collect();
        assert!(events.contains(&GameEvent::EnemyDestroyed { slot: 5 }));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::ProjectileExpired { .. })));
        assert_eq!(requests(&events), 1);
        assert_eq!(state.projectiles.active_count(), 0);
        assert!(!state.enemies[5].active);
    }

    #[test]
    fn test_answer_after_pool_exhausted() {
        let mut state = fresh();
        while state.projectiles.acquire(Vec2::new(40.0, 300.0)).is_some() {}

        assert_eq!(state.fire(), GateOutcome::PoolExhausted);
        assert_eq!(requests(state.pending_events()), 1);
        assert_eq!(state.projectiles.active_count(), POOL_CAPACITY);
    }

    #[test]
    fn test_skip_spawns_nothing() {
        let mut state = fresh();
        assert_eq!(state.skip(), GateOutcome::Skipped);
        assert_eq!(state.projectiles.active_count(), 0);
        assert_eq!(requests(state.pending_events()), 1);
    }

    #[test]
    fn test_bottom_crossing_enemy_wraps_and_stays_active() {
        let mut state = fresh();
        state.enemies[2].pos.y = WORLD_HEIGHT;

        tick(&mut state, &TickInput::default(), SIM_DT);

        let enemy = &state.enemies[2];
        assert!(enemy.active);
        assert_eq!(enemy.pos.y, WRAP_TOP_Y);
        assert!(enemy.pos.x >= 0.0 && enemy.pos.x <= WORLD_WIDTH);
        assert_eq!(state.wave().active_enemies(), FORMATION_SIZE);
    }
}
