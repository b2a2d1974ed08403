//! Frame-driven simulation module
//!
//! All gameplay logic lives here:
//! - Single-threaded, one tick at a time
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - No rendering or UI dependencies

pub mod collision;
pub mod formation;
pub mod gate;
pub mod pool;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{Aabb, Hit, resolve_collisions};
pub use formation::{advance_formation, spawn_formation, wrap_to_top};
pub use gate::{AnswerGate, AnswerGateState, GateOutcome};
pub use pool::{Projectile, ProjectileFate, ProjectileHandle, ProjectilePool, update_projectile};
pub use state::{Enemy, GameEvent, GameState, Player};
pub use tick::{TickInput, tick};
pub use wave::{WaveController, WaveState};
