//! Math Invaders - an arcade shooter where every shot is earned by answering arithmetic
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, projectile pool, collisions, waves, answer gate)
//! - `question`: Arithmetic question generation
//! - `ui`: Answer panel that turns a selection into a verdict
//! - `session`: One-shot lifecycle owner wiring the loop to the question subsystem
//! - `settings` / `tuning`: Data-driven configuration

pub mod error;
pub mod question;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::{QuestionError, SessionError, SettingsError};
pub use question::{AdditionQuestions, Question, QuestionSource};
pub use session::{QuestionSink, Session};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep used by the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Frame length the formation speed is expressed against
    pub const REFERENCE_FRAME_MS: f32 = 16.66;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_START: Vec2 = Vec2::new(400.0, 550.0);
    pub const PLAYER_SIZE: Vec2 = Vec2::new(50.0, 30.0);
    pub const PLAYER_SPEED: f32 = 200.0;
    /// Projectiles spawn this far above the player's center
    pub const MUZZLE_OFFSET: f32 = 20.0;

    /// Enemy formation
    pub const FORMATION_SIZE: usize = 10;
    pub const FORMATION_BASE_X: f32 = 100.0;
    pub const FORMATION_SPACING: f32 = 60.0;
    pub const FORMATION_TOP_Y: f32 = 50.0;
    pub const ENEMY_SIZE: Vec2 = Vec2::new(30.0, 20.0);
    /// Descent per reference frame (pixels)
    pub const ENEMY_BASE_SPEED: f32 = 0.5;
    /// Row a wrapped enemy re-enters on
    pub const WRAP_TOP_Y: f32 = 0.0;
    /// Wrapped enemies keep this distance from the side walls
    pub const WRAP_MARGIN_X: f32 = 50.0;

    /// Projectile pool
    pub const POOL_CAPACITY: usize = 10;
    pub const PROJECTILE_SIZE: Vec2 = Vec2::new(5.0, 15.0);
    pub const PROJECTILE_SPEED: f32 = 300.0;
    /// Projectiles above this line are off-screen
    pub const PROJECTILE_DESPAWN_Y: f32 = -10.0;
}
