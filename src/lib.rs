//! Bounce Tycoon - an idle game of bouncing balls
//!
//! Core modules:
//! - `sim`: Simulation (entities, physics tick, upgrade economy)
//! - `tuning`: Data-driven starting values and upgrade table
//! - `hud`: Read model the presentation layer polls for display text
//! - `session`: Fixed-rate driver that feeds commands and ticks into `sim`

pub mod hud;
pub mod session;
pub mod sim;
pub mod tuning;

pub use hud::{HudSnapshot, UpgradeEntry};
pub use session::Session;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the session will try to catch up on
    pub const MAX_FRAME_DT: f32 = 0.25;
    /// HUD text refresh interval (30 Hz)
    pub const HUD_DT: f32 = 1.0 / 30.0;

    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 720.0;
    pub const ARENA_HEIGHT: f32 = 760.0;

    /// New balls start at this fraction of the arena height
    pub const BALL_SPAWN_HEIGHT: f32 = 0.35;
    /// Stars appear at this fraction of the arena height
    pub const STAR_SPAWN_HEIGHT: f32 = 0.9;
    /// Star display diameter
    pub const STAR_SIZE: f32 = 25.0;
    /// Falling stars drop at gravity times this
    pub const STAR_FALL_FACTOR: f32 = 3.0;
    /// Vertical distance between a ball's top edge and a star that counts as a catch
    pub const STAR_CATCH_TOLERANCE: f32 = 25.0;
    /// A landed star pays this many default floor rewards
    pub const STAR_REWARD_MULTIPLIER: f64 = 100.0;

    /// Boss spawn height above the floor
    pub const BOSS_SPAWN_Y: f32 = 2.0;
    /// Defeating a boss pays this many (floor + wall) default rewards
    pub const BOSS_REWARD_MULTIPLIER: f64 = 8.0;

    /// Super jumps launch at this multiple of the base jump velocity
    pub const SUPER_JUMP_FACTOR: f32 = 4.0;
    /// Range of the random factor applied to normal jumps and wall bounces
    pub const BOUNCE_JITTER_MIN: f32 = 0.8;
    pub const BOUNCE_JITTER_MAX: f32 = 1.2;
}
