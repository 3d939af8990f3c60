//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Balls processed in insertion order
//! - No rendering or platform dependencies

pub mod collision;
pub mod command;
pub mod economy;
pub mod state;
pub mod tick;

pub use collision::{FLOOR_Y, Wall, WallHit, catches_star, hits_floor, overlaps_boss, wall_hit};
pub use command::Command;
pub use economy::Upgrade;
pub use state::{Arena, Ball, Boss, GameState, Star, Stats};
pub use tick::advance;
