//! Boundary and entity contact checks
//!
//! Everything here is pure: the tick decides what a contact is worth.

use super::state::{Arena, Ball, Boss, Star};
use crate::consts::STAR_CATCH_TOLERANCE;

/// Floor line height
pub const FLOOR_Y: f32 = 0.0;

/// Which side wall a ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
}

/// Result of a wall check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    pub wall: Wall,
    /// Position the ball is clamped back to
    pub x: f32,
}

/// Has the ball reached or passed the floor line?
#[inline]
pub fn hits_floor(ball: &Ball) -> bool {
    ball.pos.y <= FLOOR_Y
}

/// Check the side walls; the left wall wins if both are touched
pub fn wall_hit(ball: &Ball, arena: &Arena) -> Option<WallHit> {
    if ball.pos.x <= 0.0 {
        Some(WallHit {
            wall: Wall::Left,
            x: 0.0,
        })
    } else if ball.pos.x >= arena.width - ball.size {
        Some(WallHit {
            wall: Wall::Right,
            x: arena.width - ball.size,
        })
    } else {
        None
    }
}

/// A super-jumping ball whose top edge is level with a hanging star knocks it loose
pub fn catches_star(ball: &Ball, star: &Star) -> bool {
    !star.falling
        && ball.super_jump
        && (ball.pos.y + ball.size - star.pos.y).abs() < STAR_CATCH_TOLERANCE
}

/// Is the ball within the boss's size on both axes?
pub fn overlaps_boss(ball: &Ball, boss: &Boss) -> bool {
    (ball.pos.x - boss.pos.x).abs() < boss.size && (ball.pos.y - boss.pos.y).abs() < boss.size
}
