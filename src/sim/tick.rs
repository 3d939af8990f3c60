//! Fixed timestep simulation tick
//!
//! Physics is per tick: gravity and velocities are applied once per call
//! regardless of `dt`, which only drives the star spawn timer.

use super::collision::{FLOOR_Y, catches_star, hits_floor, overlaps_boss, wall_hit};
use super::state::GameState;
use crate::consts::*;

/// Advance the game state by one tick
pub fn advance(state: &mut GameState, dt: f32) {
    state.stats.ticks += 1;

    // Star spawn timer
    state.star_timer += dt;
    if state.star_timer >= state.star_interval as f32 {
        state.star_timer = 0.0;
        state.spawn_star();
    }

    // Falling star
    if let Some(star) = state.star.as_mut().filter(|s| s.falling) {
        star.pos.y += state.gravity * STAR_FALL_FACTOR;
        if star.pos.y <= FLOOR_Y {
            let reward = f64::from(state.default_floor_reward) * STAR_REWARD_MULTIPLIER;
            state.currency += reward;
            state.star = None;
            state.stats.stars_collected += 1;
            log::info!("Star landed: +{reward} gold");
        }
    }

    if state.boss_enabled {
        state.spawn_boss();
    }

    // Balls are taken out so the loop can draw from the state's RNG
    let mut balls = std::mem::take(&mut state.balls);
    for ball in &mut balls {
        ball.vel.y += state.gravity;
        ball.pos += ball.vel;

        if hits_floor(ball) {
            ball.pos.y = FLOOR_Y;
            if state.roll_super_jump() {
                ball.vel.y = state.base_jump * SUPER_JUMP_FACTOR;
                ball.super_jump = true;
            } else {
                ball.vel.y = state.base_jump * state.bounce_jitter();
                ball.super_jump = false;
            }
            state.currency += f64::from(ball.floor_reward);
        }

        if let Some(hit) = wall_hit(ball, &state.arena) {
            ball.pos.x = hit.x;
            ball.vel.x *= -state.bounce_jitter();
            state.currency += f64::from(ball.wall_reward);
        }

        if let Some(star) = state.star.as_mut() {
            if catches_star(ball, star) {
                star.falling = true;
            }
        }

        if let Some(boss) = state.boss.as_mut() {
            if overlaps_boss(ball, boss) {
                boss.hp -= i64::from(ball.attack);
                if boss.hp <= 0 {
                    let reward = (f64::from(state.default_floor_reward)
                        + f64::from(state.default_wall_reward))
                        * BOSS_REWARD_MULTIPLIER;
                    state.currency += reward;
                    state.boss_max_hp += state.boss_hp_step;
                    state.boss = None;
                    state.stats.bosses_defeated += 1;
                    log::info!(
                        "Boss defeated: +{reward} gold, next boss has {} hp",
                        state.boss_max_hp
                    );
                }
            }
        }
    }
    state.balls = balls;
}
