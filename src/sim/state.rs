//! Game state and core simulation types
//!
//! Arena-local coordinates: the floor line is `y = 0` and `y` grows upward.
//! Velocities are in units per tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::economy::Upgrade;
use crate::consts::*;
use crate::tuning::Tuning;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Bottom-left corner of the ball's bounding square
    pub pos: Vec2,
    pub vel: Vec2,
    pub floor_reward: u32,
    pub wall_reward: u32,
    pub attack: u32,
    /// Set by a super jump, cleared by the next normal bounce
    pub super_jump: bool,
    /// Diameter
    pub size: f32,
}

/// The collectible star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    /// Knocked loose by a super-jumping ball, drops to the floor
    pub falling: bool,
    /// Display diameter
    pub size: f32,
}

impl Star {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            falling: false,
            size: STAR_SIZE,
        }
    }
}

/// The boss block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub pos: Vec2,
    pub hp: i64,
    pub max_hp: i64,
    pub size: f32,
}

impl Boss {
    pub fn new(pos: Vec2, max_hp: i64, size: f32) -> Self {
        Self {
            pos,
            hp: max_hp,
            max_hp,
            size,
        }
    }
}

/// Playfield bounds; the floor sits at `y = 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// Running totals for the session summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub ticks: u64,
    pub stars_collected: u32,
    pub bosses_defeated: u32,
    pub purchases: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub arena: Arena,

    pub gravity: f32,
    pub base_jump: f32,
    pub default_floor_reward: u32,
    pub default_wall_reward: u32,
    pub default_speed: f32,
    pub default_attack: u32,
    pub ball_size: f32,

    /// Gold (fractional internally, shown as an integer)
    pub currency: f64,
    /// Current cost of each upgrade, indexed by `Upgrade::index`
    pub costs: [f64; Upgrade::COUNT],
    /// Cost multipliers applied after each purchase, indexed like `costs`
    pub growth: [f64; Upgrade::COUNT],

    /// Seconds between star spawns
    pub star_interval: u32,
    /// Seconds since the last star spawn check fired
    pub star_timer: f32,
    pub super_jump_chance: f64,
    pub super_jump_step: f64,

    pub boss_enabled: bool,
    /// Hp given to the next boss
    pub boss_max_hp: i64,
    pub boss_hp_step: i64,
    pub boss_size: f32,

    /// Active balls (insertion order is tick order)
    pub balls: Vec<Ball>,
    pub star: Option<Star>,
    pub boss: Option<Boss>,

    pub stats: Stats,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, &Tuning::default())
    }

    /// Create a new game from the given tuning, seeded for reproducibility
    pub fn with_tuning(seed: u64, tuning: &Tuning) -> Self {
        let mut costs = [0.0; Upgrade::COUNT];
        let mut growth = [1.0; Upgrade::COUNT];
        for upgrade in Upgrade::ALL {
            let entry = tuning.upgrades.get(upgrade);
            costs[upgrade.index()] = entry.initial_cost;
            growth[upgrade.index()] = entry.growth;
        }

        let mut state = Self {
            seed,
            arena: Arena::default(),
            gravity: tuning.gravity,
            base_jump: tuning.base_jump,
            default_floor_reward: tuning.floor_reward,
            default_wall_reward: tuning.wall_reward,
            default_speed: tuning.ball_speed,
            default_attack: tuning.attack,
            ball_size: tuning.ball_size,
            currency: 0.0,
            costs,
            growth,
            star_interval: tuning.star_interval,
            star_timer: 0.0,
            super_jump_chance: tuning.super_jump_chance,
            super_jump_step: tuning.super_jump_step,
            boss_enabled: false,
            boss_max_hp: tuning.boss_base_hp,
            boss_hp_step: tuning.boss_hp_step,
            boss_size: tuning.boss_size,
            balls: Vec::new(),
            star: None,
            boss: None,
            stats: Stats::default(),
            rng: Pcg32::seed_from_u64(seed),
        };

        state.reset_balls();
        state
    }

    /// Build a ball from the current defaults
    ///
    /// Starts centered at a third of the arena height, heading left or right
    /// at the default speed and jumping upward.
    pub fn create_ball(&mut self) -> Ball {
        let direction = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Ball {
            pos: Vec2::new(self.arena.width / 2.0, self.arena.height * BALL_SPAWN_HEIGHT),
            vel: Vec2::new(direction * self.default_speed, self.base_jump),
            floor_reward: self.default_floor_reward,
            wall_reward: self.default_wall_reward,
            attack: self.default_attack,
            super_jump: false,
            size: self.ball_size,
        }
    }

    /// Append a freshly built ball
    pub fn spawn_ball(&mut self) {
        let ball = self.create_ball();
        self.balls.push(ball);
    }

    /// Replace every ball with a single fresh one
    pub fn reset_balls(&mut self) {
        let ball = self.create_ball();
        self.balls = vec![ball];
    }

    /// Change the arena bounds; balls restart from a single fresh ball
    ///
    /// Width is kept at least one ball wide so wall clamping stays inside the arena.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena = Arena {
            width: width.max(self.ball_size),
            height: height.max(0.0),
        };
        self.reset_balls();
        log::debug!("Arena resized to {}x{}", self.arena.width, self.arena.height);
    }

    /// Spawn a star near the top center, unless one is already out
    pub fn spawn_star(&mut self) {
        if self.star.is_none() {
            self.star = Some(Star::new(Vec2::new(
                self.arena.width / 2.0,
                self.arena.height * STAR_SPAWN_HEIGHT,
            )));
        }
    }

    /// Spawn a boss on the floor at the center, unless one is already out
    pub fn spawn_boss(&mut self) {
        if self.boss.is_none() {
            let pos = Vec2::new(self.arena.width / 2.0 - self.boss_size / 2.0, BOSS_SPAWN_Y);
            self.boss = Some(Boss::new(pos, self.boss_max_hp, self.boss_size));
            log::info!("Boss spawned with {} hp", self.boss_max_hp);
        }
    }

    /// Random factor for bounce speeds
    pub(crate) fn bounce_jitter(&mut self) -> f32 {
        self.rng.random_range(BOUNCE_JITTER_MIN..=BOUNCE_JITTER_MAX)
    }

    /// Roll for a super jump
    pub(crate) fn roll_super_jump(&mut self) -> bool {
        self.rng.random::<f64>() < self.super_jump_chance
    }
}
