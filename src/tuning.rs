//! Data-driven game balance
//!
//! Every starting value the simulation reads lives here. `Tuning::default()`
//! is the shipped balance; a JSON file can override any subset of it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::Upgrade;

/// Largest starting floor or wall reward a tuning file may set
pub const MAX_REWARD: u32 = 1_000_000;

/// Starting cost and per-purchase growth of one upgrade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpgradeTuning {
    pub initial_cost: f64,
    pub growth: f64,
}

impl UpgradeTuning {
    pub const fn new(initial_cost: f64, growth: f64) -> Self {
        Self { initial_cost, growth }
    }
}

/// Cost table for all seven upgrades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeTable {
    pub add_ball: UpgradeTuning,
    pub speed: UpgradeTuning,
    pub floor_reward: UpgradeTuning,
    pub wall_reward: UpgradeTuning,
    pub star_rate: UpgradeTuning,
    pub jump_chance: UpgradeTuning,
    pub attack: UpgradeTuning,
}

impl Default for UpgradeTable {
    fn default() -> Self {
        Self {
            add_ball: UpgradeTuning::new(10.0, 1.5),
            speed: UpgradeTuning::new(30.0, 1.3),
            floor_reward: UpgradeTuning::new(10.0, 1.2),
            wall_reward: UpgradeTuning::new(8.0, 1.2),
            star_rate: UpgradeTuning::new(100.0, 2.1),
            jump_chance: UpgradeTuning::new(200.0, 1.9),
            attack: UpgradeTuning::new(25.0, 1.6),
        }
    }
}

impl UpgradeTable {
    pub fn get(&self, upgrade: Upgrade) -> UpgradeTuning {
        match upgrade {
            Upgrade::AddBall => self.add_ball,
            Upgrade::Speed => self.speed,
            Upgrade::FloorReward => self.floor_reward,
            Upgrade::WallReward => self.wall_reward,
            Upgrade::StarRate => self.star_rate,
            Upgrade::JumpChance => self.jump_chance,
            Upgrade::Attack => self.attack,
        }
    }
}

/// Starting values for a new game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to every ball's vertical velocity each tick (negative = down)
    pub gravity: f32,
    /// Vertical launch velocity of a normal floor bounce
    pub base_jump: f32,
    pub floor_reward: u32,
    pub wall_reward: u32,
    /// Horizontal speed given to new balls
    pub ball_speed: f32,
    pub attack: u32,
    pub ball_size: f32,

    /// Seconds between star spawns
    pub star_interval: u32,
    pub super_jump_chance: f64,
    /// Added to the super-jump chance per jump_chance purchase
    pub super_jump_step: f64,

    pub boss_size: f32,
    pub boss_base_hp: i64,
    /// Added to the boss hp baseline after each defeat
    pub boss_hp_step: i64,

    pub upgrades: UpgradeTable,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: -0.3,
            base_jump: 8.0,
            floor_reward: 1,
            wall_reward: 2,
            ball_speed: 4.0,
            attack: 1,
            ball_size: 30.0,
            star_interval: 30,
            super_jump_chance: 0.001,
            super_jump_step: 0.0001,
            boss_size: 80.0,
            boss_base_hp: 100,
            boss_hp_step: 50,
            upgrades: UpgradeTable::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning file; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(TuningError::Parse)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the values can drive a sane simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.gravity < 0.0) {
            return Err(TuningError::invalid("gravity", "must be negative"));
        }
        if !(self.base_jump > 0.0) {
            return Err(TuningError::invalid("base_jump", "must be positive"));
        }
        if !(self.ball_size > 0.0) {
            return Err(TuningError::invalid("ball_size", "must be positive"));
        }
        if !(self.boss_size > 0.0) {
            return Err(TuningError::invalid("boss_size", "must be positive"));
        }
        if self.star_interval < 1 {
            return Err(TuningError::invalid("star_interval", "must be at least 1 second"));
        }
        if !(0.0..=1.0).contains(&self.super_jump_chance) {
            return Err(TuningError::invalid("super_jump_chance", "must be within [0, 1]"));
        }
        if !(self.super_jump_step >= 0.0 && self.super_jump_step.is_finite()) {
            return Err(TuningError::invalid("super_jump_step", "must not be negative"));
        }
        if self.floor_reward > MAX_REWARD {
            return Err(TuningError::invalid("floor_reward", "must be at most 1000000"));
        }
        if self.wall_reward > MAX_REWARD {
            return Err(TuningError::invalid("wall_reward", "must be at most 1000000"));
        }
        if self.boss_base_hp < 1 {
            return Err(TuningError::invalid("boss_base_hp", "must be at least 1"));
        }
        if self.boss_hp_step < 0 {
            return Err(TuningError::invalid("boss_hp_step", "must not be negative"));
        }
        for upgrade in Upgrade::ALL {
            let entry = self.upgrades.get(upgrade);
            // Anything cheaper rounds to a free purchase
            if !(entry.initial_cost >= 1.0) {
                return Err(TuningError::invalid(upgrade.id(), "initial_cost must be at least 1"));
            }
            if !(entry.growth >= 1.0) {
                return Err(TuningError::invalid(upgrade.id(), "growth must be at least 1"));
            }
        }
        Ok(())
    }
}

/// Why a tuning file was rejected
#[derive(Debug)]
pub enum TuningError {
    /// The JSON could not be parsed
    Parse(serde_json::Error),
    /// A value is outside its usable range
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl TuningError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        TuningError::Invalid { field, reason }
    }
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(err) => write!(f, "tuning parse error: {err}"),
            TuningError::Invalid { field, reason } => {
                write!(f, "invalid tuning value `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(err) => Some(err),
            TuningError::Invalid { .. } => None,
        }
    }
}
