//! HUD read model
//!
//! What the presentation layer shows as text: the gold counter and one panel
//! entry per upgrade. Rendering and localization stay on the other side.

use serde::Serialize;

use crate::sim::{GameState, Upgrade};

/// One upgrade button's worth of state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpgradeEntry {
    pub upgrade: Upgrade,
    /// Current value being upgraded, e.g. `"4"`, `"30s"`, `"0.1%"`
    pub level: String,
    /// Cost rounded to whole gold, halves to even
    pub cost: u64,
    pub affordable: bool,
}

/// Display snapshot polled at the HUD refresh rate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub gold: u64,
    pub ball_count: usize,
    pub upgrades: Vec<UpgradeEntry>,
    pub boss_enabled: bool,
    /// Remaining hp of the live boss, if any
    pub boss_hp: Option<(i64, i64)>,
}

impl HudSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let upgrades = Upgrade::ALL
            .into_iter()
            .map(|upgrade| UpgradeEntry {
                upgrade,
                level: upgrade.level_text(state),
                cost: state.cost(upgrade).round_ties_even() as u64,
                affordable: state.can_purchase(upgrade),
            })
            .collect();

        Self {
            gold: state.currency as u64,
            ball_count: state.balls.len(),
            upgrades,
            boss_enabled: state.boss_enabled,
            boss_hp: state.boss.as_ref().map(|b| (b.hp, b.max_hp)),
        }
    }

    pub fn entry(&self, upgrade: Upgrade) -> Option<&UpgradeEntry> {
        self.upgrades.iter().find(|e| e.upgrade == upgrade)
    }
}
