//! Upgrade purchases
//!
//! Each upgrade bumps one default value (or adds a ball) and multiplies its
//! own cost by a fixed growth factor. Purchases that can't be afforded are
//! silently ignored.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// The seven purchasable upgrades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Upgrade {
    AddBall,
    Speed,
    FloorReward,
    WallReward,
    StarRate,
    JumpChance,
    Attack,
}

impl Upgrade {
    pub const COUNT: usize = 7;

    /// Panel order
    pub const ALL: [Upgrade; Upgrade::COUNT] = [
        Upgrade::AddBall,
        Upgrade::Speed,
        Upgrade::FloorReward,
        Upgrade::WallReward,
        Upgrade::StarRate,
        Upgrade::JumpChance,
        Upgrade::Attack,
    ];

    /// Slot in the cost arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        match self {
            Upgrade::AddBall => "add_ball",
            Upgrade::Speed => "speed",
            Upgrade::FloorReward => "floor_reward",
            Upgrade::WallReward => "wall_reward",
            Upgrade::StarRate => "star_rate",
            Upgrade::JumpChance => "jump_chance",
            Upgrade::Attack => "attack",
        }
    }

    pub fn from_id(s: &str) -> Option<Self> {
        Upgrade::ALL.into_iter().find(|u| u.id() == s)
    }

    /// Current value this upgrade improves, formatted for the panel
    pub fn level_text(self, state: &GameState) -> String {
        match self {
            Upgrade::AddBall => state.balls.len().to_string(),
            Upgrade::Speed => format!("{}", state.default_speed.round()),
            Upgrade::FloorReward => state.default_floor_reward.to_string(),
            Upgrade::WallReward => state.default_wall_reward.to_string(),
            Upgrade::StarRate => format!("{}s", state.star_interval),
            Upgrade::JumpChance => {
                let percent = (state.super_jump_chance * 100.0 * 100.0).round() / 100.0;
                format!("{percent}%")
            }
            Upgrade::Attack => state.default_attack.to_string(),
        }
    }
}

impl GameState {
    /// Current cost of an upgrade
    pub fn cost(&self, upgrade: Upgrade) -> f64 {
        self.costs[upgrade.index()]
    }

    /// Could this upgrade be bought right now?
    pub fn can_purchase(&self, upgrade: Upgrade) -> bool {
        if self.currency < self.cost(upgrade) {
            return false;
        }
        match upgrade {
            Upgrade::StarRate => self.star_interval > 1,
            _ => true,
        }
    }

    /// Buy an upgrade if affordable. Returns whether anything happened.
    pub fn purchase(&mut self, upgrade: Upgrade) -> bool {
        if !self.can_purchase(upgrade) {
            return false;
        }

        let i = upgrade.index();
        // Halves round to even. Currency only ever moves in whole amounts, so
        // this can't go below zero; the clamp covers fractional balances set
        // from outside.
        self.currency = (self.currency - self.costs[i].round_ties_even()).max(0.0);

        match upgrade {
            Upgrade::AddBall => self.spawn_ball(),
            Upgrade::Speed => self.default_speed += 1.0,
            Upgrade::FloorReward => self.default_floor_reward += 1,
            Upgrade::WallReward => self.default_wall_reward += 1,
            Upgrade::StarRate => self.star_interval -= 1,
            Upgrade::JumpChance => self.super_jump_chance += self.super_jump_step,
            Upgrade::Attack => self.default_attack += 1,
        }

        self.costs[i] *= self.growth[i];
        self.stats.purchases += 1;
        log::debug!(
            "Bought {} (next cost {:.1}, gold left {})",
            upgrade.id(),
            self.costs[i],
            self.currency
        );
        true
    }

    /// Turn the boss encounter on or off; turning it off drops any live boss
    pub fn toggle_boss(&mut self) {
        self.boss_enabled = !self.boss_enabled;
        if !self.boss_enabled {
            self.boss = None;
        }
    }

    /// Cheapest upgrade that can be bought right now
    pub fn cheapest_affordable(&self) -> Option<Upgrade> {
        Upgrade::ALL
            .into_iter()
            .filter(|u| self.can_purchase(*u))
            .min_by(|a, b| {
                self.cost(*a)
                    .partial_cmp(&self.cost(*b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_ball_without_gold_is_noop() {
        let mut state = GameState::new(1);
        assert!(!state.purchase(Upgrade::AddBall));
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.currency, 0.0);
        assert_eq!(state.cost(Upgrade::AddBall), 10.0);
    }

    #[test]
    fn test_add_ball_purchase() {
        let mut state = GameState::new(1);
        state.currency = 10.0;
        assert!(state.purchase(Upgrade::AddBall));
        assert_eq!(state.currency, 0.0);
        assert_eq!(state.balls.len(), 2);
        assert_eq!(state.cost(Upgrade::AddBall), 15.0);
    }

    #[test]
    fn test_effects() {
        let mut state = GameState::new(1);
        state.currency = 10_000.0;

        state.purchase(Upgrade::Speed);
        state.purchase(Upgrade::FloorReward);
        state.purchase(Upgrade::WallReward);
        state.purchase(Upgrade::StarRate);
        state.purchase(Upgrade::JumpChance);
        state.purchase(Upgrade::Attack);

        assert_eq!(state.default_speed, 5.0);
        assert_eq!(state.default_floor_reward, 2);
        assert_eq!(state.default_wall_reward, 3);
        assert_eq!(state.star_interval, 29);
        assert!((state.super_jump_chance - 0.0011).abs() < 1e-12);
        assert_eq!(state.default_attack, 2);
        assert_eq!(state.currency, 10_000.0 - (30.0 + 10.0 + 8.0 + 100.0 + 200.0 + 25.0));
        assert_eq!(state.stats.purchases, 6);
    }

    #[test]
    fn test_existing_balls_keep_their_stats() {
        let mut state = GameState::new(1);
        state.currency = 100.0;
        state.purchase(Upgrade::FloorReward);
        assert_eq!(state.balls[0].floor_reward, 1);
        state.purchase(Upgrade::AddBall);
        assert_eq!(state.balls[1].floor_reward, 2);
    }

    #[test]
    fn test_star_rate_stops_at_one_second() {
        let mut state = GameState::new(1);
        state.star_interval = 1;
        state.currency = 1_000.0;
        assert!(!state.purchase(Upgrade::StarRate));
        assert_eq!(state.star_interval, 1);
        assert_eq!(state.currency, 1_000.0);
        assert_eq!(state.cost(Upgrade::StarRate), 100.0);
    }

    #[test]
    fn test_deducts_rounded_cost() {
        let mut state = GameState::new(1);
        state.currency = 100.0;
        state.purchase(Upgrade::WallReward);
        // 8 * 1.2 = 9.6 rounds up to 10
        state.purchase(Upgrade::WallReward);
        assert_eq!(state.currency, 100.0 - 8.0 - 10.0);
    }

    #[test]
    fn test_half_cost_rounds_to_even() {
        let mut state = GameState::new(1);
        state.currency = 1_000.0;
        state.purchase(Upgrade::AddBall);
        state.purchase(Upgrade::AddBall);
        assert_eq!(state.cost(Upgrade::AddBall), 22.5);

        let before = state.currency;
        assert!(state.purchase(Upgrade::AddBall));
        assert_eq!(before - state.currency, 22.0);
        assert_eq!(state.currency, 1_000.0 - 10.0 - 15.0 - 22.0);
    }

    #[test]
    fn test_toggle_boss_removes_boss() {
        let mut state = GameState::new(1);
        state.toggle_boss();
        assert!(state.boss_enabled);
        state.spawn_boss();
        assert!(state.boss.is_some());

        state.toggle_boss();
        assert!(!state.boss_enabled);
        assert!(state.boss.is_none());
    }

    #[test]
    fn test_ids_round_trip() {
        for upgrade in Upgrade::ALL {
            assert_eq!(Upgrade::from_id(upgrade.id()), Some(upgrade));
        }
        assert_eq!(Upgrade::from_id("boss"), None);
    }

    #[test]
    fn test_level_text() {
        let state = GameState::new(1);
        assert_eq!(Upgrade::AddBall.level_text(&state), "1");
        assert_eq!(Upgrade::Speed.level_text(&state), "4");
        assert_eq!(Upgrade::StarRate.level_text(&state), "30s");
        assert_eq!(Upgrade::JumpChance.level_text(&state), "0.1%");
    }

    #[test]
    fn test_cheapest_affordable() {
        let mut state = GameState::new(1);
        assert_eq!(state.cheapest_affordable(), None);
        state.currency = 9.0;
        assert_eq!(state.cheapest_affordable(), Some(Upgrade::WallReward));
    }

    fn any_upgrade() -> impl Strategy<Value = Upgrade> {
        (0..Upgrade::COUNT).prop_map(|i| Upgrade::ALL[i])
    }

    proptest! {
        #[test]
        fn prop_unaffordable_purchase_changes_nothing(upgrade in any_upgrade(), short in 0.01f64..10.0) {
            let mut state = GameState::new(5);
            state.currency = (state.cost(upgrade) - short).max(0.0);
            let before_currency = state.currency;
            let before_costs = state.costs;
            let before_balls = state.balls.clone();

            prop_assert!(!state.purchase(upgrade));
            prop_assert_eq!(state.currency, before_currency);
            prop_assert_eq!(state.costs, before_costs);
            prop_assert_eq!(state.balls, before_balls);
            prop_assert_eq!(state.default_speed, 4.0);
            prop_assert_eq!(state.star_interval, 30);
        }

        #[test]
        fn prop_cost_grows_geometrically(upgrade in any_upgrade(), n in 0u32..12) {
            let mut state = GameState::new(5);
            let initial = state.cost(upgrade);
            let growth = state.growth[upgrade.index()];
            for _ in 0..n {
                state.currency = state.cost(upgrade).ceil();
                prop_assert!(state.purchase(upgrade));
                prop_assert!(state.currency >= 0.0);
            }
            let expected = initial * growth.powi(n as i32);
            prop_assert!((state.cost(upgrade) - expected).abs() <= expected * 1e-9);
        }
    }
}
