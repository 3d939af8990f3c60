//! Fixed-rate session driver
//!
//! Turns variable frame deltas into fixed simulation ticks and a slower HUD
//! refresh, applying queued commands between frames.

use crate::consts::*;
use crate::hud::HudSnapshot;
use crate::sim::{Command, GameState, advance};
use crate::tuning::Tuning;

/// A running game plus its clocks
pub struct Session {
    pub state: GameState,
    /// Buy the cheapest affordable upgrade after every tick
    pub autopilot: bool,
    accumulator: f32,
    hud_accumulator: f32,
    pending: Vec<Command>,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::from_state(GameState::new(seed))
    }

    pub fn with_tuning(seed: u64, tuning: &Tuning) -> Self {
        Self::from_state(GameState::with_tuning(seed, tuning))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            autopilot: false,
            accumulator: 0.0,
            hud_accumulator: 0.0,
            pending: Vec::new(),
        }
    }

    /// Queue a command for the start of the next update
    pub fn push(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Advance by one frame's worth of wall time
    ///
    /// Returns a fresh HUD snapshot when the refresh interval has elapsed.
    pub fn update(&mut self, frame_dt: f32) -> Option<HudSnapshot> {
        // A NaN frame would poison the accumulators for good
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };

        for command in self.pending.drain(..) {
            self.state.apply(command);
        }

        self.accumulator += frame_dt;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            advance(&mut self.state, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            if self.autopilot {
                self.autobuy();
            }
        }
        // Drop time we couldn't catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        self.hud_accumulator += frame_dt;
        if self.hud_accumulator >= HUD_DT {
            self.hud_accumulator %= HUD_DT;
            Some(HudSnapshot::capture(&self.state))
        } else {
            None
        }
    }

    /// Run ticks back to back for the given simulated time, skipping the HUD
    pub fn run_for(&mut self, seconds: f32) {
        let ticks = (seconds / SIM_DT).round() as u64;
        for _ in 0..ticks {
            for command in self.pending.drain(..) {
                self.state.apply(command);
            }
            advance(&mut self.state, SIM_DT);
            if self.autopilot {
                self.autobuy();
            }
        }
    }

    fn autobuy(&mut self) {
        while let Some(upgrade) = self.state.cheapest_affordable() {
            self.state.purchase(upgrade);
        }
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::capture(&self.state)
    }
}
