//! Commands from the presentation layer
//!
//! Button presses and window events arrive as values instead of callbacks, so
//! they can be queued and applied between ticks.

use serde::{Deserialize, Serialize};

use super::economy::Upgrade;
use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Purchase { upgrade: Upgrade },
    ToggleBoss,
    /// The play area changed size; balls restart
    Resize { width: f32, height: f32 },
}

impl GameState {
    /// Apply a single command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Purchase { upgrade } => {
                self.purchase(upgrade);
            }
            Command::ToggleBoss => self.toggle_boss(),
            Command::Resize { width, height } => self.resize(width, height),
        }
    }
}
