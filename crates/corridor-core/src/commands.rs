//! Player commands sent from the UI to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Steering and firing are not commands: they arrive as an
//! `InputState` snapshot with every tick.

use serde::{Deserialize, Serialize};

/// UI-level actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start the first run from the menu.
    StartGame,
    /// Start a new run after game over.
    Restart,
}
