//! Host-facing settings
//!
//! Passed into the game loop explicitly; nothing here is global.

use serde::{Deserialize, Serialize};

/// Seed used when the host does not supply one
pub const DEFAULT_SEED: u64 = 0x6EA2_F11E;

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw collision circles for the player and every obstacle
    pub debug: bool,
    /// Seed for obstacle placement
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            seed: DEFAULT_SEED,
        }
    }
}

impl Settings {
    /// Settings with the given seed and debug overlay off
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn toggle_debug(&mut self) {
        self.debug = !self.debug;
        log::info!("Debug overlay: {}", self.debug);
    }
}
