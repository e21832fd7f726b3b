//! Engine configuration.

use serde::{Deserialize, Serialize};

use corridor_core::constants::FRAME_MS;

use crate::error::ConfigError;

/// Largest accepted time scale.
pub const MAX_TIME_SCALE: f64 = 4.0;

/// Longest accepted frame period, in milliseconds.
pub const MAX_FRAME_MS: f64 = 1000.0;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    /// Wall-clock speed-up applied by the frame loop (1.0 = normal).
    pub time_scale: f64,
    /// Frame period fed to the engine each tick, in milliseconds.
    pub frame_ms: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            frame_ms: FRAME_MS,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_scale.is_finite() || !(0.0..=MAX_TIME_SCALE).contains(&self.time_scale) {
            return Err(ConfigError::InvalidTimeScale {
                value: self.time_scale,
                max: MAX_TIME_SCALE,
            });
        }
        if !(self.frame_ms > 0.0 && self.frame_ms <= MAX_FRAME_MS) {
            return Err(ConfigError::InvalidFramePeriod {
                value: self.frame_ms,
                max: MAX_FRAME_MS,
            });
        }
        Ok(())
    }
}
