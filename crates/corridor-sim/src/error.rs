//! Error types for engine configuration.

/// Problems with a `SimConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("time scale must be within [0, {max}], got {value}")]
    InvalidTimeScale { value: f64, max: f64 },

    #[error("frame period must be within (0, {max}] milliseconds, got {value}")]
    InvalidFramePeriod { value: f64, max: f64 },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
