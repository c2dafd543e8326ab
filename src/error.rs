//! Errors raised at the host boundary
//!
//! The simulation step itself never fails; these only come from validating
//! input before it reaches the physics loop.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Viewport dimensions must be finite and strictly positive
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// Tuning JSON could not be parsed
    #[error("malformed tuning config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
