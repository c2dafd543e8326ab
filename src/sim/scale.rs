//! Viewport scaling
//!
//! Every size, speed and the gravity constant is a baseline value multiplied
//! by one dimensionless ratio: viewport height over the baseline height.

use serde::Serialize;

use crate::error::{Result, SimError};
use crate::tuning::Tuning;

/// Validated viewport dimensions (finite, strictly positive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SimError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Ratio and the physics constants derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingContext {
    pub base_height: f32,
    pub viewport: Viewport,
    /// `viewport.height / base_height`, always > 0
    pub ratio: f32,
    pub gravity: f32,
    pub base_speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl ScalingContext {
    pub fn new(viewport: Viewport, tuning: &Tuning) -> Self {
        let mut scale = Self {
            base_height: tuning.base_height,
            viewport,
            ratio: 1.0,
            gravity: 0.0,
            base_speed: 0.0,
            min_speed: 0.0,
            max_speed: 0.0,
        };
        scale.recompute(viewport, tuning);
        scale
    }

    /// Derive the ratio and every ratio-dependent constant from a viewport
    pub fn recompute(&mut self, viewport: Viewport, tuning: &Tuning) {
        self.base_height = tuning.base_height;
        self.viewport = viewport;
        self.ratio = viewport.height() / self.base_height;
        self.gravity = tuning.gravity * self.ratio;
        self.base_speed = tuning.base_speed * self.ratio;
        self.min_speed = self.base_speed;
        self.max_speed = self.base_speed * tuning.max_speed_multiple;
    }

    /// Scale a baseline length or speed to the current viewport
    #[inline]
    pub fn scaled(&self, baseline: f32) -> f32 {
        baseline * self.ratio
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.viewport.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.viewport.height()
    }
}
