//! Data-driven game balance
//!
//! Every length and speed here is a baseline value at `ratio == 1.0`; the
//! simulation multiplies them by the current ratio.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};

/// Balance knobs for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub base_height: f32,

    // === Obstacles ===
    pub obstacle_count: usize,
    /// First obstacle offset as a multiple of the scaled base height
    pub first_offset: f32,
    pub obstacle_spacing: f32,
    pub obstacle_sprite_size: f32,
    pub obstacle_collision_factor: f32,
    pub obstacle_bounce_speed: f32,
    pub wreck_drift: f32,
    pub obstacle_frames: u32,

    // === World ===
    pub gravity: f32,
    pub base_speed: f32,
    pub max_speed_multiple: f32,
    pub speed_accel: f32,
    pub speed_decay: f32,

    // === Player ===
    pub player_sprite_size: f32,
    pub player_x: f32,
    pub player_collision_radius: f32,
    pub player_start_velocity: f32,
    pub flap_speed: f32,
    pub charge_lift: f32,
    pub initial_energy: u32,
    pub min_energy: u32,
    pub max_energy: u32,
    pub charge_drain: u32,
    pub energy_regen_frames: u32,

    // === Clock ===
    pub event_interval_ms: f64,
    pub max_frame_delta_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_height: BASE_HEIGHT,

            obstacle_count: OBSTACLE_COUNT,
            first_offset: 1.0,
            obstacle_spacing: OBSTACLE_SPACING,
            obstacle_sprite_size: OBSTACLE_SPRITE_SIZE,
            obstacle_collision_factor: OBSTACLE_COLLISION_FACTOR,
            obstacle_bounce_speed: OBSTACLE_BOUNCE_SPEED,
            wreck_drift: WRECK_DRIFT,
            obstacle_frames: OBSTACLE_FRAMES,

            gravity: GRAVITY,
            base_speed: BASE_SPEED,
            max_speed_multiple: MAX_SPEED_MULTIPLE,
            speed_accel: SPEED_ACCEL,
            speed_decay: SPEED_DECAY,

            player_sprite_size: PLAYER_SPRITE_SIZE,
            player_x: PLAYER_X,
            player_collision_radius: PLAYER_COLLISION_RADIUS,
            player_start_velocity: PLAYER_START_VELOCITY,
            flap_speed: FLAP_SPEED,
            charge_lift: CHARGE_LIFT,
            initial_energy: INITIAL_ENERGY,
            min_energy: MIN_ENERGY,
            max_energy: MAX_ENERGY,
            charge_drain: CHARGE_DRAIN,
            energy_regen_frames: ENERGY_REGEN_FRAMES,

            event_interval_ms: EVENT_INTERVAL_MS,
            max_frame_delta_ms: MAX_FRAME_DELTA_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning ({} obstacles)", tuning.obstacle_count);
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("base_height", self.base_height),
            ("obstacle_sprite_size", self.obstacle_sprite_size),
            ("obstacle_collision_factor", self.obstacle_collision_factor),
            ("base_speed", self.base_speed),
            ("max_speed_multiple", self.max_speed_multiple),
            ("player_sprite_size", self.player_sprite_size),
            ("player_collision_radius", self.player_collision_radius),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidTuning(format!("{name} must be > 0, got {value}")));
            }
        }

        let non_negative = [
            ("first_offset", self.first_offset),
            ("obstacle_spacing", self.obstacle_spacing),
            ("obstacle_bounce_speed", self.obstacle_bounce_speed),
            ("wreck_drift", self.wreck_drift),
            ("gravity", self.gravity),
            ("speed_accel", self.speed_accel),
            ("speed_decay", self.speed_decay),
            ("player_x", self.player_x),
            ("flap_speed", self.flap_speed),
            ("charge_lift", self.charge_lift),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidTuning(format!("{name} must be >= 0, got {value}")));
            }
        }

        if self.obstacle_count == 0 {
            return Err(SimError::InvalidTuning("obstacle_count must be at least 1".into()));
        }
        if self.obstacle_frames == 0 {
            return Err(SimError::InvalidTuning("obstacle_frames must be at least 1".into()));
        }
        if self.min_energy >= self.max_energy {
            return Err(SimError::InvalidTuning(format!(
                "min_energy ({}) must be below max_energy ({})",
                self.min_energy, self.max_energy
            )));
        }
        if self.initial_energy > self.max_energy {
            return Err(SimError::InvalidTuning(format!(
                "initial_energy ({}) exceeds max_energy ({})",
                self.initial_energy, self.max_energy
            )));
        }
        if self.charge_drain == 0 {
            return Err(SimError::InvalidTuning("charge_drain must be at least 1".into()));
        }
        if self.energy_regen_frames == 0 {
            return Err(SimError::InvalidTuning("energy_regen_frames must be at least 1".into()));
        }
        if !(self.event_interval_ms.is_finite() && self.event_interval_ms > 0.0) {
            return Err(SimError::InvalidTuning("event_interval_ms must be > 0".into()));
        }
        if !(self.max_frame_delta_ms.is_finite() && self.max_frame_delta_ms > 0.0) {
            return Err(SimError::InvalidTuning("max_frame_delta_ms must be > 0".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.base_height, 720.0);
        assert_eq!(tuning.obstacle_count, 10);
        assert_eq!(tuning.obstacle_spacing, 600.0);
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "obstacle_count": 3, "max_energy": 40 }"#).unwrap();
        assert_eq!(tuning.obstacle_count, 3);
        assert_eq!(tuning.max_energy, 40);
        assert_eq!(tuning.gravity, GRAVITY);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_inverted_energy_bounds() {
        let tuning = Tuning {
            min_energy: 60,
            max_energy: 20,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(SimError::InvalidTuning(_))));
    }

    #[test]
    fn test_validate_rejects_zero_base_height() {
        let tuning = Tuning {
            base_height: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_drain() {
        let err = Tuning::from_json(r#"{ "charge_drain": 0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning(_)));
    }

    #[test]
    fn test_validate_rejects_empty_field() {
        let err = Tuning::from_json(r#"{ "obstacle_count": 0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidTuning(_)));
    }
}
