//! Gearflight - a side-scrolling arcade flight simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `renderer`: Draw list assembly for the host's renderer
//! - `tuning`: Data-driven game balance
//! - `settings`: Host-facing configuration

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{Result, SimError};
pub use settings::Settings;
pub use tuning::Tuning;

/// Baseline constants, expressed at `ratio == 1.0` (a 720 px tall viewport)
pub mod consts {
    /// Viewport height every size and speed is scaled against
    pub const BASE_HEIGHT: f32 = 720.0;

    /// Obstacles spawned per session
    pub const OBSTACLE_COUNT: usize = 10;
    /// Horizontal gap between consecutive obstacles
    pub const OBSTACLE_SPACING: f32 = 600.0;
    /// Obstacle sprite edge length
    pub const OBSTACLE_SPRITE_SIZE: f32 = 120.0;
    /// Collision radius as a fraction of the scaled obstacle width
    pub const OBSTACLE_COLLISION_FACTOR: f32 = 0.3;
    /// Vertical bounce speed (per frame)
    pub const OBSTACLE_BOUNCE_SPEED: f32 = 1.0;
    /// Downward velocity gained per frame once the session is over
    pub const WRECK_DRIFT: f32 = 0.1;
    /// Sprite sheet columns for the obstacle animation
    pub const OBSTACLE_FRAMES: u32 = 4;

    /// Gravity per frame
    pub const GRAVITY: f32 = 0.15;
    /// Base horizontal scroll speed per frame
    pub const BASE_SPEED: f32 = 2.0;
    /// Top speed as a multiple of the base speed
    pub const MAX_SPEED_MULTIPLE: f32 = 5.0;
    /// Scroll speed change per frame while accelerating toward max
    pub const SPEED_ACCEL: f32 = 0.5;
    /// Scroll speed change per frame while easing back to min
    pub const SPEED_DECAY: f32 = 0.1;

    /// Player sprite edge length
    pub const PLAYER_SPRITE_SIZE: f32 = 200.0;
    /// Player's fixed horizontal position
    pub const PLAYER_X: f32 = 20.0;
    pub const PLAYER_COLLISION_RADIUS: f32 = 40.0;
    /// Vertical velocity a fresh player starts with (negative is up)
    pub const PLAYER_START_VELOCITY: f32 = -8.0;
    /// Upward speed set by a flap
    pub const FLAP_SPEED: f32 = 5.0;
    /// Minimum upward speed held while charging
    pub const CHARGE_LIFT: f32 = 1.0;

    pub const INITIAL_ENERGY: u32 = 30;
    pub const MIN_ENERGY: u32 = 15;
    pub const MAX_ENERGY: u32 = 60;
    /// Energy spent per charging frame
    pub const CHARGE_DRAIN: u32 = 1;
    /// Frames between +1 energy while not charging
    pub const ENERGY_REGEN_FRAMES: u32 = 10;

    /// Periodic tick interval (ms)
    pub const EVENT_INTERVAL_MS: f64 = 150.0;
    /// Largest frame delta accepted from the host (ms)
    pub const MAX_FRAME_DELTA_MS: f64 = 1000.0;
}

/// Format a millisecond timer as seconds with one decimal place
#[inline]
pub fn format_seconds(timer_ms: f64) -> String {
    format!("{:.1}", timer_ms * 0.001)
}
