//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Randomness only from the seeded RNG, and only when populating obstacles
//! - Entities read shared values from a per-frame `FrameContext`
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod field;
pub mod obstacle;
pub mod player;
pub mod scale;
pub mod state;
pub mod tick;

pub use clock::SimulationClock;
pub use collision::{Circle, circles_collide};
pub use field::{FieldReport, ObstacleField};
pub use obstacle::Obstacle;
pub use player::{Player, PlayerState};
pub use scale::{ScalingContext, Viewport};
pub use state::{FrameContext, GameEvent, Outcome, OutcomeKind, Session};
pub use tick::{Command, GameLoopController, step};
