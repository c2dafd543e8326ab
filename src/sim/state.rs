//! Session state and core simulation types
//!
//! A `Session` owns everything one run needs. It is rebuilt wholesale on
//! resize or restart, never patched in place.

use rand::Rng;
use serde::Serialize;

use super::clock::SimulationClock;
use super::field::ObstacleField;
use super::player::Player;
use super::scale::{ScalingContext, Viewport};
use crate::tuning::Tuning;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutcomeKind {
    /// The player struck an obstacle
    Collision,
    /// Every obstacle scrolled past
    Cleared,
}

/// Terminal result, with the timer frozen at the moment it happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    /// Elapsed play time (ms)
    pub time_ms: f64,
}

/// Things that happened during the last step, for audio and effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    Flap,
    ChargeStarted,
    ChargeStopped,
    /// One obstacle left the screen and was scored
    ObstacleCleared,
    Collision,
    FieldCleared,
    /// The periodic clock tick fired
    Tick,
}

/// Read-only view of shared state for one frame of entity updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Horizontal scroll speed this frame
    pub speed: f32,
    /// Viewport height (bottom boundary)
    pub height: f32,
    pub gravity: f32,
    /// Downward velocity obstacles gain per frame after game over
    pub wreck_drift: f32,
    pub game_over: bool,
}

/// Complete state of one run
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub scale: ScalingContext,
    pub player: Player,
    pub field: ObstacleField,
    pub clock: SimulationClock,
    pub outcome: Option<Outcome>,
    /// Events from the most recent step
    pub events: Vec<GameEvent>,
    wreck_drift: f32,
}

impl Session {
    /// Build a session for `viewport` and populate its obstacle field
    pub fn new<R: Rng>(viewport: Viewport, tuning: &Tuning, rng: &mut R) -> Self {
        let scale = ScalingContext::new(viewport, tuning);
        let mut field = ObstacleField::new(&scale, tuning);
        field.populate(
            tuning.obstacle_count,
            tuning.first_offset * scale.scaled(tuning.base_height),
            scale.scaled(tuning.obstacle_spacing),
            &scale,
            tuning,
            rng,
        );

        log::info!(
            "New session {}x{} (ratio {:.3}, {} obstacles)",
            viewport.width(),
            viewport.height(),
            scale.ratio,
            field.len()
        );

        Self {
            player: Player::new(&scale, tuning),
            field,
            clock: SimulationClock::new(tuning.event_interval_ms),
            outcome: None,
            events: Vec::new(),
            wreck_drift: scale.scaled(tuning.wreck_drift),
            scale,
        }
    }

    #[inline]
    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn score(&self) -> u32 {
        self.field.score
    }

    /// Snapshot of shared values for this frame's entity updates
    pub fn frame_context(&self) -> FrameContext {
        FrameContext {
            speed: self.field.speed,
            height: self.scale.height(),
            gravity: self.scale.gravity,
            wreck_drift: self.wreck_drift,
            game_over: self.game_over(),
        }
    }

    pub fn flap(&mut self) {
        if self.player.flap() {
            self.events.push(GameEvent::Flap);
        }
    }

    pub fn start_charge(&mut self) {
        if self.player.start_charge() {
            log::debug!("Charge started (energy {})", self.player.energy);
            self.events.push(GameEvent::ChargeStarted);
        }
    }

    pub fn stop_charge(&mut self) {
        if self.player.stop_charge() {
            log::debug!("Charge stopped (energy {})", self.player.energy);
            self.events.push(GameEvent::ChargeStopped);
        }
    }

    /// End the session. The first outcome wins.
    pub fn finish(&mut self, kind: OutcomeKind) {
        if self.outcome.is_some() {
            return;
        }
        if kind == OutcomeKind::Collision {
            if self.player.charging {
                self.events.push(GameEvent::ChargeStopped);
            }
            self.player.collide();
            self.events.push(GameEvent::Collision);
        } else {
            self.events.push(GameEvent::FieldCleared);
        }
        self.outcome = Some(Outcome {
            kind,
            time_ms: self.clock.timer,
        });
        log::info!(
            "Session over: {:?} at {}s, score {}",
            kind,
            self.clock.formatted(),
            self.field.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn session() -> Session {
        let mut rng = Pcg32::seed_from_u64(11);
        Session::new(Viewport::new(1280.0, 720.0).unwrap(), &Tuning::default(), &mut rng)
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.field.len(), 10);
        assert_eq!(s.field.obstacles[0].pos.x, 720.0);
        assert_eq!(s.field.obstacles[1].pos.x, 1320.0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.clock.timer, 0.0);
        assert!(!s.game_over());
    }

    #[test]
    fn test_frame_context() {
        let s = session();
        let ctx = s.frame_context();
        assert_eq!(ctx.speed, 2.0);
        assert_eq!(ctx.height, 720.0);
        assert!((ctx.gravity - 0.15).abs() < 1e-6);
        assert!(!ctx.game_over);
    }

    #[test]
    fn test_finish_collision_cancels_charge() {
        let mut s = session();
        s.player.energy = 40;
        s.start_charge();
        s.clock.timer = 1234.0;
        s.finish(OutcomeKind::Collision);

        assert!(s.player.collided);
        assert!(!s.player.charging);
        assert_eq!(
            s.outcome,
            Some(Outcome {
                kind: OutcomeKind::Collision,
                time_ms: 1234.0
            })
        );
        assert_eq!(
            s.events,
            vec![
                GameEvent::ChargeStarted,
                GameEvent::ChargeStopped,
                GameEvent::Collision
            ]
        );
    }

    #[test]
    fn test_first_outcome_wins() {
        let mut s = session();
        s.finish(OutcomeKind::Cleared);
        s.finish(OutcomeKind::Collision);
        assert_eq!(s.outcome.map(|o| o.kind), Some(OutcomeKind::Cleared));
        assert!(!s.player.collided);
    }

    #[test]
    fn test_commands_emit_events_only_on_change() {
        let mut s = session();
        s.stop_charge();
        s.start_charge();
        s.start_charge();
        s.flap();
        assert_eq!(s.events, vec![GameEvent::ChargeStarted, GameEvent::Flap]);
    }
}
