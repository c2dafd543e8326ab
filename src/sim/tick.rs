//! Per-frame simulation step
//!
//! The host calls `GameLoopController::step` once per display refresh with the
//! elapsed milliseconds. Input commands queued since the last frame are
//! applied first, then the session advances.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::scale::Viewport;
use super::state::{GameEvent, Session};
use crate::error::Result;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Discrete host input, consumed at the start of the next frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Flap,
    StartCharge,
    StopCharge,
    ToggleDebug,
    Restart,
    /// Rebuilds the session for a new viewport
    Resize(Viewport),
}

/// Advance a session by one frame of `dt` milliseconds
pub fn step(session: &mut Session, dt: f64) {
    let game_over = session.game_over();
    if session.clock.advance(dt, game_over) {
        session.events.push(GameEvent::Tick);
    }

    // Motion, scoring, clearing and collision as one pass
    let ctx = session.frame_context();
    let report = session.field.update(&ctx, &session.player.collision);
    for _ in 0..report.scored {
        session.events.push(GameEvent::ObstacleCleared);
    }
    if report.scored > 0 {
        log::debug!(
            "Cleared {} obstacle(s), score {}, {} left",
            report.scored,
            session.field.score,
            session.field.len()
        );
    }
    if let Some(kind) = report.outcome {
        session.finish(kind);
    }

    let ctx = session.frame_context();
    if session.player.update(&ctx) {
        log::debug!("Charge depleted");
        session.events.push(GameEvent::ChargeStopped);
    }

    session.field.ease_speed(session.player.charging);
}

/// Owns the session and everything needed to rebuild it
pub struct GameLoopController {
    session: Session,
    settings: Settings,
    tuning: Tuning,
    viewport: Viewport,
    rng: Pcg32,
    pending: Vec<Command>,
}

impl GameLoopController {
    pub fn new(viewport: Viewport, settings: Settings, tuning: Tuning) -> Result<Self> {
        tuning.validate()?;
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let session = Session::new(viewport, &tuning, &mut rng);
        log::info!("Game loop initialized with seed: {}", settings.seed);
        Ok(Self {
            session,
            settings,
            tuning,
            viewport,
            rng,
            pending: Vec::new(),
        })
    }

    /// Queue a command for the next frame
    pub fn submit(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Validate host dimensions and queue a resize
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        let viewport = Viewport::new(width, height).inspect_err(|e| {
            log::warn!("Rejected resize: {}", e);
        })?;
        self.submit(Command::Resize(viewport));
        Ok(())
    }

    /// Apply queued commands, then advance one frame
    pub fn step(&mut self, dt: f64) {
        self.session.events.clear();

        for command in std::mem::take(&mut self.pending) {
            self.apply(command);
        }

        let dt = self.sanitize_dt(dt);
        step(&mut self.session, dt);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn debug(&self) -> bool {
        self.settings.debug
    }

    pub fn pending(&self) -> &[Command] {
        &self.pending
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Flap => self.session.flap(),
            Command::StartCharge => self.session.start_charge(),
            Command::StopCharge => self.session.stop_charge(),
            Command::ToggleDebug => self.settings.toggle_debug(),
            Command::Restart => {
                log::info!("Restart requested");
                self.rebuild();
            }
            Command::Resize(viewport) => {
                log::info!("Resize to {}x{}", viewport.width(), viewport.height());
                self.viewport = viewport;
                self.rebuild();
            }
        }
    }

    fn rebuild(&mut self) {
        self.session = Session::new(self.viewport, &self.tuning, &mut self.rng);
    }

    /// Host deltas can be negative, NaN, or huge after a stall
    fn sanitize_dt(&self, dt: f64) -> f64 {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("Ignoring invalid frame delta: {}", dt);
            return 0.0;
        }
        dt.min(self.tuning.max_frame_delta_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::OutcomeKind;

    fn controller(seed: u64) -> GameLoopController {
        GameLoopController::new(
            Viewport::new(1280.0, 720.0).unwrap(),
            Settings::with_seed(seed),
            Tuning::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_commands_wait_for_next_step() {
        let mut c = controller(1);
        c.submit(Command::Flap);
        assert_eq!(c.pending().len(), 1);
        assert_eq!(c.session().player.vel_y, -8.0);

        c.step(16.0);
        assert!(c.pending().is_empty());
        // Flap sets -5, then one frame of gravity
        assert!((c.session().player.vel_y - (-4.85)).abs() < 1e-5);
        assert_eq!(c.session().events, vec![GameEvent::Flap]);
    }

    #[test]
    fn test_charge_speeds_up_field() {
        let mut c = controller(1);
        c.submit(Command::StartCharge);
        c.step(16.0);
        assert!(c.session().player.charging);
        assert_eq!(c.session().field.speed, 2.5);
        assert_eq!(c.session().player.energy, 29);

        c.submit(Command::StopCharge);
        c.step(16.0);
        assert!(!c.session().player.charging);
        assert!((c.session().field.speed - 2.4).abs() < 1e-5);
    }

    #[test]
    fn test_toggle_debug() {
        let mut c = controller(1);
        assert!(!c.debug());
        c.submit(Command::ToggleDebug);
        c.step(16.0);
        assert!(c.debug());
    }

    #[test]
    fn test_restart_resets_session() {
        let mut c = controller(1);
        for _ in 0..30 {
            c.step(16.0);
        }
        assert!(c.session().clock.timer > 0.0);
        c.submit(Command::Restart);
        c.step(0.0);
        assert_eq!(c.session().clock.timer, 0.0);
        assert_eq!(c.session().score(), 0);
        assert_eq!(c.session().field.len(), 10);
        assert!(!c.session().game_over());
    }

    #[test]
    fn test_resize_rejects_invalid_dimensions() {
        let mut c = controller(1);
        assert!(c.resize(0.0, 720.0).is_err());
        assert!(c.resize(800.0, -5.0).is_err());
        assert!(c.pending().is_empty());
    }

    #[test]
    fn test_resize_rebuilds_scaled_session() {
        let mut c = controller(1);
        c.resize(640.0, 360.0).unwrap();
        c.step(0.0);
        let s = c.session();
        assert_eq!(s.scale.ratio, 0.5);
        // One frame of scrolling at the new base speed
        assert_eq!(s.field.obstacles[0].pos.x, 360.0 - 1.0);
        assert_eq!(s.field.obstacles[1].pos.x, 360.0 + 300.0 - 1.0);
    }

    #[test]
    fn test_invalid_dt_is_ignored() {
        let mut c = controller(1);
        c.step(f64::NAN);
        c.step(-10.0);
        assert_eq!(c.session().clock.timer, 0.0);
        c.step(1e9);
        assert_eq!(c.session().clock.timer, 1000.0);
    }

    #[test]
    fn test_tick_event() {
        let mut c = controller(1);
        c.step(100.0);
        assert!(!c.session().events.contains(&GameEvent::Tick));
        c.step(100.0);
        assert!(c.session().events.contains(&GameEvent::Tick));
        assert!(c.session().clock.tick_fired);
    }

    #[test]
    fn test_determinism() {
        let mut a = controller(99999);
        let mut b = controller(99999);

        for frame in 0..600 {
            if frame % 20 == 0 {
                a.submit(Command::Flap);
                b.submit(Command::Flap);
            }
            if frame == 100 {
                a.submit(Command::StartCharge);
                b.submit(Command::StartCharge);
            }
            a.step(16.7);
            b.step(16.7);
        }

        let (sa, sb) = (a.session(), b.session());
        assert_eq!(sa.score(), sb.score());
        assert_eq!(sa.player.pos, sb.player.pos);
        assert_eq!(sa.field.len(), sb.field.len());
        for (oa, ob) in sa.field.obstacles.iter().zip(&sb.field.obstacles) {
            assert_eq!(oa.pos, ob.pos);
            assert_eq!(oa.frame, ob.frame);
        }
        assert_eq!(sa.outcome.map(|o| o.kind), sb.outcome.map(|o| o.kind));
    }

    #[test]
    fn test_idle_player_eventually_collides_or_clears() {
        let mut c = controller(5);
        for _ in 0..20_000 {
            c.step(16.0);
            if c.session().game_over() {
                break;
            }
        }
        let outcome = c.session().outcome.expect("session should end");
        assert!(matches!(
            outcome.kind,
            OutcomeKind::Collision | OutcomeKind::Cleared
        ));
        if outcome.kind == OutcomeKind::Collision {
            assert!(c.session().player.collided);
        }
    }
}
