//! Gearflight headless driver
//!
//! Runs one seeded session at 60 Hz with a naive autopilot and logs how it
//! ended. Windowing and input belong to the embedding host.

use gearflight::renderer::DrawList;
use gearflight::sim::{Command, GameLoopController, Session, Viewport};
use gearflight::{Settings, Tuning};

const FRAME_MS: f64 = 1000.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 120;

/// Flap when sinking below mid-screen; charge with a full tank
fn autopilot(session: &Session) -> Vec<Command> {
    let player = &session.player;
    let mut commands = Vec::new();
    if player.collision.center.y > session.scale.height() * 0.5 && player.vel_y >= 0.0 {
        commands.push(Command::Flap);
    }
    if player.energy >= player.max_energy {
        commands.push(Command::StartCharge);
    } else if player.charging && player.energy <= player.min_energy + 5 {
        commands.push(Command::StopCharge);
    }
    commands
}

fn main() -> gearflight::Result<()> {
    env_logger::init();
    log::info!("Gearflight (headless) starting...");

    let mut game = GameLoopController::new(
        Viewport::new(1280.0, 720.0)?,
        Settings::default(),
        Tuning::default(),
    )?;

    for _ in 0..MAX_FRAMES {
        for command in autopilot(game.session()) {
            game.submit(command);
        }
        game.step(FRAME_MS);
        if game.session().game_over() {
            break;
        }
    }

    let session = game.session();
    let list = DrawList::build(session, game.debug());
    for line in &list.text {
        log::info!("{}", line.text);
    }
    match serde_json::to_string(&session.outcome) {
        Ok(json) => log::debug!("Outcome: {}", json),
        Err(e) => log::warn!("Could not serialize outcome: {}", e),
    }
    Ok(())
}
