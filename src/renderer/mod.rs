//! Rendering collaborator contract
//!
//! The simulation never draws. Each frame the host asks for a `DrawList`
//! (sprite instances, flat-colored triangles and text) and uploads it with
//! whatever graphics backend it owns.

pub mod hud;
pub mod shapes;
pub mod vertex;

pub use hud::{Align, HudText};
pub use vertex::{SpriteInstance, Vertex};

use crate::sim::{PlayerState, Session};
use vertex::{colors, sheet};

/// Collision outline stroke width
const DEBUG_LINE_WIDTH: f32 = 3.0;

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Textured quads, back to front
    pub sprites: Vec<SpriteInstance>,
    /// Flat-colored triangles (energy bar, debug outlines)
    pub vertices: Vec<Vertex>,
    pub text: Vec<HudText>,
}

impl DrawList {
    /// Build the draw list for the current session state
    pub fn build(session: &Session, debug: bool) -> Self {
        let mut list = Self::default();
        let player = &session.player;

        list.sprites.push(SpriteInstance {
            position: player.pos.into(),
            size: player.size.into(),
            sheet: sheet::PLAYER,
            frame_x: 0,
            frame_y: player_row(player.state()),
            _pad: 0,
        });
        list.sprites
            .extend(session.field.obstacles.iter().map(|o| SpriteInstance {
                position: o.pos.into(),
                size: o.size.into(),
                sheet: sheet::GEARS,
                frame_x: o.frame,
                frame_y: 0,
                _pad: 0,
            }));

        if debug {
            list.vertices.extend(shapes::outline(
                &player.collision,
                DEBUG_LINE_WIDTH,
                colors::DEBUG_OUTLINE,
            ));
            for obstacle in &session.field.obstacles {
                list.vertices.extend(shapes::outline(
                    &obstacle.collision,
                    DEBUG_LINE_WIDTH,
                    colors::DEBUG_OUTLINE,
                ));
            }
        }

        list.vertices.extend(hud::energy_bar(
            player.energy,
            player.max_energy,
            session.scale.height(),
        ));
        list.text = hud::status_text(session);

        list
    }

    pub fn sprite_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.sprites)
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Sprite sheet row for each player pose
fn player_row(state: PlayerState) -> u32 {
    match state {
        PlayerState::Idle => 0,
        PlayerState::Falling => 1,
        PlayerState::Charging => 2,
        PlayerState::Collided => 3,
    }
}
