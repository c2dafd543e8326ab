//! The player-controlled flyer
//!
//! Gravity pulls the player down every frame; a flap sets an upward speed and
//! a charge spends energy to hold the player up while the world speeds past.

use glam::Vec2;
use serde::Serialize;

use super::collision::Circle;
use super::scale::ScalingContext;
use super::state::FrameContext;
use crate::tuning::Tuning;

/// Observable locomotion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerState {
    /// Resting on the bottom boundary
    Idle,
    /// Airborne under gravity
    Falling,
    /// Spending energy on a boosted climb
    Charging,
    /// Hit an obstacle; out of play until the session is rebuilt
    Collided,
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity per frame (negative is up)
    pub vel_y: f32,
    pub energy: u32,
    pub min_energy: u32,
    pub max_energy: u32,
    pub charging: bool,
    /// Set once by collision detection, never cleared
    pub collided: bool,
    pub collision: Circle,
    flap_speed: f32,
    charge_lift: f32,
    charge_drain: u32,
    regen_frames: u32,
    regen_counter: u32,
    resting: bool,
}

impl Player {
    /// Fresh player, vertically centred in the viewport
    pub fn new(scale: &ScalingContext, tuning: &Tuning) -> Self {
        let size = Vec2::splat(scale.scaled(tuning.player_sprite_size));
        let pos = Vec2::new(
            scale.scaled(tuning.player_x),
            ((scale.height() - size.y) * 0.5).max(0.0),
        );
        let radius = scale.scaled(tuning.player_collision_radius);

        Self {
            pos,
            size,
            vel_y: scale.scaled(tuning.player_start_velocity),
            energy: tuning.initial_energy,
            min_energy: tuning.min_energy,
            max_energy: tuning.max_energy,
            charging: false,
            collided: false,
            collision: Circle::centered_in(pos, size, radius),
            flap_speed: scale.scaled(tuning.flap_speed),
            charge_lift: scale.scaled(tuning.charge_lift),
            charge_drain: tuning.charge_drain,
            regen_frames: tuning.energy_regen_frames,
            regen_counter: 0,
            resting: false,
        }
    }

    pub fn state(&self) -> PlayerState {
        if self.collided {
            PlayerState::Collided
        } else if self.charging {
            PlayerState::Charging
        } else if self.resting {
            PlayerState::Idle
        } else {
            PlayerState::Falling
        }
    }

    /// Set an upward impulse. Returns false if the player is out of play.
    pub fn flap(&mut self) -> bool {
        if self.collided {
            return false;
        }
        self.vel_y = -self.flap_speed;
        self.resting = false;
        true
    }

    /// Begin charging if there is energy above the floor.
    /// Returns true only on an actual transition.
    pub fn start_charge(&mut self) -> bool {
        if self.collided || self.charging || self.energy <= self.min_energy {
            return false;
        }
        self.charging = true;
        self.resting = false;
        true
    }

    /// Returns true if a charge was in progress
    pub fn stop_charge(&mut self) -> bool {
        std::mem::replace(&mut self.charging, false)
    }

    /// Enter the terminal state, cancelling any charge
    pub fn collide(&mut self) {
        self.collided = true;
        self.charging = false;
    }

    /// Advance one frame. Returns true if the charge ran dry this frame.
    pub fn update(&mut self, ctx: &FrameContext) -> bool {
        if self.collided {
            return false;
        }

        let depleted = self.handle_energy();

        self.vel_y += ctx.gravity;
        if self.charging {
            self.vel_y = self.vel_y.min(-self.charge_lift);
        }
        self.pos.y += self.vel_y;

        let floor = (ctx.height - self.size.y).max(0.0);
        self.resting = false;
        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.vel_y = self.vel_y.max(0.0);
        } else if self.pos.y >= floor {
            self.pos.y = floor;
            self.vel_y = 0.0;
            self.resting = !self.charging;
        }

        self.collision = Circle::centered_in(self.pos, self.size, self.collision.radius);
        depleted
    }

    fn handle_energy(&mut self) -> bool {
        if self.charging {
            self.regen_counter = 0;
            self.energy = self
                .energy
                .saturating_sub(self.charge_drain)
                .max(self.min_energy);
            if self.energy <= self.min_energy {
                self.charging = false;
                return true;
            }
        } else if self.energy < self.max_energy {
            self.regen_counter += 1;
            if self.regen_counter >= self.regen_frames {
                self.regen_counter = 0;
                self.energy = (self.energy + 1).min(self.max_energy);
            }
        }
        false
    }
}
