//! A single scrolling, bouncing gear

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::collision::Circle;
use super::scale::ScalingContext;
use super::state::FrameContext;
use crate::tuning::Tuning;

/// A moving hazard
#[derive(Debug, Clone, Serialize)]
pub struct Obstacle {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Scaled sprite size
    pub size: Vec2,
    /// Vertical velocity per frame (negative is up)
    pub vel_y: f32,
    pub collision: Circle,
    /// Sprite sheet column, fixed for the obstacle's lifetime
    pub frame: u32,
    pub marked_for_deletion: bool,
    /// Unscaled sprite edge length
    sprite_size: f32,
    collision_factor: f32,
}

impl Obstacle {
    /// Build an obstacle with explicit start parameters
    pub fn new(
        x: f32,
        y: f32,
        moving_up: bool,
        frame: u32,
        scale: &ScalingContext,
        tuning: &Tuning,
    ) -> Self {
        let bounce = scale.scaled(tuning.obstacle_bounce_speed);
        let mut obstacle = Self {
            pos: Vec2::new(x, y),
            size: Vec2::ZERO,
            vel_y: if moving_up { -bounce } else { bounce },
            collision: Circle::default(),
            frame,
            marked_for_deletion: false,
            sprite_size: tuning.obstacle_sprite_size,
            collision_factor: tuning.obstacle_collision_factor,
        };
        obstacle.resize(scale);
        obstacle
    }

    /// Build an obstacle at `x` with a random height, bounce direction and frame
    pub fn spawn<R: Rng>(x: f32, scale: &ScalingContext, tuning: &Tuning, rng: &mut R) -> Self {
        let max_y = (scale.height() - scale.scaled(tuning.obstacle_sprite_size)).max(0.0);
        let y = rng.random::<f32>() * max_y;
        let moving_up = rng.random_bool(0.5);
        let frame = rng.random_range(0..tuning.obstacle_frames);
        Self::new(x, y, moving_up, frame, scale, tuning)
    }

    /// Recompute scaled size and the collision proxy
    pub fn resize(&mut self, scale: &ScalingContext) {
        let edge = scale.scaled(self.sprite_size);
        self.size = Vec2::splat(edge);
        self.collision.radius = edge * self.collision_factor;
        self.sync_collision();
    }

    /// Advance one frame
    pub fn update(&mut self, ctx: &FrameContext) {
        self.pos.x -= ctx.speed;
        self.pos.y += self.vel_y;

        if !ctx.game_over {
            // Elastic bounce, always pointing back into the play area
            let floor = (ctx.height - self.size.y).max(0.0);
            if self.pos.y <= 0.0 {
                self.vel_y = self.vel_y.abs();
            } else if self.pos.y >= floor {
                self.vel_y = -self.vel_y.abs();
            }
        } else {
            self.vel_y += ctx.wreck_drift;
        }

        self.sync_collision();
        self.marked_for_deletion = self.is_off_screen(ctx.height);
    }

    /// Fully past the left edge, or dropped below the bottom
    pub fn is_off_screen(&self, height: f32) -> bool {
        self.pos.x < -self.size.x || self.pos.y > height
    }

    fn sync_collision(&mut self) {
        self.collision = Circle::centered_in(self.pos, self.size, self.collision.radius);
    }
}
