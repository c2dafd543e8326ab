//! The obstacle field: spawning, per-frame motion, removal and scoring

use rand::Rng;
use serde::Serialize;

use super::collision::Circle;
use super::obstacle::Obstacle;
use super::scale::ScalingContext;
use super::state::{FrameContext, OutcomeKind};
use crate::tuning::Tuning;

/// What happened in one field update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldReport {
    /// Obstacles removed this frame
    pub removed: u32,
    /// Score gained this frame
    pub scored: u32,
    /// Set when this frame ended the session
    pub outcome: Option<OutcomeKind>,
}

/// Live obstacles plus the shared scroll speed and score
#[derive(Debug, Clone, Serialize)]
pub struct ObstacleField {
    /// In spawn order
    pub obstacles: Vec<Obstacle>,
    /// Horizontal scroll speed per frame, shared by every obstacle
    pub speed: f32,
    pub score: u32,
    min_speed: f32,
    max_speed: f32,
    speed_accel: f32,
    speed_decay: f32,
}

impl ObstacleField {
    pub fn new(scale: &ScalingContext, tuning: &Tuning) -> Self {
        Self {
            obstacles: Vec::new(),
            speed: scale.min_speed,
            score: 0,
            min_speed: scale.min_speed,
            max_speed: scale.max_speed,
            speed_accel: scale.scaled(tuning.speed_accel),
            speed_decay: scale.scaled(tuning.speed_decay),
        }
    }

    /// Replace every obstacle with `count` fresh ones at
    /// `first_offset + i * spacing`
    pub fn populate<R: Rng>(
        &mut self,
        count: usize,
        first_offset: f32,
        spacing: f32,
        scale: &ScalingContext,
        tuning: &Tuning,
        rng: &mut R,
    ) {
        self.obstacles = (0..count)
            .map(|i| Obstacle::spawn(first_offset + i as f32 * spacing, scale, tuning, &mut *rng))
            .collect();
        log::debug!(
            "Populated {} obstacles from x={} every {}",
            count,
            first_offset,
            spacing
        );
    }

    /// Move every obstacle, test each against the player, then drop the ones
    /// that left the screen.
    pub fn update(&mut self, ctx: &FrameContext, player: &Circle) -> FieldReport {
        for obstacle in &mut self.obstacles {
            obstacle.update(ctx);
        }

        let mut report = FieldReport::default();

        // Read pass
        let collision = !ctx.game_over
            && self
                .obstacles
                .iter()
                .any(|o| !o.marked_for_deletion && o.collision.collides(player));
        report.removed = self
            .obstacles
            .iter()
            .filter(|o| o.marked_for_deletion)
            .count() as u32;

        // Write pass
        if report.removed > 0 {
            self.obstacles.retain(|o| !o.marked_for_deletion);
        }

        if !ctx.game_over {
            report.scored = report.removed;
            self.score += report.removed;
        }
        if collision {
            report.outcome = Some(OutcomeKind::Collision);
        } else if !ctx.game_over && report.removed > 0 && self.obstacles.is_empty() {
            report.outcome = Some(OutcomeKind::Cleared);
        }

        report
    }

    /// Ease the scroll speed toward max while charging, back to min otherwise
    pub fn ease_speed(&mut self, charging: bool) {
        self.speed = if charging {
            (self.speed + self.speed_accel).min(self.max_speed)
        } else {
            (self.speed - self.speed_decay).max(self.min_speed)
        };
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
