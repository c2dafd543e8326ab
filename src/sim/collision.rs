//! Circular collision proxies
//!
//! Sprites are hit-tested as circles, not by their exact shape.

use glam::Vec2;
use serde::Serialize;

/// A circle used for hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Circle centred on an axis-aligned box
    pub fn centered_in(top_left: Vec2, size: Vec2, radius: f32) -> Self {
        Self {
            center: top_left + size * 0.5,
            radius,
        }
    }

    #[inline]
    pub fn collides(&self, other: &Circle) -> bool {
        circles_collide(self, other)
    }
}

/// Two circles collide when the distance between centres is at most the sum
/// of their radii. Touching counts.
#[inline]
pub fn circles_collide(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) <= a.radius + b.radius
}
