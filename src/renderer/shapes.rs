//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::Circle;

/// Segments used for collision outlines
pub const OUTLINE_SEGMENTS: u32 = 32;

/// Axis-aligned filled rectangle from its top-left corner
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (top_left.x, top_left.y);
    let (x1, y1) = (x0 + size.x, y0 + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);
    let at = |r: f32, theta: f32| center + Vec2::new(r * theta.cos(), r * theta.sin());

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let inner1 = at(inner_radius, theta1);
        let outer1 = at(outer_radius, theta1);
        let inner2 = at(inner_radius, theta2);
        let outer2 = at(outer_radius, theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Stroke a collision circle, centred on its radius
pub fn outline(circle: &Circle, line_width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = line_width * 0.5;
    ring(
        circle.center,
        (circle.radius - half).max(0.0),
        circle.radius + half,
        color,
        OUTLINE_SEGMENTS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(5.0, 15.0), [1.0; 4]);
        assert_eq!(v[0].position, [10.0, 20.0]);
        assert_eq!(v[5].position, [15.0, 35.0]);
    }

    #[test]
    fn test_ring_vertex_count_and_radius() {
        let v = ring(Vec2::new(100.0, 100.0), 10.0, 12.0, [1.0; 4], 16);
        assert_eq!(v.len(), 16 * 6);
        for vertex in &v {
            let d = Vec2::from(vertex.position).distance(Vec2::new(100.0, 100.0));
            assert!((9.99..=12.01).contains(&d));
        }
    }

    #[test]
    fn test_outline_never_inverts() {
        let v = outline(&Circle::new(Vec2::ZERO, 1.0), 3.0, [1.0; 4]);
        assert_eq!(v.len(), (OUTLINE_SEGMENTS * 6) as usize);
        assert!(v.iter().all(|vx| Vec2::from(vx.position).length() <= 2.51));
    }
}
