//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::palette::brick_color;
use super::vertex::{Vertex, colors};
use crate::sim::{Aabb, Snapshot};

/// Segments used for the ball outline
const BALL_SEGMENTS: u32 = 16;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(bounds: &Aabb, color: [f32; 4]) -> Vec<Vertex> {
    let min = bounds.min();
    let max = bounds.max();

    // Two triangles
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Triangle list for one frame: active bricks, then paddle, then ball
pub fn build_frame(snapshot: &Snapshot<'_>) -> Vec<Vertex> {
    let bricks = snapshot.bricks;
    let mut vertices =
        Vec::with_capacity(bricks.len() * 6 + 6 + (BALL_SEGMENTS * 3) as usize);

    for (_, brick) in bricks.active() {
        let color = brick_color(brick.color_index).rgba;
        vertices.extend(rect(&bricks.brick_bounds(brick), color));
    }

    vertices.extend(rect(&snapshot.paddle.bounds(), colors::PADDLE));
    vertices.extend(circle(
        snapshot.ball.pos,
        snapshot.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    vertices
}
