//! Collision detection and response for axis-aligned boxes
//!
//! The ball is treated as a box of its diameter, the way arcade physics
//! engines handle sprites. Bricks and the paddle are immovable boxes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box stored as centre + half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// Strict overlap test (touching edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.half + other.half;
        d.x < reach.x && d.y < reach.y
    }
}

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal, pointing from the obstacle toward the moving box
    pub normal: Vec2,
    /// Penetration depth along the normal
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check a moving box against an obstacle
///
/// The separating axis is the one with the least penetration, so a ball
/// clipping the side of a brick is pushed sideways and one landing on top
/// is pushed up.
pub fn box_collision(moving: &Aabb, obstacle: &Aabb) -> CollisionResult {
    if !moving.overlaps(obstacle) {
        return CollisionResult::miss();
    }

    let delta = moving.center - obstacle.center;
    let reach = moving.half + obstacle.half;
    let overlap_x = reach.x - delta.x.abs();
    let overlap_y = reach.y - delta.y.abs();

    if overlap_x < overlap_y {
        let sign = if delta.x < 0.0 { -1.0 } else { 1.0 };
        CollisionResult {
            hit: true,
            normal: Vec2::new(sign, 0.0),
            penetration: overlap_x,
        }
    } else {
        let sign = if delta.y < 0.0 { -1.0 } else { 1.0 };
        CollisionResult {
            hit: true,
            normal: Vec2::new(0.0, sign),
            penetration: overlap_y,
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Push the moving body out along the normal and bounce it (restitution 1)
///
/// Velocity is only reflected while the body still moves into the surface,
/// so two contacts on the same face in one step do not cancel each other.
pub fn separate_and_bounce(pos: &mut Vec2, vel: &mut Vec2, result: &CollisionResult) {
    *pos += result.normal * result.penetration;
    if vel.dot(result.normal) < 0.0 {
        *vel = reflect_velocity(*vel, result.normal);
    }
}
