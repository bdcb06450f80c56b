//! Physics collaborator
//!
//! The gameplay core only needs an engine that moves the ball, keeps it in a
//! floor-open box and reports which pairs touched. [`ArcadePhysics`] is the
//! built-in engine; anything implementing [`Physics`] can replace it.

use serde::{Deserialize, Serialize};

use super::collision::{CollisionResult, box_collision, separate_and_bounce};
use super::state::{Ball, BrickField, Paddle};

/// Edge of the world box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Ceiling,
    Floor,
}

/// A participant in a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Body {
    Ball,
    Paddle,
    /// Brick by row-major index
    Brick(usize),
    Wall(Wall),
}

/// One colliding pair reported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub a: Body,
    pub b: Body,
}

impl Contact {
    pub fn new(a: Body, b: Body) -> Self {
        Self { a, b }
    }
}

/// World containment box with per-edge collision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    pub left: bool,
    pub right: bool,
    pub ceiling: bool,
    pub floor: bool,
}

impl WorldBounds {
    /// Walls and ceiling collide; the floor lets the ball fall out
    pub fn floor_open(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            left: true,
            right: true,
            ceiling: true,
            floor: false,
        }
    }
}

/// Engine interface consumed by the tick driver
pub trait Physics {
    /// Advance the ball by `dt` seconds and append every contact that occurred
    fn step(
        &mut self,
        ball: &mut Ball,
        paddle: &Paddle,
        bricks: &BrickField,
        dt: f32,
        contacts: &mut Vec<Contact>,
    );
}

/// Simple arcade engine: Euler integration, box overlaps, restitution 1
#[derive(Debug, Clone)]
pub struct ArcadePhysics {
    pub bounds: WorldBounds,
}

impl ArcadePhysics {
    pub fn new(bounds: WorldBounds) -> Self {
        Self { bounds }
    }

    fn contain(&self, ball: &mut Ball, contacts: &mut Vec<Contact>) {
        let r = ball.radius;
        let b = &self.bounds;

        if b.left && ball.pos.x - r < 0.0 {
            ball.pos.x = r;
            ball.vel.x = ball.vel.x.abs();
            contacts.push(Contact::new(Body::Ball, Body::Wall(Wall::Left)));
        } else if b.right && ball.pos.x + r > b.width {
            ball.pos.x = b.width - r;
            ball.vel.x = -ball.vel.x.abs();
            contacts.push(Contact::new(Body::Ball, Body::Wall(Wall::Right)));
        }

        if b.ceiling && ball.pos.y - r < 0.0 {
            ball.pos.y = r;
            ball.vel.y = ball.vel.y.abs();
            contacts.push(Contact::new(Body::Ball, Body::Wall(Wall::Ceiling)));
        } else if b.floor && ball.pos.y + r > b.height {
            ball.pos.y = b.height - r;
            ball.vel.y = -ball.vel.y.abs();
            contacts.push(Contact::new(Body::Ball, Body::Wall(Wall::Floor)));
        }
    }
}

impl Physics for ArcadePhysics {
    fn step(
        &mut self,
        ball: &mut Ball,
        paddle: &Paddle,
        bricks: &BrickField,
        dt: f32,
        contacts: &mut Vec<Contact>,
    ) {
        if ball.attached {
            return;
        }

        ball.pos += ball.vel * dt;
        self.contain(ball, contacts);

        let result = box_collision(&ball.bounds(), &paddle.bounds());
        if result.hit {
            bounce(ball, &result);
            contacts.push(Contact::new(Body::Ball, Body::Paddle));
        }

        for (id, brick) in bricks.active() {
            let result = box_collision(&ball.bounds(), &bricks.brick_bounds(brick));
            if result.hit {
                bounce(ball, &result);
                contacts.push(Contact::new(Body::Ball, Body::Brick(id)));
            }
        }
    }
}

fn bounce(ball: &mut Ball, result: &CollisionResult) {
    separate_and_bounce(&mut ball.pos, &mut ball.vel, result);
}
