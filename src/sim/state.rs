//! Game state and core simulation types
//!
//! Everything a round mutates lives in these types; the [`Round`](super::Round)
//! owns one of each.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// Number of entries in the row-cyclic brick palette
pub const PALETTE_SIZE: usize = 10;

/// Named audio cue fired by the gameplay core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Ball destroyed a brick
    BrickHit,
    /// Ball bounced off the ceiling or a side wall
    BoundsHit,
    /// Ball bounced off the paddle
    PaddleHit,
    /// Ball fell past the paddle with lives remaining
    LostLife,
    /// Ball fell past the paddle on the last life
    GameOver,
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::BrickHit => "brickHit",
            Cue::BoundsHit => "boundsHit",
            Cue::PaddleHit => "paddleHit",
            Cue::LostLife => "lostLife",
            Cue::GameOver => "gameOver",
        }
    }
}

/// Score and progress counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Remaining spare balls
    pub lives: u8,
    /// Current level (starts at 1)
    pub level: u32,
    /// Score
    pub score: u64,
    /// Bricks destroyed since the last paddle contact
    pub combo: u32,
}

impl GameState {
    pub fn new(start_lives: u8) -> Self {
        Self {
            lives: start_lives,
            level: 1,
            score: 0,
            combo: 0,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Riding on the paddle, waiting for launch
    pub attached: bool,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            attached: true,
        }
    }

    /// Put the ball back on the paddle with zero velocity
    pub fn attach(&mut self, paddle: &Paddle, rest_offset: f32) {
        self.pos = Vec2::new(paddle.x, paddle.y - rest_offset);
        self.vel = Vec2::ZERO;
        self.attached = true;
    }

    /// Keep an attached ball centred on the paddle
    pub fn follow(&mut self, paddle: &Paddle) {
        if self.attached {
            self.pos.x = paddle.x;
        }
    }

    /// Launch from the paddle: straight up at `vy` with a random sideways
    /// component in `(-max_vx, max_vx)`.
    ///
    /// Returns false (and changes nothing) when the ball is already free.
    pub fn launch<R: Rng>(&mut self, rng: &mut R, vy: f32, max_vx: f32) -> bool {
        if !self.attached {
            return false;
        }
        let sign = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let magnitude = if max_vx > 0.0 {
            rng.random_range(0.0..max_vx)
        } else {
            0.0
        };
        self.vel = Vec2::new(sign * magnitude, vy);
        self.attached = false;
        true
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.radius))
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Centre x, always within `[min_x, max_x]`
    pub x: f32,
    /// Centre y (fixed row)
    pub y: f32,
    pub half_width: f32,
    pub half_height: f32,
    min_x: f32,
    max_x: f32,
}

impl Paddle {
    /// Centred paddle for the given tuning
    pub fn new(tuning: &Tuning) -> Self {
        let (min_x, max_x) = tuning.paddle_range();
        Self {
            x: tuning.field_width / 2.0,
            y: tuning.paddle_y,
            half_width: tuning.paddle_half_width,
            half_height: tuning.paddle_half_height,
            min_x,
            max_x,
        }
    }

    /// Move to the pointer, clamped so the paddle stays on the field.
    /// Non-finite pointer positions are ignored.
    pub fn set_from_pointer(&mut self, px: f32) {
        if !px.is_finite() {
            return;
        }
        self.x = px.clamp(self.min_x, self.max_x);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.half_width, self.half_height),
        )
    }
}

/// One destructible cell of the brick grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub row: usize,
    pub col: usize,
    pub active: bool,
    /// Palette entry, cycles with the row
    pub color_index: u8,
    /// Centre position
    pub pos: Vec2,
}

/// Grid of bricks, indexed row-major (`row * cols + col`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickField {
    pub rows: usize,
    pub cols: usize,
    /// Half extents of every brick
    pub half: Vec2,
    bricks: Vec<Brick>,
}

impl BrickField {
    /// Lay out a full grid centred horizontally on the field
    pub fn new(tuning: &Tuning) -> Self {
        let rows = tuning.brick_rows;
        let cols = tuning.brick_cols;
        let half = Vec2::new(tuning.brick_width / 2.0, tuning.brick_height / 2.0);
        let left = (tuning.field_width - cols as f32 * tuning.brick_width) / 2.0;

        let mut bricks = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let pos = Vec2::new(
                    left + col as f32 * tuning.brick_width + half.x,
                    tuning.brick_top + row as f32 * tuning.brick_height + half.y,
                );
                bricks.push(Brick {
                    row,
                    col,
                    active: true,
                    color_index: (row % PALETTE_SIZE) as u8,
                    pos,
                });
            }
        }

        Self {
            rows,
            cols,
            half,
            bricks,
        }
    }

    /// Re-enable every brick and reassign the row palette
    pub fn repopulate(&mut self) {
        for brick in &mut self.bricks {
            brick.active = true;
            brick.color_index = (brick.row % PALETTE_SIZE) as u8;
        }
    }

    /// Number of bricks still standing
    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    /// Knock out a brick. Returns false if it was already gone or unknown.
    pub fn deactivate(&mut self, id: usize) -> bool {
        match self.bricks.get_mut(id) {
            Some(brick) if brick.active => {
                brick.active = false;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: usize) -> Option<&Brick> {
        self.bricks.get(id)
    }

    pub fn id_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    /// Active bricks with their ids, in index order
    pub fn active(&self) -> impl Iterator<Item = (usize, &Brick)> {
        self.bricks.iter().enumerate().filter(|(_, b)| b.active)
    }

    pub fn brick_bounds(&self, brick: &Brick) -> Aabb {
        Aabb::new(brick.pos, self.half)
    }
}

/// RNG seed wrapper, so a run can be replayed from its seed
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_paddle_clamps_to_field() {
        let tuning = Tuning::default();
        let mut paddle = Paddle::new(&tuning);
        assert_eq!(paddle.x, 400.0);

        paddle.set_from_pointer(-50.0);
        assert_eq!(paddle.x, 52.0);
        paddle.set_from_pointer(900.0);
        assert_eq!(paddle.x, 748.0);
        paddle.set_from_pointer(321.5);
        assert_eq!(paddle.x, 321.5);
    }

    #[test]
    fn test_ball_attach_and_follow() {
        let tuning = Tuning::default();
        let mut paddle = Paddle::new(&tuning);
        let mut ball = Ball::new(tuning.ball_radius);
        ball.vel = Vec2::new(120.0, -40.0);
        ball.attach(&paddle, tuning.ball_rest_offset);
        assert!(ball.attached);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.pos, Vec2::new(400.0, 650.0));

        paddle.set_from_pointer(100.0);
        ball.follow(&paddle);
        assert_eq!(ball.pos.x, 100.0);
    }

    #[test]
    fn test_free_ball_ignores_paddle() {
        let tuning = Tuning::default();
        let mut paddle = Paddle::new(&tuning);
        let mut ball = Ball::new(tuning.ball_radius);
        ball.attach(&paddle, tuning.ball_rest_offset);
        let mut rng = RngState::new(7).to_rng();
        assert!(ball.launch(&mut rng, -300.0, 100.0));

        paddle.set_from_pointer(100.0);
        ball.follow(&paddle);
        assert_eq!(ball.pos.x, 400.0);
    }

    #[test]
    fn test_launch_sets_velocity_once() {
        let mut ball = Ball::new(10.0);
        let mut rng = RngState::new(42).to_rng();
        assert!(ball.launch(&mut rng, -300.0, 100.0));
        assert!(!ball.attached);
        assert_eq!(ball.vel.y, -300.0);
        assert!(ball.vel.x.abs() < 100.0);

        let before = ball.clone();
        assert!(!ball.launch(&mut rng, -300.0, 100.0));
        assert_eq!(ball.vel, before.vel);
        assert_eq!(ball.pos, before.pos);
        assert!(!ball.attached);
    }

    #[test]
    fn test_brick_field_layout() {
        let tuning = Tuning::default();
        let field = BrickField::new(&tuning);
        assert_eq!(field.len(), 100);
        assert_eq!(field.active_count(), 100);

        // 10 columns of 64px centred on 800px: first centre at 112
        let first = field.get(0).unwrap();
        assert_eq!(first.pos, Vec2::new(112.0, 66.0));
        let last = field.get(99).unwrap();
        assert_eq!((last.row, last.col), (9, 9));
        assert_eq!(last.pos, Vec2::new(688.0, 354.0));
    }

    #[test]
    fn test_brick_colors_cycle_by_row() {
        let tuning = Tuning {
            brick_rows: 12,
            brick_top: 10.0,
            ..Tuning::default()
        };
        let field = BrickField::new(&tuning);
        for brick in field.iter() {
            assert_eq!(brick.color_index as usize, brick.row % PALETTE_SIZE);
        }
        let row_ten = field.id_of(10, 3).unwrap();
        assert_eq!(field.get(row_ten).unwrap().color_index, 0);
    }

    #[test]
    fn test_deactivate_and_repopulate() {
        let tuning = Tuning::default();
        let mut field = BrickField::new(&tuning);
        assert!(field.deactivate(5));
        assert!(!field.deactivate(5));
        assert!(!field.deactivate(1000));
        assert_eq!(field.active_count(), 99);
        assert!(field.active().all(|(id, _)| id != 5));

        field.repopulate();
        assert_eq!(field.active_count(), 100);
    }

    #[test]
    fn test_paddle_ignores_non_finite_pointer() {
        let tuning = Tuning::default();
        let mut paddle = Paddle::new(&tuning);
        paddle.set_from_pointer(120.0);
        for px in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            paddle.set_from_pointer(px);
            assert_eq!(paddle.x, 120.0);
        }
    }

    proptest! {
        #[test]
        fn prop_paddle_always_on_field(px in -10_000.0f32..10_000.0) {
            let tuning = Tuning::default();
            let mut paddle = Paddle::new(&tuning);
            paddle.set_from_pointer(px);
            prop_assert!(paddle.x >= tuning.paddle_half_width);
            prop_assert!(paddle.x <= tuning.field_width - tuning.paddle_half_width);
        }

        #[test]
        fn prop_launch_ranges(seed in any::<u64>()) {
            let mut ball = Ball::new(10.0);
            let mut rng = RngState::new(seed).to_rng();
            prop_assert!(ball.launch(&mut rng, -300.0, 100.0));
            prop_assert_eq!(ball.vel.y, -300.0);
            prop_assert!(ball.vel.x.abs() < 100.0);
        }
    }
}
