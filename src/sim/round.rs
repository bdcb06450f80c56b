//! The round context
//!
//! A [`Round`] owns every piece of mutable gameplay state for one session and
//! exposes the host-facing entry points: pointer input, collision reports and
//! the per-tick terminal check. There is exactly one active round at a time.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::manager::{self, RoundPhase};
use super::physics::Contact;
use super::resolver::{self, CollisionKind, Resolution};
use super::state::{Ball, BrickField, Cue, GameState, Paddle, RngState};
use crate::tuning::Tuning;

/// HUD values shown every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub level: u32,
    pub lives: u8,
    pub score: u64,
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub hud: Hud,
    pub ball: &'a Ball,
    pub paddle: &'a Paddle,
    pub bricks: &'a BrickField,
}

/// One playthrough: game state, paddle, ball and bricks
#[derive(Debug, Clone)]
pub struct Round<R = Pcg32> {
    pub tuning: Tuning,
    pub state: GameState,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: R,
    /// Cues fired since the host last drained them
    cues: Vec<Cue>,
}

impl Round<Pcg32> {
    /// Start a round driven by a seeded PCG generator
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        log::info!("Starting round with seed {}", seed);
        Self::with_rng(tuning, RngState::new(seed).to_rng())
    }
}

impl<R: Rng> Round<R> {
    /// Start a round with a caller-supplied random source
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        debug_assert!(tuning.validate().is_ok(), "round started with invalid tuning");
        let paddle = Paddle::new(&tuning);
        let mut ball = Ball::new(tuning.ball_radius);
        ball.attach(&paddle, tuning.ball_rest_offset);

        Self {
            state: GameState::new(tuning.start_lives),
            bricks: BrickField::new(&tuning),
            paddle,
            ball,
            tuning,
            time_ticks: 0,
            rng,
            cues: Vec::new(),
        }
    }

    /// Pointer moved: slide the paddle, carrying an attached ball with it
    pub fn on_pointer_move(&mut self, x: f32) {
        self.paddle.set_from_pointer(x);
        self.ball.follow(&self.paddle);
        self.debug_check();
    }

    /// Pointer released: launch the ball if it is still on the paddle.
    /// Returns whether a launch happened.
    pub fn on_pointer_up(&mut self) -> bool {
        let launched = self.ball.launch(
            &mut self.rng,
            self.tuning.launch_vy,
            self.tuning.launch_max_vx,
        );
        if launched {
            log::debug!("Ball launched with velocity {:?}", self.ball.vel);
        }
        launched
    }

    /// Apply one contact reported by the physics engine.
    ///
    /// Returns [`RoundPhase::LevelClear`] when this contact removed the last
    /// brick; the caller must drop the rest of the tick's contacts.
    pub fn on_collision(&mut self, contact: &Contact) -> RoundPhase {
        let Some(kind) = CollisionKind::from_contact(contact) else {
            return RoundPhase::Playing;
        };
        let phase = match resolver::resolve_collision(self, kind) {
            Resolution::Continue => RoundPhase::Playing,
            Resolution::LevelClear => {
                manager::clear_level(self);
                RoundPhase::LevelClear
            }
        };
        self.debug_check();
        phase
    }

    /// End-of-tick terminal check (ball lost / game over)
    pub fn on_tick(&mut self) -> RoundPhase {
        let phase = manager::check_round(self);
        self.debug_check();
        phase
    }

    pub fn hud(&self) -> Hud {
        Hud {
            level: self.state.level,
            lives: self.state.lives,
            score: self.state.score,
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            hud: self.hud(),
            ball: &self.ball,
            paddle: &self.paddle,
            bricks: &self.bricks,
        }
    }

    /// Cues fired since the last drain, oldest first
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Take the pending cues for the audio player
    pub fn drain_cues(&mut self) -> std::vec::Drain<'_, Cue> {
        self.cues.drain(..)
    }

    pub(crate) fn emit(&mut self, cue: Cue) {
        log::trace!("Cue {}", cue.name());
        self.cues.push(cue);
    }

    pub(crate) fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Attach the ball at its rest spot above the paddle
    pub(crate) fn reset_ball(&mut self) {
        self.ball.attach(&self.paddle, self.tuning.ball_rest_offset);
    }

    fn debug_check(&self) {
        let (min_x, max_x) = self.tuning.paddle_range();
        debug_assert!(
            (min_x..=max_x).contains(&self.paddle.x),
            "paddle left the field: {}",
            self.paddle.x
        );
        debug_assert!(
            !self.ball.attached
                || (self.ball.vel == glam::Vec2::ZERO && self.ball.pos.x == self.paddle.x),
            "attached ball drifted from the paddle"
        );
        debug_assert!(self.state.level >= 1);
    }
}
