//! Collision response rules
//!
//! Maps each reported contact onto score, combo and velocity changes and the
//! audio cues that go with them. Round-level consequences (level clear) are
//! signalled back to the caller, never applied here.

use rand::Rng;

use super::physics::{Body, Contact, Wall};
use super::round::Round;
use super::state::Cue;

/// What the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    BrickHit { brick: usize },
    PaddleHit,
    BoundaryHit(Wall),
}

impl CollisionKind {
    /// Classify a contact involving the ball, in either order.
    /// Pairs that do not involve the ball yield `None`.
    pub fn from_contact(contact: &Contact) -> Option<Self> {
        let other = match (contact.a, contact.b) {
            (Body::Ball, other) | (other, Body::Ball) => other,
            _ => return None,
        };
        match other {
            Body::Brick(brick) => Some(CollisionKind::BrickHit { brick }),
            Body::Paddle => Some(CollisionKind::PaddleHit),
            // The floor never contains the ball; losing it is the round's call
            Body::Wall(Wall::Floor) => None,
            Body::Wall(wall) => Some(CollisionKind::BoundaryHit(wall)),
            Body::Ball => None,
        }
    }
}

/// Outcome of resolving one collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Keep processing this tick's contacts
    Continue,
    /// Last brick is gone; nothing else this tick may be resolved
    LevelClear,
}

/// Points for a brick hit while `combo` bricks are already chained:
/// `round(base * (1 + combo * step))`
pub fn brick_score(combo: u32, base: u64, step: f64) -> u64 {
    (base as f64 * (1.0 + combo as f64 * step)).round() as u64
}

/// Horizontal velocity after an off-centre paddle contact, or `None` for a
/// dead-centre hit
pub fn paddle_deflection(ball_x: f32, paddle_x: f32, factor: f32) -> Option<f32> {
    if ball_x < paddle_x {
        let diff = paddle_x - ball_x;
        Some(-factor * diff)
    } else if ball_x > paddle_x {
        let diff = ball_x - paddle_x;
        Some(factor * diff)
    } else {
        None
    }
}

/// Apply the rules for one collision
pub fn resolve_collision<R: Rng>(round: &mut Round<R>, kind: CollisionKind) -> Resolution {
    match kind {
        CollisionKind::BrickHit { brick } => hit_brick(round, brick),
        CollisionKind::PaddleHit => {
            hit_paddle(round);
            Resolution::Continue
        }
        CollisionKind::BoundaryHit(wall) => {
            hit_bounds(round, wall);
            Resolution::Continue
        }
    }
}

fn hit_brick<R: Rng>(round: &mut Round<R>, brick: usize) -> Resolution {
    if !round.bricks.deactivate(brick) {
        // Stale contact for a brick already knocked out this tick
        return Resolution::Continue;
    }

    let gain = brick_score(
        round.state.combo,
        round.tuning.brick_base_score,
        round.tuning.combo_step,
    );
    round.state.score += gain;
    round.state.combo += 1;
    round.emit(Cue::BrickHit);

    let remaining = round.bricks.active_count();
    log::debug!(
        "Brick {} hit: +{} (combo {}), {} left",
        brick,
        gain,
        round.state.combo,
        remaining
    );

    if remaining == 0 {
        Resolution::LevelClear
    } else {
        Resolution::Continue
    }
}

fn hit_paddle<R: Rng>(round: &mut Round<R>) {
    round.state.combo = 0;

    match paddle_deflection(round.ball.pos.x, round.paddle.x, round.tuning.deflect_factor) {
        Some(vx) => round.ball.vel.x = vx,
        None => {
            // Dead centre: kick sideways so the ball never bounces straight up
            let (min, max) = (round.tuning.tie_kick_min, round.tuning.tie_kick_max);
            let rng = round.rng_mut();
            let sign = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
            let kick = rng.random_range(min..max);
            round.ball.vel.x = sign * kick;
            round.ball.vel.y = round.tuning.launch_vy;
        }
    }

    round.emit(Cue::PaddleHit);
}

fn hit_bounds<R: Rng>(round: &mut Round<R>, wall: Wall) {
    log::trace!("Ball hit {:?}", wall);
    round.emit(Cue::BoundsHit);
}
