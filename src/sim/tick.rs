//! Fixed timestep simulation tick
//!
//! Runs one frame in the fixed order: input, physics, collision rules, round
//! terminal check. Rendering and audio read the round afterwards.

use rand::Rng;

use super::manager::RoundPhase;
use super::physics::{Contact, Physics};
use super::round::Round;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer x (from mouse/touch position)
    pub pointer_x: Option<f32>,
    /// Pointer released (click/tap)
    pub pointer_up: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the round by one fixed timestep.
///
/// Returns the terminal state visited this tick, if any (`Playing` otherwise).
pub fn tick<R, P>(round: &mut Round<R>, physics: &mut P, input: &TickInput, dt: f32) -> RoundPhase
where
    R: Rng,
    P: Physics + ?Sized,
{
    round.time_ticks += 1;

    let input = if input.idle_mode {
        autopilot(round, input)
    } else {
        input.clone()
    };

    // Input
    if let Some(x) = input.pointer_x {
        round.on_pointer_move(x);
    }
    if input.pointer_up {
        round.on_pointer_up();
    }

    // Physics
    let mut contacts: Vec<Contact> = Vec::new();
    physics.step(&mut round.ball, &round.paddle, &round.bricks, dt, &mut contacts);

    // Collision rules; a level clear voids the rest of this tick's contacts
    for contact in &contacts {
        if round.on_collision(contact) == RoundPhase::LevelClear {
            return RoundPhase::LevelClear;
        }
    }

    round.on_tick()
}

/// Demo input: launch immediately and keep the paddle under the ball
fn autopilot<R: Rng>(round: &Round<R>, input: &TickInput) -> TickInput {
    let mut input = input.clone();
    if round.ball.attached {
        input.pointer_up = true;
    }

    // Oscillating offset so hits land off-centre and the ball explores the field
    let time_factor = round.time_ticks as f32 * 0.02;
    let offset = (time_factor.sin() * 0.5 + (time_factor * 0.7).sin() * 0.25)
        * round.paddle.half_width;
    input.pointer_x = Some(round.ball.pos.x + offset);
    input
}
