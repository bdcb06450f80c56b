//! Round-level state machine
//!
//! `Playing` is the resting state. `BallLost`, `GameOver` and `LevelClear` are
//! visited for a single transition and always hand control back to `Playing`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::round::Round;
use super::state::{Ball, Cue, GameState, Paddle};

/// State visited by the round this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Nothing terminal happened
    Playing,
    /// Ball fell past the paddle, a life was spent
    BallLost,
    /// Ball fell past the paddle with no lives left; the round restarted
    GameOver,
    /// Last brick destroyed; the field was rebuilt
    LevelClear,
}

/// The ball counts as lost once its centre drops below the paddle's row
pub fn ball_lost(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y > paddle.y
}

/// Per-tick terminal check, run after all collisions are resolved
pub fn check_round<R: Rng>(round: &mut Round<R>) -> RoundPhase {
    if !ball_lost(&round.ball, &round.paddle) {
        return RoundPhase::Playing;
    }

    if round.state.lives > 0 {
        lose_life(round);
        RoundPhase::BallLost
    } else {
        game_over(round);
        RoundPhase::GameOver
    }
}

fn lose_life<R: Rng>(round: &mut Round<R>) {
    round.state.lives = round.state.lives.saturating_sub(1);
    round.reset_ball();
    round.emit(Cue::LostLife);
    log::info!("Ball lost, {} lives left", round.state.lives);
}

fn game_over<R: Rng>(round: &mut Round<R>) {
    log::info!("Game over with score {}", round.state.score);
    round.state = GameState::new(round.tuning.start_lives);
    round.bricks.repopulate();
    round.reset_ball();
    round.emit(Cue::GameOver);
}

/// Rebuild the field after the last brick falls.
///
/// The level counter stays put: a cleared level is replayed.
pub fn clear_level<R: Rng>(round: &mut Round<R>) {
    log::info!(
        "Level {} cleared with score {}",
        round.state.level,
        round.state.score
    );
    round.reset_ball();
    round.bricks.repopulate();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::physics::{Body, Contact};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn drop_ball(round: &mut Round) {
        round.on_pointer_up();
        round.ball.pos = Vec2::new(200.0, round.paddle.y + 1.0);
        round.ball.vel = Vec2::new(-40.0, 300.0);
    }

    #[test]
    fn test_ball_above_paddle_keeps_playing() {
        let mut round = Round::new(Tuning::default(), 5);
        assert_eq!(round.on_tick(), RoundPhase::Playing);

        round.on_pointer_up();
        // Exactly level with the paddle is not lost yet
        round.ball.pos.y = round.paddle.y;
        assert_eq!(round.on_tick(), RoundPhase::Playing);
        assert_eq!(round.state.lives, 3);
    }

    #[test]
    fn test_ball_lost_costs_a_life() {
        let mut round = Round::new(Tuning::default(), 5);
        round.on_pointer_move(300.0);
        round.on_pointer_up();
        round.on_collision(&Contact::new(Body::Ball, Body::Brick(0)));
        round.drain_cues().for_each(drop);
        round.ball.pos = Vec2::new(200.0, 701.0);

        assert_eq!(round.on_tick(), RoundPhase::BallLost);
        assert_eq!(round.state.lives, 2);
        assert_eq!(round.state.score, 100);
        assert!(round.ball.attached);
        assert_eq!(round.ball.vel, Vec2::ZERO);
        assert_eq!(round.ball.pos, Vec2::new(300.0, 650.0));
        assert_eq!(round.bricks.active_count(), 99);
        assert_eq!(round.drain_cues().collect::<Vec<_>>(), vec![Cue::LostLife]);
    }

    #[test]
    fn test_life_loss_cycle_ends_in_game_over() {
        let mut round = Round::new(Tuning::default(), 5);
        round.on_pointer_up();
        for id in 0..5 {
            round.on_collision(&Contact::new(Body::Ball, Body::Brick(id)));
        }
        assert!(round.state.score > 0);

        for expected in [2, 1, 0] {
            drop_ball(&mut round);
            assert_eq!(round.on_tick(), RoundPhase::BallLost);
            assert_eq!(round.state.lives, expected);
        }
        // Score survives life loss
        assert_eq!(round.state.score, 100 + 110 + 120 + 130 + 140);

        drop_ball(&mut round);
        assert_eq!(round.on_tick(), RoundPhase::GameOver);
        assert_eq!(round.state, GameState::new(3));
        assert_eq!(round.bricks.active_count(), 100);
        assert!(round.ball.attached);
        assert_eq!(round.ball.vel, Vec2::ZERO);

        let cues: Vec<Cue> = round.drain_cues().collect();
        assert_eq!(cues.last(), Some(&Cue::GameOver));
        assert_eq!(cues.iter().filter(|c| **c == Cue::LostLife).count(), 3);
    }

    #[test]
    fn test_level_clear_rebuilds_field() {
        let mut round = Round::new(Tuning::default(), 8);
        round.on_pointer_move(600.0);
        round.on_pointer_up();
        round.ball.vel = Vec2::new(250.0, -300.0);
        let total = round.bricks.len();
        for id in 0..total - 1 {
            assert_eq!(
                round.on_collision(&Contact::new(Body::Ball, Body::Brick(id))),
                RoundPhase::Playing
            );
        }
        let score_before = round.state.score;

        let phase = round.on_collision(&Contact::new(Body::Ball, Body::Brick(total - 1)));
        assert_eq!(phase, RoundPhase::LevelClear);
        assert_eq!(round.bricks.active_count(), total);
        assert!(round.bricks.iter().all(|b| b.active));
        assert!(round.ball.attached);
        assert_eq!(round.ball.vel, Vec2::ZERO);
        assert_eq!(round.ball.pos, Vec2::new(600.0, 650.0));
        // Level is replayed, not advanced; score is kept
        assert_eq!(round.state.level, 1);
        assert!(round.state.score > score_before);
        assert_eq!(round.on_tick(), RoundPhase::Playing);
    }

    #[test]
    fn test_lost_threshold_follows_paddle_row() {
        // The loss line is the paddle row, not the bottom of the field
        let tuning = Tuning {
            paddle_y: 500.0,
            ..Tuning::default()
        };
        let mut round = Round::new(tuning, 5);
        round.on_pointer_up();
        round.ball.pos.y = 501.0;
        assert!(round.ball.pos.y < round.tuning.field_height);
        assert_eq!(round.on_tick(), RoundPhase::BallLost);
    }
}
