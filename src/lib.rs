//! Brick Rally - a single-screen ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic gameplay (round state machine, collision rules, physics)
//! - `renderer`: Render data (vertices, palette, HUD text) built from round snapshots
//! - `audio`: Sound cue playback through a pluggable backend
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{ConfigError, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Paddle defaults (sprite is 104x24)
    pub const PADDLE_Y: f32 = 700.0;
    pub const PADDLE_HALF_WIDTH: f32 = 52.0;
    pub const PADDLE_HALF_HEIGHT: f32 = 12.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 11.0;
    /// Vertical gap between an attached ball and the paddle centre
    pub const BALL_REST_OFFSET: f32 = 50.0;
    /// Vertical launch speed (negative is up)
    pub const LAUNCH_VY: f32 = -300.0;
    /// Exclusive upper bound of the random horizontal launch speed
    pub const LAUNCH_MAX_VX: f32 = 100.0;
    /// Horizontal speed gained per pixel of off-centre paddle contact
    pub const DEFLECT_FACTOR: f32 = 10.0;
    /// Random sideways kick range for a dead-centre paddle hit
    pub const TIE_KICK_MIN: f32 = 5.0;
    pub const TIE_KICK_MAX: f32 = 250.0;

    /// Brick grid
    pub const BRICK_ROWS: usize = 10;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_WIDTH: f32 = 64.0;
    pub const BRICK_HEIGHT: f32 = 32.0;
    /// Top edge of the first brick row
    pub const BRICK_TOP: f32 = 50.0;

    /// Scoring
    pub const START_LIVES: u8 = 3;
    pub const BRICK_BASE_SCORE: u64 = 100;
    /// Bonus fraction of the base score per brick already in the combo
    pub const COMBO_STEP: f64 = 0.1;
}
