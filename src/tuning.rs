//! Data-driven game balance
//!
//! Every gameplay number lives in [`Tuning`]. Defaults reproduce the classic
//! 800x800 layout; a JSON file can override any subset of fields.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error raised while loading or validating a tuning file
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read tuning file: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse tuning file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid tuning: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_y: f32,
    pub paddle_half_width: f32,
    pub paddle_half_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_rest_offset: f32,
    pub launch_vy: f32,
    pub launch_max_vx: f32,
    pub deflect_factor: f32,
    pub tie_kick_min: f32,
    pub tie_kick_max: f32,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_top: f32,

    // === Scoring ===
    pub start_lives: u8,
    pub brick_base_score: u64,
    pub combo_step: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_y: PADDLE_Y,
            paddle_half_width: PADDLE_HALF_WIDTH,
            paddle_half_height: PADDLE_HALF_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_rest_offset: BALL_REST_OFFSET,
            launch_vy: LAUNCH_VY,
            launch_max_vx: LAUNCH_MAX_VX,
            deflect_factor: DEFLECT_FACTOR,
            tie_kick_min: TIE_KICK_MIN,
            tie_kick_max: TIE_KICK_MAX,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_top: BRICK_TOP,

            start_lives: START_LIVES,
            brick_base_score: BRICK_BASE_SCORE,
            combo_step: COMBO_STEP,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check the values can produce a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(ConfigError::Invalid("field dimensions must be positive".into()));
        }
        if self.paddle_half_width <= 0.0 || self.paddle_half_width * 2.0 > self.field_width {
            return Err(ConfigError::Invalid(format!(
                "paddle half width {} does not fit a field {} wide",
                self.paddle_half_width, self.field_width
            )));
        }
        if self.paddle_y <= 0.0 || self.paddle_y >= self.field_height {
            return Err(ConfigError::Invalid(format!(
                "paddle row {} lies outside the field",
                self.paddle_y
            )));
        }
        if self.ball_rest_offset <= 0.0 || self.ball_rest_offset > self.paddle_y {
            return Err(ConfigError::Invalid("ball rest offset must place the ball above the paddle".into()));
        }
        if self.ball_radius <= 0.0 {
            return Err(ConfigError::Invalid("ball radius must be positive".into()));
        }
        if self.launch_vy >= 0.0 {
            return Err(ConfigError::Invalid("launch speed must point up (negative)".into()));
        }
        if self.launch_max_vx < 0.0 {
            return Err(ConfigError::Invalid("launch max vx must not be negative".into()));
        }
        if self.tie_kick_min <= 0.0 || self.tie_kick_max <= self.tie_kick_min {
            return Err(ConfigError::Invalid("tie kick range must be positive and non-empty".into()));
        }
        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(ConfigError::Invalid("brick grid must not be empty".into()));
        }
        if self.brick_cols as f32 * self.brick_width > self.field_width {
            return Err(ConfigError::Invalid(format!(
                "{} columns of {}px bricks overflow the field",
                self.brick_cols, self.brick_width
            )));
        }
        if self.brick_top + self.brick_rows as f32 * self.brick_height >= self.paddle_y {
            return Err(ConfigError::Invalid("brick grid overlaps the paddle row".into()));
        }
        if self.combo_step < 0.0 {
            return Err(ConfigError::Invalid("combo step must not be negative".into()));
        }
        Ok(())
    }

    /// Lowest and highest paddle centre positions
    pub fn paddle_range(&self) -> (f32, f32) {
        (
            self.paddle_half_width,
            self.field_width - self.paddle_half_width,
        )
    }
}
