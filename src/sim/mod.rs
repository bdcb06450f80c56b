//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seedable RNG only
//! - Stable contact order (walls, paddle, bricks by index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod manager;
pub mod physics;
pub mod resolver;
pub mod round;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionResult, box_collision, reflect_velocity};
pub use manager::RoundPhase;
pub use physics::{ArcadePhysics, Body, Contact, Physics, Wall, WorldBounds};
pub use resolver::{CollisionKind, Resolution, brick_score, paddle_deflection, resolve_collision};
pub use round::{Hud, Round, Snapshot};
pub use state::{Ball, Brick, BrickField, Cue, GameState, PALETTE_SIZE, Paddle, RngState};
pub use tick::{TickInput, tick};
