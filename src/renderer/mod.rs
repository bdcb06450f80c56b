//! Render data module
//!
//! Turns a round [`Snapshot`](crate::sim::Snapshot) into triangle lists and HUD
//! text. Drawing them is the host's job; nothing here touches a GPU.

pub mod hud;
pub mod palette;
pub mod shapes;
pub mod vertex;

pub use hud::{HUD_ORIGIN, hud_lines};
pub use palette::{BRICK_PALETTE, BrickColor};
pub use shapes::build_frame;
pub use vertex::{Vertex, as_bytes};
