//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{bounce_velocity, collide_point, collides, reflection_angle};
pub use input::PaddleHandle;
pub use state::{Ball, GameConfig, GameEvent, GameState, Paddle, Side};
pub use tick::tick;
