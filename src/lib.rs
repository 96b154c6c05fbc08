//! Canvas Pong - classic two-paddle Pong against a tracking computer paddle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, scoring)
//! - `renderer`: Drawing surface abstraction, render step, WebGPU backend
//! - `driver`: Fixed-interval frame driver
//! - `settings`: Visual style preferences

pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::FrameDriver;
pub use settings::Settings;

/// RGBA color, components in 0..=1
pub type Rgba = [f32; 4];

/// Named colors used by the game
pub mod colors {
    use super::Rgba;

    pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];
    pub const GRAY: Rgba = [0.5, 0.5, 0.5, 1.0];
}

/// Game configuration constants
pub mod consts {
    /// Frames per nominal second
    pub const FRAMES_PER_SEC: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 18.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;

    /// Ball defaults (speeds are pixels per frame)
    pub const BALL_RADIUS: f32 = 12.0;
    pub const INITIAL_BALL_SPEED: f32 = 8.0;
    pub const MAX_BALL_SPEED: f32 = 60.0;
    /// Speed added on every paddle bounce
    pub const BALL_SPEED_INCREMENT: f32 = 0.2;

    /// Computer paddle closes this fraction of the gap to the ball each frame
    pub const COM_TRACKING_GAIN: f32 = 0.1;
}
