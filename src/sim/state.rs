//! Game state and core simulation types
//!
//! Paddles and the ball are created once from the surface size and then
//! mutated in place for the lifetime of the process.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{Rgba, colors};

/// Which side of the court an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the pointer
    User,
    /// Right paddle, driven by the tracking controller
    Computer,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// `side` won the point and the ball was re-served
    Scored { side: Side },
    /// Ball bounced off a paddle; `speed` is the speed after the bounce
    PaddleHit { side: Side, speed: f32 },
    /// Ball hit the top or bottom wall
    WallBounce,
}

/// Gameplay constants, built once and passed to every component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub initial_ball_speed: f32,
    pub max_ball_speed: f32,
    /// Added to the ball speed on every paddle bounce
    pub speed_increment: f32,
    /// Fraction of the remaining distance the computer paddle covers per frame
    pub tracking_gain: f32,
    /// Largest reflection angle, reached at the paddle tips
    pub max_bounce_angle: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_radius: BALL_RADIUS,
            initial_ball_speed: INITIAL_BALL_SPEED,
            max_ball_speed: MAX_BALL_SPEED,
            speed_increment: BALL_SPEED_INCREMENT,
            tracking_gain: COM_TRACKING_GAIN,
            max_bounce_angle: std::f32::consts::FRAC_PI_4,
        }
    }
}

/// A paddle. `x` never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
    pub score: u32,
}

impl Paddle {
    /// Paddle at `x`, vertically centered on a surface of height `surface_height`
    pub fn new(x: f32, surface_height: f32, config: &GameConfig) -> Self {
        Self {
            x,
            y: surface_height / 2.0 - config.paddle_height / 2.0,
            width: config.paddle_width,
            height: config.paddle_height,
            color: colors::WHITE,
            score: 0,
        }
    }

    /// Vertical center of the paddle
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed applied on the next paddle bounce
    pub speed: f32,
    pub color: Rgba,
}

impl Ball {
    /// Ball at the surface center, heading down-right at the initial speed
    pub fn new(surface_width: f32, surface_height: f32, config: &GameConfig) -> Self {
        let speed = config.initial_ball_speed;
        Self {
            pos: Vec2::new(surface_width / 2.0, surface_height / 2.0),
            vel: Vec2::new(speed, speed),
            radius: config.ball_radius,
            speed,
            color: colors::WHITE,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Complete game state for one surface
#[derive(Debug, Clone)]
pub struct GameState {
    /// Surface size, fixed at startup
    pub width: f32,
    pub height: f32,
    pub user: Paddle,
    pub com: Paddle,
    pub ball: Ball,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Lay out paddles and ball for a `width` x `height` surface
    pub fn new(width: f32, height: f32, config: &GameConfig, seed: u64) -> Self {
        Self {
            width,
            height,
            user: Paddle::new(0.0, height, config),
            com: Paddle::new(width - config.paddle_width, height, config),
            ball: Ball::new(width, height, config),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::User => &self.user,
            Side::Computer => &self.com,
        }
    }

    pub(crate) fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::User => &mut self.user,
            Side::Computer => &mut self.com,
        }
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}
