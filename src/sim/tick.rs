//! Per-frame simulation step
//!
//! One call to [`tick`] advances the game by exactly one frame. There is no
//! sub-stepping and no time delta: velocities are in pixels per frame.

use rand::Rng;

use super::collision::{bounce_velocity, collide_point, collides, reflection_angle};
use super::state::{GameConfig, GameEvent, GameState, Side};

/// Advance the game state by one frame and report what happened.
///
/// Order: scoring check, integration, computer tracking, wall reflection,
/// paddle collision.
pub fn tick(state: &mut GameState, config: &GameConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    if let Some(side) = check_score(state, config) {
        events.push(GameEvent::Scored { side });
    }

    integrate(state);
    track_ball(state, config);

    if reflect_walls(state) {
        events.push(GameEvent::WallBounce);
    }

    if let Some(side) = resolve_paddle_hit(state, config) {
        events.push(GameEvent::PaddleHit {
            side,
            speed: state.ball.speed,
        });
    }

    events
}

/// Award a point if the ball has left the court, then re-serve.
///
/// The left edge is checked first; at most one side scores per call.
pub(crate) fn check_score(state: &mut GameState, config: &GameConfig) -> Option<Side> {
    let side = if state.ball.left() < 0.0 {
        Side::Computer
    } else if state.ball.right() > state.width {
        Side::User
    } else {
        return None;
    };

    state.paddle_mut(side).score += 1;
    reset_ball(state, config);
    Some(side)
}

/// Re-serve from the center line toward the other side.
///
/// `vel.y` is deliberately left as it was before the point.
pub(crate) fn reset_ball(state: &mut GameState, config: &GameConfig) {
    let radius = state.ball.radius;
    let (low, high) = (radius, state.height - radius);
    let y = if high > low {
        state.rng().random_range(low..=high)
    } else {
        state.height / 2.0
    };

    let ball = &mut state.ball;
    ball.pos.x = state.width / 2.0;
    ball.pos.y = y;
    ball.vel.x = -ball.vel.x;
    ball.speed = config.initial_ball_speed;
}

pub(crate) fn integrate(state: &mut GameState) {
    let ball = &mut state.ball;
    ball.pos += ball.vel;
}

/// Move the computer paddle a fixed fraction of the way toward the ball.
pub(crate) fn track_ball(state: &mut GameState, config: &GameConfig) {
    let error = state.ball.pos.y - state.com.center_y();
    state.com.y += error * config.tracking_gain;
}

/// Flip `vel.y` when the ball touches the top or crosses the bottom.
///
/// Position is not corrected, so the ball may overlap the wall for a frame.
pub(crate) fn reflect_walls(state: &mut GameState) -> bool {
    let ball = &mut state.ball;
    if ball.top() <= 0.0 || ball.bottom() > state.height {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Bounce the ball off whichever paddle is on its half of the court.
pub(crate) fn resolve_paddle_hit(state: &mut GameState, config: &GameConfig) -> Option<Side> {
    let (side, direction) = if state.ball.right() < state.width / 2.0 {
        (Side::User, 1.0)
    } else {
        (Side::Computer, -1.0)
    };

    let paddle = state.paddle(side);
    if !collides(&state.ball, paddle) {
        return None;
    }

    let angle = reflection_angle(
        collide_point(&state.ball, paddle),
        paddle.height,
        config.max_bounce_angle,
    );

    let ball = &mut state.ball;
    ball.vel = bounce_velocity(angle, ball.speed, direction);
    ball.speed = (ball.speed + config.speed_increment).min(config.max_ball_speed);
    Some(side)
}
