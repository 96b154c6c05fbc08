//! Collision detection and response between the ball and the paddles
//!
//! Both shapes are treated as axis-aligned boxes: the ball as the square
//! `pos ± radius`, the paddle as `x..x+width` by `y..y+height`.

use glam::Vec2;

use super::state::{Ball, Paddle};

/// Strict AABB overlap between the ball's bounding square and a paddle.
///
/// Touching edges do not count as a hit.
#[inline]
pub fn collides(ball: &Ball, paddle: &Paddle) -> bool {
    ball.right() > paddle.x
        && ball.left() < paddle.x + paddle.width
        && ball.bottom() > paddle.y
        && ball.top() < paddle.y + paddle.height
}

/// Signed offset of the ball from the paddle's vertical center
#[inline]
pub fn collide_point(ball: &Ball, paddle: &Paddle) -> f32 {
    ball.pos.y - paddle.center_y()
}

/// Map a hit offset linearly onto a reflection angle.
///
/// An offset of `±height/2` (the paddle tips) gives `±max_angle`; the
/// center gives 0. Offsets beyond the tips scale past `max_angle`.
#[inline]
pub fn reflection_angle(collide_point: f32, paddle_height: f32, max_angle: f32) -> f32 {
    max_angle * (collide_point / (paddle_height / 2.0))
}

/// Outgoing velocity for a bounce at `angle`.
///
/// `direction` is +1 for a ball leaving rightward, -1 for leftward.
#[inline]
pub fn bounce_velocity(angle: f32, speed: f32, direction: f32) -> Vec2 {
    Vec2::new(direction * speed * angle.cos(), speed * angle.sin())
}
