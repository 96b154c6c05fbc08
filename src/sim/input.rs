//! Pointer input
//!
//! The pointer handler only ever writes the user paddle's `y`. It gets a
//! [`PaddleHandle`] borrowing that one field, never the whole game state.

use super::state::GameState;

/// Mutable view of the user paddle's vertical position
#[derive(Debug)]
pub struct PaddleHandle<'a> {
    y: &'a mut f32,
    height: f32,
}

impl<'a> PaddleHandle<'a> {
    pub fn new(y: &'a mut f32, height: f32) -> Self {
        Self { y, height }
    }

    /// Center the paddle on `pointer_y` (surface-relative).
    ///
    /// Not clamped: the paddle may be pushed partly or fully off the surface.
    pub fn follow_pointer(&mut self, pointer_y: f32) {
        *self.y = pointer_y - self.height / 2.0;
    }
}

impl GameState {
    /// Handle for the pointer-move listener
    pub fn user_paddle_handle(&mut self) -> PaddleHandle<'_> {
        let height = self.user.height;
        PaddleHandle::new(&mut self.user.y, height)
    }
}

#[cfg(test)]
mod tests {
    use crate::sim::state::{GameConfig, GameState};

    #[test]
    fn test_follow_pointer_centers_paddle() {
        let mut state = GameState::new(800.0, 600.0, &GameConfig::default(), 3);
        state.user_paddle_handle().follow_pointer(200.0);
        assert_eq!(state.user.y, 200.0 - state.user.height / 2.0);
        assert_eq!(state.user.center_y(), 200.0);
    }

    #[test]
    fn test_follow_pointer_touches_only_user_y() {
        let mut state = GameState::new(800.0, 600.0, &GameConfig::default(), 3);
        let before = state.clone();
        state.user_paddle_handle().follow_pointer(10.0);

        assert_eq!(state.user.x, before.user.x);
        assert_eq!(state.user.score, before.user.score);
        assert_eq!(state.com, before.com);
        assert_eq!(state.ball, before.ball);
    }

    #[test]
    fn test_follow_pointer_is_unclamped() {
        let mut state = GameState::new(800.0, 600.0, &GameConfig::default(), 3);
        state.user_paddle_handle().follow_pointer(-50.0);
        assert_eq!(state.user.y, -50.0 - state.user.height / 2.0);

        state.user_paddle_handle().follow_pointer(900.0);
        assert!(state.user.y > state.height);
    }
}
