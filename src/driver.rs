//! Frame driver
//!
//! Owns the game state and runs simulation then render once per frame. There
//! is a single "running" state: no pause, no game over, no catch-up for
//! missed frames.

use std::time::Duration;

use crate::consts::FRAMES_PER_SEC;
use crate::renderer::{DrawSurface, render};
use crate::settings::Settings;
use crate::sim::{GameConfig, GameEvent, GameState, PaddleHandle, tick};

/// Nominal time between frames
pub const FRAME_INTERVAL: Duration = Duration::from_micros(1_000_000 / FRAMES_PER_SEC as u64);

/// Timer period for `setInterval`-style schedulers, in whole milliseconds
pub fn frame_interval_ms() -> i32 {
    (1000 / FRAMES_PER_SEC) as i32
}

pub struct FrameDriver {
    state: GameState,
    config: GameConfig,
    settings: Settings,
}

impl FrameDriver {
    pub fn new(width: f32, height: f32, seed: u64, settings: Settings) -> Self {
        let config = GameConfig::default();
        Self {
            state: GameState::new(width, height, &config, seed),
            config,
            settings,
        }
    }

    /// Size the court from the surface. The surface is only asked once.
    pub fn from_surface<S: DrawSurface + ?Sized>(surface: &S, seed: u64, settings: Settings) -> Self {
        let (width, height) = (surface.width(), surface.height());
        log::info!("Court {}x{}, seed {}", width, height, seed);
        Self::new(width, height, seed, settings)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Handle for the pointer-move listener
    pub fn user_paddle(&mut self) -> PaddleHandle<'_> {
        self.state.user_paddle_handle()
    }

    /// Run one frame: simulate, then paint onto `surface`
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> Vec<GameEvent> {
        let events = tick(&mut self.state, &self.config);
        self.log_events(&events);
        render(&self.state, &self.settings, surface);
        events
    }

    /// Run `frames` frames on a fixed sleep cadence.
    ///
    /// The sleep is not adjusted for the time the frame itself took.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_paced<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, frames: u64) {
        for _ in 0..frames {
            self.frame(surface);
            std::thread::sleep(FRAME_INTERVAL);
        }
    }

    fn log_events(&self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Scored { side } => log::info!(
                    "{:?} scores ({} - {})",
                    side,
                    self.state.user.score,
                    self.state.com.score
                ),
                GameEvent::PaddleHit { side, speed } => {
                    log::debug!("{:?} paddle hit, speed now {:.1}", side, speed)
                }
                GameEvent::WallBounce => {
                    log::trace!("Wall bounce at y={:.1}", self.state.ball.pos.y)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recorder::{DrawCall, Recorder};
    use crate::sim::Side;
    use glam::Vec2;

    fn driver() -> (FrameDriver, Recorder) {
        let rec = Recorder::new(800.0, 600.0);
        (FrameDriver::from_surface(&rec, 42, Settings::default()), rec)
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval_ms(), 16);
        assert_eq!(FRAME_INTERVAL.as_micros(), 16_666);
    }

    #[test]
    fn test_court_sized_from_surface() {
        let (driver, _) = driver();
        assert_eq!(driver.state().width, 800.0);
        assert_eq!(driver.state().height, 600.0);
        assert_eq!(driver.state().com.x, 800.0 - driver.config().paddle_width);
    }

    #[test]
    fn test_frame_simulates_then_renders() {
        let (mut driver, mut rec) = driver();
        let start = driver.state().ball.pos;

        driver.frame(&mut rec);

        assert_eq!(driver.state().time_ticks, 1);
        let moved = start + Vec2::splat(driver.config().initial_ball_speed);
        assert_eq!(driver.state().ball.pos, moved);
        // The ball is painted where the simulation left it
        match rec.calls.last() {
            Some(DrawCall::Circle { x, y, .. }) => assert_eq!(Vec2::new(*x, *y), moved),
            other => panic!("expected ball last, got {:?}", other),
        }
    }

    #[test]
    fn test_pointer_moves_user_paddle() {
        let (mut driver, mut rec) = driver();
        driver.user_paddle().follow_pointer(100.0);
        driver.frame(&mut rec);
        assert_eq!(driver.state().user.center_y(), 100.0);
    }

    #[test]
    fn test_unattended_game_is_won_by_computer() {
        let (mut driver, mut rec) = driver();
        // Park the user paddle off the court
        driver.user_paddle().follow_pointer(-1000.0);

        let mut scored = Vec::new();
        for _ in 0..2000 {
            rec.calls.clear();
            for event in driver.frame(&mut rec) {
                if let GameEvent::Scored { side } = event {
                    scored.push(side);
                }
            }
        }

        assert!(!scored.is_empty());
        assert!(scored.contains(&Side::Computer));
        let computer_points = scored.iter().filter(|s| **s == Side::Computer).count();
        assert_eq!(driver.state().com.score as usize, computer_points);
    }
}
