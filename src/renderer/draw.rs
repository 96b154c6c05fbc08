//! Render step: paint the current game state onto a surface
//!
//! Reads the state only. Draw order is fixed: background, net, scores,
//! paddles, ball.

use super::DrawSurface;
use crate::settings::Settings;
use crate::sim::{GameState, Paddle};

/// Paint one frame
pub fn render<S: DrawSurface + ?Sized>(state: &GameState, settings: &Settings, surface: &mut S) {
    let (w, h) = (state.width, state.height);

    surface.fill_rect(0.0, 0.0, w, h, settings.background);

    draw_net(state, settings, surface);

    surface.fill_text(
        &state.user.score.to_string(),
        w / 4.0,
        h / 2.0,
        settings.score_color,
        &settings.score_font,
    );
    surface.fill_text(
        &state.com.score.to_string(),
        3.0 * w / 4.0,
        h / 2.0,
        settings.score_color,
        &settings.score_font,
    );

    draw_paddle(&state.user, surface);
    draw_paddle(&state.com, surface);

    let ball = &state.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, ball.color);
}

/// Smallest dash pitch the net is drawn with, in pixels
const MIN_NET_SPACING: f32 = 1.0;

/// Dashed line down the middle, from the top edge to the bottom edge.
///
/// A non-positive or non-finite spacing hides the net; smaller positive
/// spacings are raised to [`MIN_NET_SPACING`].
fn draw_net<S: DrawSurface + ?Sized>(state: &GameState, settings: &Settings, surface: &mut S) {
    let spacing = settings.net_spacing;
    if !spacing.is_finite() || spacing <= 0.0 {
        return;
    }
    let spacing = spacing.max(MIN_NET_SPACING);

    let x = state.width / 2.0 - settings.net_width / 2.0;
    let count = (state.height / spacing).floor() as u32;
    for i in 0..=count {
        surface.fill_rect(
            x,
            i as f32 * spacing,
            settings.net_width,
            settings.net_segment_height,
            settings.net_color,
        );
    }
}

fn draw_paddle<S: DrawSurface + ?Sized>(paddle: &Paddle, surface: &mut S) {
    surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, paddle.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::renderer::recorder::{DrawCall, Recorder};
    use crate::sim::GameConfig;

    fn setup() -> (GameState, Settings, Recorder) {
        let state = GameState::new(800.0, 600.0, &GameConfig::default(), 1);
        (state, Settings::default(), Recorder::new(800.0, 600.0))
    }

    #[test]
    fn test_first_call_clears_whole_surface() {
        let (state, settings, mut rec) = setup();
        render(&state, &settings, &mut rec);
        assert_eq!(
            rec.calls[0],
            DrawCall::Rect {
                x: 0.0,
                y: 0.0,
                w: 800.0,
                h: 600.0,
                color: colors::BLACK,
            }
        );
    }

    #[test]
    fn test_net_covers_full_height() {
        let (state, settings, mut rec) = setup();
        render(&state, &settings, &mut rec);

        let net: Vec<_> = rec
            .calls
            .iter()
            .skip(1)
            .take_while(|c| matches!(c, DrawCall::Rect { .. }))
            .collect();
        // 0, 15, ..., 600
        assert_eq!(net.len(), 41);
        match net.last() {
            Some(DrawCall::Rect { x, y, w, h, .. }) => {
                assert_eq!(*x, 397.5);
                assert_eq!(*y, 600.0);
                assert_eq!(*w, 5.0);
                assert_eq!(*h, 10.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_draw_order() {
        let (mut state, settings, mut rec) = setup();
        state.user.score = 3;
        state.com.score = 11;
        render(&state, &settings, &mut rec);

        let n = rec.calls.len();
        let tail = &rec.calls[n - 5..];

        match &tail[0] {
            DrawCall::Text { text, x, y, color, .. } => {
                assert_eq!(text, "3");
                assert_eq!((*x, *y), (200.0, 300.0));
                assert_eq!(*color, colors::GRAY);
            }
            other => panic!("expected user score, got {:?}", other),
        }
        match &tail[1] {
            DrawCall::Text { text, x, .. } => {
                assert_eq!(text, "11");
                assert_eq!(*x, 600.0);
            }
            other => panic!("expected computer score, got {:?}", other),
        }
        assert_eq!(
            tail[2],
            DrawCall::Rect {
                x: state.user.x,
                y: state.user.y,
                w: state.user.width,
                h: state.user.height,
                color: state.user.color,
            }
        );
        assert_eq!(
            tail[3],
            DrawCall::Rect {
                x: state.com.x,
                y: state.com.y,
                w: state.com.width,
                h: state.com.height,
                color: state.com.color,
            }
        );
        assert_eq!(
            tail[4],
            DrawCall::Circle {
                x: state.ball.pos.x,
                y: state.ball.pos.y,
                r: state.ball.radius,
                color: state.ball.color,
            }
        );
    }

    #[test]
    fn test_render_does_not_touch_state() {
        let (state, settings, mut rec) = setup();
        let before = state.clone();
        render(&state, &settings, &mut rec);
        assert_eq!(state.ball, before.ball);
        assert_eq!(state.user, before.user);
        assert_eq!(state.com, before.com);
    }

    #[test]
    fn test_zero_spacing_skips_net() {
        let (state, mut settings, mut rec) = setup();
        settings.net_spacing = 0.0;
        render(&state, &settings, &mut rec);
        // clear, two scores, two paddles, ball
        assert_eq!(rec.calls.len(), 6);
    }

    #[test]
    fn test_tiny_stored_spacing_is_clamped() {
        let (state, _, mut rec) = setup();
        let settings = Settings::from_json(r#"{ "net_spacing": 1e-9 }"#).unwrap();
        render(&state, &settings, &mut rec);

        // One dash per pixel row from 0 to 600, plus clear, scores, paddles, ball
        assert_eq!(rec.calls.len(), 601 + 6);
        match &rec.calls[601] {
            DrawCall::Rect { y, .. } => assert_eq!(*y, 600.0),
            other => panic!("expected last net dash, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_spacing_skips_net() {
        let (state, mut settings, mut rec) = setup();
        settings.net_spacing = f32::INFINITY;
        render(&state, &settings, &mut rec);
        assert_eq!(rec.calls.len(), 6);

        rec.calls.clear();
        settings.net_spacing = f32::NAN;
        render(&state, &settings, &mut rec);
        assert_eq!(rec.calls.len(), 6);
    }
}
