//! Draw surface that records calls, for tests

use super::{DrawSurface, Font};
use crate::Rgba;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect { x: f32, y: f32, w: f32, h: f32, color: Rgba },
    Circle { x: f32, y: f32, r: f32, color: Rgba },
    Text { text: String, x: f32, y: f32, color: Rgba, font: Font },
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub width: f32,
    pub height: f32,
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }
}

impl DrawSurface for Recorder {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.calls.push(DrawCall::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Rgba) {
        self.calls.push(DrawCall::Circle { x, y, r, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Rgba, font: &Font) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            color,
            font: font.clone(),
        });
    }
}
