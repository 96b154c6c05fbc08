//! CPU-side draw batch for the WebGPU backend
//!
//! Collects draw calls as triangles in pixel coordinates. An opaque rectangle
//! covering the whole surface discards everything drawn before it and becomes
//! the clear color, so a frame that starts by clearing never accumulates.

use glam::Vec2;

use super::shapes::{self, GlyphMetrics};
use super::vertex::Vertex;
use super::{DrawSurface, Font};
use crate::{Rgba, colors};

#[derive(Debug, Clone)]
pub struct VertexBatch {
    width: f32,
    height: f32,
    clear_color: Rgba,
    vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            clear_color: colors::BLACK,
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear_color(&self) -> Rgba {
        self.clear_color
    }

    /// Drop all queued vertices
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    fn covers_surface(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        x <= 0.0 && y <= 0.0 && x + width >= self.width && y + height >= self.height
    }
}

impl DrawSurface for VertexBatch {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        if color[3] >= 1.0 && self.covers_surface(x, y, width, height) {
            self.vertices.clear();
            self.clear_color = color;
            return;
        }
        self.vertices
            .extend_from_slice(&shapes::rect(x, y, width, height, color));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        let segments = shapes::circle_segments(radius);
        self.vertices
            .extend(shapes::circle(Vec2::new(x, y), radius, color, segments));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Rgba, font: &Font) {
        let metrics = GlyphMetrics::for_size(font.size, font.is_bold());
        let count = text.chars().count() as f32;
        // Center the run of advances, then center each glyph in its cell
        let start = x - count * metrics.advance / 2.0;
        let inset = (metrics.advance - metrics.width) / 2.0;

        for (i, ch) in text.chars().enumerate() {
            let origin = Vec2::new(start + i as f32 * metrics.advance + inset, y);
            match shapes::digit(ch, origin, &metrics, color) {
                Some(glyph) => self.vertices.extend(glyph),
                None => log::trace!("No glyph for {:?}", ch),
            }
        }
    }
}
