//! Rendering
//!
//! The render step only talks to a [`DrawSurface`]. The WebGPU backend
//! implements it with [`VertexBatch`] and presents the batch through
//! [`RenderState`].

pub mod batch;
pub mod draw;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

#[cfg(test)]
pub(crate) mod recorder;

use serde::{Deserialize, Serialize};

use crate::Rgba;

pub use batch::VertexBatch;
pub use draw::render;
pub use pipeline::RenderState;

/// Font description passed along with text draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Pixel size
    pub size: f32,
    /// CSS-style weight, e.g. "bold"
    pub weight: String,
    pub family: String,
}

impl Font {
    pub fn is_bold(&self) -> bool {
        matches!(self.weight.as_str(), "bold" | "bolder" | "600" | "700" | "800" | "900")
    }
}

/// A 2D surface the game can paint on.
///
/// Coordinates are pixels with the origin at the top-left corner. Draw calls
/// are synchronous and cannot fail.
pub trait DrawSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);

    /// Draw `text` horizontally centered on `x` with its baseline at `y`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Rgba, font: &Font);
}
