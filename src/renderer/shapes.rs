//! Shape generation for 2D primitives
//!
//! Everything is tessellated into triangle lists in pixel coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::Rgba;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: Rgba) -> [Vertex; 6] {
    let (x0, y0, x1, y1) = (x, y, x + width, y + height);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Rgba, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Enough segments that a circle of `radius` pixels looks round
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 1.5) as u32).clamp(12, 64)
}

// Seven-segment layout, one bit per segment:
//
//    -a-
//   f   b
//    -g-
//   e   c
//    -d-
const SEG_A: u8 = 1 << 0;
const SEG_B: u8 = 1 << 1;
const SEG_C: u8 = 1 << 2;
const SEG_D: u8 = 1 << 3;
const SEG_E: u8 = 1 << 4;
const SEG_F: u8 = 1 << 5;
const SEG_G: u8 = 1 << 6;

const DIGITS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_G | SEG_E | SEG_D,
    SEG_A | SEG_B | SEG_G | SEG_C | SEG_D,
    SEG_F | SEG_G | SEG_B | SEG_C,
    SEG_A | SEG_F | SEG_G | SEG_C | SEG_D,
    SEG_A | SEG_F | SEG_G | SEG_E | SEG_C | SEG_D,
    SEG_A | SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
];

/// Size of one glyph cell for a given font
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Horizontal advance per character
    pub advance: f32,
    /// Drawn glyph width (less than the advance)
    pub width: f32,
    /// Height from baseline to the top of a digit
    pub height: f32,
    /// Stroke thickness
    pub stroke: f32,
}

impl GlyphMetrics {
    /// Monospace metrics scaled from a pixel font size
    pub fn for_size(size: f32, bold: bool) -> Self {
        Self {
            advance: size * 0.6,
            width: size * 0.45,
            height: size * 0.62,
            stroke: size * if bold { 0.1 } else { 0.06 },
        }
    }
}

/// Generate vertices for one digit with its baseline-left corner at `origin`.
///
/// Returns `None` for anything but `'0'..='9'`.
pub fn digit(ch: char, origin: Vec2, metrics: &GlyphMetrics, color: Rgba) -> Option<Vec<Vertex>> {
    let mask = DIGITS[ch.to_digit(10)? as usize];

    let GlyphMetrics {
        width: w,
        height: h,
        stroke: t,
        ..
    } = *metrics;
    let left = origin.x;
    let top = origin.y - h;
    let mid = top + (h - t) / 2.0;
    let half = (h + t) / 2.0;

    // (segment, x, y, width, height)
    let segments = [
        (SEG_A, left, top, w, t),
        (SEG_B, left + w - t, top, t, half),
        (SEG_C, left + w - t, mid, t, half),
        (SEG_D, left, top + h - t, w, t),
        (SEG_E, left, mid, t, half),
        (SEG_F, left, top, t, half),
        (SEG_G, left, mid, w, t),
    ];

    let mut vertices = Vec::with_capacity(segments.len() * 6);
    for (bit, x, y, sw, sh) in segments {
        if mask & bit != 0 {
            vertices.extend_from_slice(&rect(x, y, sw, sh, color));
        }
    }
    Some(vertices)
}
