//! Pen style for strokes and the decorative frame
//!
//! There is a single pen for the process lifetime: fixed color and width,
//! round caps and joins, stroke-only. Kept as a struct so the rasterizer and
//! compositor share one description of how marks are styled.

use crate::constants::{PAINT_COLOR, STROKE_WIDTH};
use crate::types::{LineCap, LineJoin, PaintStyle};

/// How strokes are styled when drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    /// Stroke color in RGBA [r, g, b, a]
    pub color: [f32; 4],
    /// Stroke width in logical pixels
    pub width: f32,
    /// Shape of stroke endpoints
    pub cap: LineCap,
    /// How curve segments join along the stroke
    pub join: LineJoin,
    /// Stroke-only; the pen never fills
    pub style: PaintStyle,
    /// Smooth edges without affecting shape
    pub anti_alias: bool,
    /// Down-sample colors with higher precision than the device
    pub dither: bool,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: PAINT_COLOR,
            width: STROKE_WIDTH,
            cap: LineCap::Round,
            join: LineJoin::Round,
            style: PaintStyle::Stroke,
            anti_alias: true,
            dither: true,
        }
    }
}

impl Pen {
    /// Create a pen with the given color, keeping the default styling
    pub fn with_color(color: [f32; 4]) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Stroke half-width, the radius used by the rasterizer
    #[inline]
    pub fn radius(&self) -> f32 {
        self.width / 2.0
    }
}
