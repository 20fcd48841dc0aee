/// Pen stroke width in logical pixels.
pub const STROKE_WIDTH: f32 = 12.0;

/// Inset of the decorative frame from the surface edges.
pub const FRAME_INSET: f32 = 40.0;

/// Default touch tolerance in logical pixels.
///
/// Distance a touch may wander before a move counts as motion rather than
/// jitter. 8.0 matches the Android ViewConfiguration touch-slop convention;
/// hosts with a platform-reported value should pass it via
/// [`crate::view::CanvasView::with_tolerance`].
pub const DEFAULT_TOUCH_TOLERANCE: f32 = 8.0;

/// Surface background color (opaque white).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Pen color (opaque #26c6da).
pub const PAINT_COLOR: [f32; 4] = [0.149, 0.776, 0.855, 1.0];
