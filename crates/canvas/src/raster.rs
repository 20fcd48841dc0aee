//! Path and rectangle-outline rasterization
//!
//! Stroking works on flattened polylines: every line segment is rendered as
//! a capsule (per-pixel distance to the segment against the pen's
//! half-width). Consecutive capsules overlap at shared points, which
//! produces exactly the round caps and joins the pen specifies.

use glam::Vec2;

use crate::path::StrokePath;
use crate::pen::Pen;
use crate::surface::PaintSurface;
use crate::types::Rect;

/// Stroke an entire path onto the surface with the given pen
///
/// The whole path is rasterized on every call; committed pixels accumulate
/// on the surface, so re-stroking an extended path is idempotent for the
/// fully covered interior.
pub fn stroke_path(surface: &mut PaintSurface, path: &StrokePath, pen: &Pen) {
    stroke_polyline(surface, &path.flatten(), pen);
}

/// Stroke a rectangle outline onto the surface with the given pen
///
/// Inverted rectangles are drawn as given; the edges simply cross.
pub fn stroke_rect(surface: &mut PaintSurface, rect: &Rect, pen: &Pen) {
    let [tl, tr, br, bl] = rect.corners();
    stroke_segment(surface, tl, tr, pen);
    stroke_segment(surface, tr, br, pen);
    stroke_segment(surface, br, bl, pen);
    stroke_segment(surface, bl, tl, pen);
}

/// Stroke each consecutive pair of polyline points
///
/// Fewer than two points is not a strokable line and draws nothing.
fn stroke_polyline(surface: &mut PaintSurface, points: &[Vec2], pen: &Pen) {
    for pair in points.windows(2) {
        stroke_segment(surface, pair[0], pair[1], pen);
    }
}

/// Rasterize one segment as a capsule of the pen's half-width
fn stroke_segment(surface: &mut PaintSurface, a: Vec2, b: Vec2, pen: &Pen) {
    let radius = pen.radius();
    if radius <= 0.0 || pen.color[3] <= 0.0 {
        return;
    }

    // Bounding box, inflated by one pixel for the anti-aliased edge
    let x_min_f = (a.x.min(b.x) - radius - 1.0).floor();
    let y_min_f = (a.y.min(b.y) - radius - 1.0).floor();
    let x_max_f = (a.x.max(b.x) + radius + 1.0).ceil();
    let y_max_f = (a.y.max(b.y) + radius + 1.0).ceil();

    // Clamp to surface bounds
    let x_min = (x_min_f.max(0.0) as u32).min(surface.width);
    let y_min = (y_min_f.max(0.0) as u32).min(surface.height);
    let x_max = (x_max_f.max(0.0) as u32).min(surface.width);
    let y_max = (y_max_f.max(0.0) as u32).min(surface.height);

    if x_min >= x_max || y_min >= y_max {
        return;
    }

    for py in y_min..y_max {
        for px in x_min..x_max {
            // Distance from the pixel center to the segment
            let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
            let dist = distance_to_segment(p, a, b);

            let coverage = if pen.anti_alias {
                (radius + 0.5 - dist).clamp(0.0, 1.0)
            } else if dist <= radius {
                1.0
            } else {
                0.0
            };

            if coverage > 0.0 {
                surface.blend_pixel(px, py, pen.color, coverage);
            }
        }
    }
}

/// Distance from point `p` to the closed segment `a`-`b`
#[inline]
fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
