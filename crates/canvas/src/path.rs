//! Stroke paths built from quadratic Bezier segments
//!
//! A path records what is being drawn: one starting point followed by
//! quadratic segments. The rasterizer consumes paths by flattening them
//! into polylines.

use glam::Vec2;

/// Maximum line segments a single quadratic segment flattens into.
const MAX_FLATTEN_STEPS: usize = 64;

/// One path verb
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathVerb {
    /// Move the cursor without drawing
    MoveTo(Vec2),
    /// Quadratic Bezier from the cursor toward `ctrl`, ending at `end`
    QuadTo { ctrl: Vec2, end: Vec2 },
}

/// A path under construction while following the user's touch
#[derive(Debug, Clone, Default)]
pub struct StrokePath {
    verbs: Vec<PathVerb>,
}

impl StrokePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all recorded verbs
    pub fn reset(&mut self) {
        self.verbs.clear();
    }

    /// Move the cursor to `point` without drawing
    pub fn move_to(&mut self, point: Vec2) {
        self.verbs.push(PathVerb::MoveTo(point));
    }

    /// Add a quadratic Bezier from the cursor, approaching `ctrl` and
    /// ending at `end`
    pub fn quad_to(&mut self, ctrl: Vec2, end: Vec2) {
        self.verbs.push(PathVerb::QuadTo { ctrl, end });
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Number of quadratic segments recorded so far
    pub fn segment_count(&self) -> usize {
        self.verbs
            .iter()
            .filter(|v| matches!(v, PathVerb::QuadTo { .. }))
            .count()
    }

    #[inline]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    /// Position of the cursor after the last verb, if any
    pub fn last_point(&self) -> Option<Vec2> {
        self.verbs.last().map(|v| match v {
            PathVerb::MoveTo(p) => *p,
            PathVerb::QuadTo { end, .. } => *end,
        })
    }

    /// Flatten the path into a polyline
    ///
    /// A path with no quadratic segments flattens to at most one point and
    /// therefore draws nothing when stroked.
    pub fn flatten(&self) -> Vec<Vec2> {
        let mut points: Vec<Vec2> = Vec::new();
        for verb in &self.verbs {
            match verb {
                PathVerb::MoveTo(p) => {
                    points.clear();
                    points.push(*p);
                }
                PathVerb::QuadTo { ctrl, end } => {
                    let start = *points.last().unwrap_or(ctrl);
                    flatten_quad(start, *ctrl, *end, &mut points);
                }
            }
        }
        points
    }
}

/// Append the flattened form of one quadratic segment, excluding `p0`
fn flatten_quad(p0: Vec2, ctrl: Vec2, p1: Vec2, out: &mut Vec<Vec2>) {
    // Step count scales with the control polygon length so short segments
    // stay cheap and long ones stay smooth.
    let polygon_len = p0.distance(ctrl) + ctrl.distance(p1);
    let steps = ((polygon_len / 3.0).ceil() as usize).clamp(1, MAX_FLATTEN_STEPS);

    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        out.push(eval_quad(p0, ctrl, p1, t));
    }
}

/// Evaluate a quadratic Bezier at parameter `t` in [0, 1]
#[inline]
fn eval_quad(p0: Vec2, ctrl: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + ctrl * (2.0 * u * t) + p1 * (t * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_starts_empty() {
        let path = StrokePath::new();
        assert!(path.is_empty());
        assert_eq!(path.segment_count(), 0);
        assert_eq!(path.last_point(), None);
        assert!(path.flatten().is_empty());
    }

    #[test]
    fn test_move_to_only_draws_nothing() {
        let mut path = StrokePath::new();
        path.move_to(Vec2::new(10.0, 10.0));

        assert!(!path.is_empty());
        assert_eq!(path.segment_count(), 0);
        // A single point is not a strokable polyline
        assert_eq!(path.flatten().len(), 1);
    }

    #[test]
    fn test_quad_to_records_segments() {
        let mut path = StrokePath::new();
        path.move_to(Vec2::ZERO);
        path.quad_to(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        path.quad_to(Vec2::new(10.0, 20.0), Vec2::new(20.0, 20.0));

        assert_eq!(path.segment_count(), 2);
        assert_eq!(path.last_point(), Some(Vec2::new(20.0, 20.0)));
    }

    #[test]
    fn test_flatten_endpoints() {
        let mut path = StrokePath::new();
        path.move_to(Vec2::ZERO);
        path.quad_to(Vec2::new(50.0, 0.0), Vec2::new(50.0, 50.0));

        let points = path.flatten();
        assert!(points.len() >= 2);
        assert_eq!(points[0], Vec2::ZERO);
        let last = *points.last().unwrap();
        assert!(last.distance(Vec2::new(50.0, 50.0)) < 0.001);
    }

    #[test]
    fn test_flatten_curve_stays_inside_control_polygon() {
        // The convex hull property: every flattened point lies within the
        // bounding box of the control points.
        let p0 = Vec2::new(0.0, 0.0);
        let ctrl = Vec2::new(40.0, 80.0);
        let p1 = Vec2::new(80.0, 0.0);

        let mut path = StrokePath::new();
        path.move_to(p0);
        path.quad_to(ctrl, p1);

        for point in path.flatten() {
            assert!(point.x >= 0.0 && point.x <= 80.0);
            assert!(point.y >= 0.0 && point.y <= 80.0);
        }
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut path = StrokePath::new();
        path.move_to(Vec2::ZERO);
        path.quad_to(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));

        path.reset();
        assert!(path.is_empty());
        assert_eq!(path.segment_count(), 0);
    }
}
