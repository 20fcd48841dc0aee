//! Stroke session state machine
//!
//! One session spans one touch-down-to-touch-up gesture. It owns the
//! in-progress path and the last accepted point, and applies the tolerance
//! check that separates deliberate motion from finger jitter.

use glam::Vec2;
use tracing::debug;

use crate::path::StrokePath;

/// In-progress stroke scoped to a single down -> up cycle
#[derive(Debug, Clone)]
pub struct StrokeSession {
    path: StrokePath,
    /// Last accepted point; start of the next curve segment
    current: Vec2,
    /// Minimum travel distance before a move counts as motion
    tolerance: f32,
}

impl StrokeSession {
    /// Begin a stroke at the touch-down position
    pub fn begin(at: Vec2, tolerance: f32) -> Self {
        debug!("stroke begin at ({:.1}, {:.1})", at.x, at.y);
        let mut path = StrokePath::new();
        path.move_to(at);
        Self {
            path,
            current: at,
            tolerance,
        }
    }

    /// Feed a touch-move sample into the stroke
    ///
    /// Samples within the tolerance of the last accepted point are ignored
    /// entirely: no path mutation, and the caller must not rasterize or
    /// request a repaint. Accepted samples append a quadratic segment whose
    /// control point is the previous position and whose endpoint is the
    /// midpoint between it and `to`; the resulting curve lags one sample
    /// behind the raw input in exchange for smoothness.
    ///
    /// Returns true when the sample was accepted.
    pub fn extend(&mut self, to: Vec2) -> bool {
        let dx = (to.x - self.current.x).abs();
        let dy = (to.y - self.current.y).abs();
        if dx < self.tolerance && dy < self.tolerance {
            return false;
        }

        let midpoint = (self.current + to) / 2.0;
        self.path.quad_to(self.current, midpoint);
        self.current = to;
        debug!(
            "stroke extend to ({:.1}, {:.1}), {} segments",
            to.x,
            to.y,
            self.path.segment_count()
        );
        true
    }

    /// The accumulated path
    #[inline]
    pub fn path(&self) -> &StrokePath {
        &self.path
    }

    /// Last accepted point
    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// Number of committed curve segments
    pub fn segment_count(&self) -> usize {
        self.path.segment_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathVerb;

    const TOL: f32 = 8.0;

    #[test]
    fn test_begin_moves_without_drawing() {
        let session = StrokeSession::begin(Vec2::new(10.0, 10.0), TOL);
        assert_eq!(session.segment_count(), 0);
        assert_eq!(session.current(), Vec2::new(10.0, 10.0));
        assert_eq!(
            session.path().verbs(),
            &[PathVerb::MoveTo(Vec2::new(10.0, 10.0))]
        );
    }

    #[test]
    fn test_sub_tolerance_jitter_ignored() {
        let mut session = StrokeSession::begin(Vec2::new(5.0, 5.0), TOL);

        assert!(!session.extend(Vec2::new(6.0, 6.0)));
        assert!(!session.extend(Vec2::new(5.0 + TOL - 0.5, 5.0)));

        // Path and accepted point unchanged
        assert_eq!(session.segment_count(), 0);
        assert_eq!(session.current(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_single_axis_travel_accepted() {
        // Tolerance applies per axis: exceeding it on either axis counts.
        let mut session = StrokeSession::begin(Vec2::ZERO, TOL);
        assert!(session.extend(Vec2::new(0.0, TOL + 1.0)));
        assert_eq!(session.segment_count(), 1);
    }

    #[test]
    fn test_extend_commits_midpoint_segment() {
        let start = Vec2::new(10.0, 10.0);
        let next = Vec2::new(30.0, 10.0);
        let mut session = StrokeSession::begin(start, TOL);

        assert!(session.extend(next));

        // Control point is the previous position, endpoint the midpoint
        assert_eq!(
            session.path().verbs()[1],
            PathVerb::QuadTo {
                ctrl: start,
                end: Vec2::new(20.0, 10.0),
            }
        );
        // The accepted point tracks the raw input, not the midpoint
        assert_eq!(session.current(), next);
    }

    #[test]
    fn test_two_accepted_moves() {
        let mut session = StrokeSession::begin(Vec2::new(10.0, 10.0), TOL);

        assert!(session.extend(Vec2::new(10.0, 10.0 + TOL + 1.0)));
        assert!(session.extend(Vec2::new(10.0, 10.0 + 2.0 * TOL + 2.0)));

        assert_eq!(session.segment_count(), 2);
        assert_eq!(session.current(), Vec2::new(10.0, 10.0 + 2.0 * TOL + 2.0));
    }
}
