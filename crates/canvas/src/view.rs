//! The canvas view: surface lifecycle, input dispatch, and compositing
//!
//! The host platform drives a [`CanvasView`] with three notifications:
//! size changes, touch events, and draw requests. Between them the view
//! owns the cached surface exclusively; repaints are signalled back to the
//! host through a take-able flag rather than called directly.

use glam::Vec2;
use tracing::debug;

use crate::constants::{BACKGROUND_COLOR, DEFAULT_TOUCH_TOLERANCE, FRAME_INSET};
use crate::pen::Pen;
use crate::raster;
use crate::stroke::StrokeSession;
use crate::surface::PaintSurface;
use crate::types::{Rect, TouchEvent, TouchPhase};

/// A finger-paint drawing view backed by an off-screen surface
pub struct CanvasView {
    /// Cached surface holding all committed strokes; None until the first
    /// size notification
    surface: Option<PaintSurface>,
    /// Decorative frame, recomputed on every resize
    frame: Rect,
    pen: Pen,
    background: [f32; 4],
    tolerance: f32,
    /// Stroke in progress; None outside a down -> up cycle
    session: Option<StrokeSession>,
    /// Coalescible repaint hint for the host
    needs_redraw: bool,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasView {
    /// Create a view with the default pen, colors, and touch tolerance
    pub fn new() -> Self {
        Self {
            surface: None,
            frame: Rect::ZERO,
            pen: Pen::default(),
            background: BACKGROUND_COLOR,
            tolerance: DEFAULT_TOUCH_TOLERANCE,
            session: None,
            needs_redraw: false,
        }
    }

    /// Create a view with a platform-reported touch tolerance
    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            tolerance,
            ..Self::new()
        }
    }

    /// Handle a size change notification from the host
    ///
    /// The previous surface is released before the new one is allocated.
    /// The new surface is fully opaque background; anything drawn before
    /// the resize is gone. This is accepted behavior, matching the source
    /// platform's cache-bitmap recreation.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        debug!("resize to {}x{}", width, height);

        // Release first, then reallocate
        self.surface = None;
        self.surface = Some(PaintSurface::new(width, height, self.background));
        self.frame = Rect::inset_of(width, height, FRAME_INSET);
        self.needs_redraw = true;
    }

    /// Handle a touch notification from the host
    ///
    /// Dispatches Down/Move/Up to the stroke transitions; any other phase
    /// is deliberately a no-op. The event is always reported as consumed.
    pub fn on_touch(&mut self, event: TouchEvent) -> bool {
        match event.phase {
            TouchPhase::Down => self.touch_start(event.position),
            TouchPhase::Move => self.touch_move(event.position),
            TouchPhase::Up => self.touch_up(),
            TouchPhase::Cancel => {}
        }
        true
    }

    fn touch_start(&mut self, position: Vec2) {
        self.session = Some(StrokeSession::begin(position, self.tolerance));
    }

    fn touch_move(&mut self, position: Vec2) {
        // A move with no preceding down has no session to extend
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if !session.extend(position) {
            // Sub-tolerance jitter: no path mutation, no repaint request
            return;
        }

        // Commit the whole accumulated path into the cache, then ask the
        // host to repaint
        if let Some(surface) = self.surface.as_mut() {
            raster::stroke_path(surface, session.path(), &self.pen);
        }
        self.needs_redraw = true;
    }

    fn touch_up(&mut self) {
        // Discard the path so it does not get drawn again; the pixels it
        // committed stay on the surface
        self.session = None;
    }

    /// Composite the cached surface plus the frame onto a draw target
    ///
    /// The surface is blitted at the origin with no scaling, then the
    /// frame outline is stroked on top so it is never occluded. Read-only
    /// with respect to the cached surface; before the first resize this is
    /// a no-op.
    pub fn draw(&self, target: &mut PaintSurface) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        target.copy_from(surface);
        raster::stroke_rect(target, &self.frame, &self.pen);
    }

    /// True while a repaint request is pending
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Take the pending repaint request, clearing it
    ///
    /// Requests coalesce: any number of touch moves between host repaints
    /// collapse into one pending request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// The cached surface, if one has been allocated
    #[inline]
    pub fn surface(&self) -> Option<&PaintSurface> {
        self.surface.as_ref()
    }

    /// The decorative frame rectangle
    #[inline]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    #[inline]
    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    /// True while a stroke is in progress
    pub fn is_stroking(&self) -> bool {
        self.session.is_some()
    }

    /// Last accepted point of the stroke in progress
    pub fn current_position(&self) -> Option<Vec2> {
        self.session.as_ref().map(|s| s.current())
    }

    /// Segment count of the stroke in progress
    pub fn session_segment_count(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.segment_count())
    }
}
