use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Touch phase reported by the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TouchPhase {
    Down = 0,
    Move = 1,
    Up = 2,
    /// Any other action kind the platform reports. Consumed but ignored.
    Cancel = 3,
}

/// A single touch notification: an action kind plus its coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub position: Vec2,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            position: Vec2::new(x, y),
        }
    }
}

/// Shape of stroke endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum LineCap {
    Butt = 0,
    #[default]
    Round = 1,
}

/// How segments join on a stroked path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum LineJoin {
    Miter = 0,
    #[default]
    Round = 1,
}

/// Fill style for drawing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum PaintStyle {
    Fill = 0,
    #[default]
    Stroke = 1,
}

/// An axis-aligned rectangle in left/top/right/bottom form
///
/// Matches the source platform's rectangle semantics: `right < left` or
/// `bottom < top` is representable (an "inverted" rect) and is passed
/// through as-is rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Inset rectangle for a surface of the given size
    pub fn inset_of(width: u32, height: u32, inset: f32) -> Self {
        Self::new(inset, inset, width as f32 - inset, height as f32 - inset)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// True when the rect encloses no area (inverted or degenerate)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Corners in drawing order: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left, self.top),
            Vec2::new(self.right, self.top),
            Vec2::new(self.right, self.bottom),
            Vec2::new(self.left, self.bottom),
        ]
    }
}
