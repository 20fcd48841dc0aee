//! Finger-paint canvas - a drawing surface cached into an off-screen buffer
//!
//! This crate provides the core types for a freehand drawing view:
//! - [`types`] - Touch events, rectangles, and pen style enums
//! - [`pen`] - The pen style used for strokes and the decorative frame
//! - [`surface`] - CPU RGBA surface caching committed strokes
//! - [`path`] - Quadratic-Bezier stroke paths and flattening
//! - [`stroke`] - Stroke session state machine (down -> move -> up)
//! - [`raster`] - Path and rectangle-outline rasterization
//! - [`view`] - The canvas view tying input, surface, and compositing together
//!
//! The crate is platform agnostic: a host delivers size changes, touch
//! events, and draw requests as plain method calls on [`view::CanvasView`],
//! and observes repaint requests through a take-able flag.

pub mod constants;
pub mod path;
pub mod pen;
pub mod raster;
pub mod stroke;
pub mod surface;
pub mod types;
pub mod view;

pub use constants::*;
pub use path::*;
pub use pen::*;
pub use raster::*;
pub use stroke::*;
pub use surface::*;
pub use types::*;
pub use view::*;
