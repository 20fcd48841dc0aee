//! Desktop host for the finger-paint canvas
//!
//! Opens a raw pixel-buffer window and drives a [`CanvasView`] from the
//! mouse: press-drag-release maps to the down/move/up touch phases. The
//! window is sized once at startup, which delivers the view's single resize
//! notification; compositing happens only when the view requests a repaint.

mod error;

use canvas::{CanvasView, PaintSurface, TouchEvent, TouchPhase};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};
use tracing::info;

use error::AppError;

const WINDOW_WIDTH: u32 = 960;
const WINDOW_HEIGHT: u32 = 600;
const TARGET_FPS: usize = 60;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut window = Window::new(
        "MiniPaint",
        WINDOW_WIDTH as usize,
        WINDOW_HEIGHT as usize,
        WindowOptions::default(),
    )
    .map_err(|e| AppError::WindowInit(e.to_string()))?;
    window.set_target_fps(TARGET_FPS);

    let mut view = CanvasView::new();
    view.on_resize(WINDOW_WIDTH, WINDOW_HEIGHT);
    info!("canvas ready at {}x{}", WINDOW_WIDTH, WINDOW_HEIGHT);

    // Compose target plus the packed buffer the window presents
    let mut compose = PaintSurface::new(WINDOW_WIDTH, WINDOW_HEIGHT, [0.0, 0.0, 0.0, 1.0]);
    let mut framebuffer = vec![0u32; (WINDOW_WIDTH * WINDOW_HEIGHT) as usize];

    let mut pointer_was_down = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let pointer_down = window.get_mouse_down(MouseButton::Left);
        let position = window.get_mouse_pos(MouseMode::Clamp);

        // Mouse edges become touch phases. A missing pointer position means
        // no event is synthesized at all.
        if let Some((x, y)) = position {
            match (pointer_was_down, pointer_down) {
                (false, true) => {
                    view.on_touch(TouchEvent::new(TouchPhase::Down, x, y));
                }
                (true, true) => {
                    view.on_touch(TouchEvent::new(TouchPhase::Move, x, y));
                }
                (true, false) => {
                    view.on_touch(TouchEvent::new(TouchPhase::Up, x, y));
                }
                (false, false) => {}
            }
            pointer_was_down = pointer_down;
        }

        // Repaint only when the view asked for one; requests coalesce
        if view.take_redraw_request() {
            view.draw(&mut compose);
            pack_surface(&compose, &mut framebuffer);
        }

        window
            .update_with_buffer(
                &framebuffer,
                WINDOW_WIDTH as usize,
                WINDOW_HEIGHT as usize,
            )
            .map_err(|e| AppError::Present(e.to_string()))?;
    }

    Ok(())
}

/// Pack RGBA f32 pixels into the window's 0x00RRGGBB format
fn pack_surface(surface: &PaintSurface, out: &mut [u32]) {
    for (dst, src) in out.iter_mut().zip(surface.pixels()) {
        let r = (src[0].clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        let g = (src[1].clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        let b = (src[2].clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        *dst = (r << 16) | (g << 8) | b;
    }
}
