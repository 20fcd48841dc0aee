//! CPU surface caching committed strokes - RGBA f32 storage
//!
//! The surface is the persistent off-screen pixel store: everything a stroke
//! commits lands here, and the compositor blits it back out on every repaint.

/// An RGBA CPU surface, row-major, each pixel [r, g, b, a] as f32
pub struct PaintSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    pixels: Vec<[f32; 4]>,
}

impl PaintSurface {
    /// Create a new surface filled with the given background color
    ///
    /// The surface is fully opaque from the start; the alpha channel of
    /// `background` is forced to 1.0.
    pub fn new(width: u32, height: u32, background: [f32; 4]) -> Self {
        let opaque = [background[0], background[1], background[2], 1.0];
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![opaque; pixel_count],
        }
    }

    /// Fill the whole surface with a solid color
    pub fn clear(&mut self, color: [f32; 4]) {
        self.pixels.fill(color);
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color;
    }

    /// Blend a color onto an existing pixel using alpha compositing
    /// Formula: out = src * alpha + dst * (1 - alpha)
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: [f32; 4], coverage: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        let dst = self.pixels[index];

        let src_alpha = color[3] * coverage;
        let inv_src_alpha = 1.0 - src_alpha;

        self.pixels[index] = [
            color[0] * src_alpha + dst[0] * inv_src_alpha,
            color[1] * src_alpha + dst[1] * inv_src_alpha,
            color[2] * src_alpha + dst[2] * inv_src_alpha,
            src_alpha + dst[3] * inv_src_alpha,
        ];
    }

    /// Copy another surface onto this one at the origin, no scaling
    ///
    /// Only the overlapping region is written; pixels of this surface
    /// outside the source's bounds are left untouched.
    pub fn copy_from(&mut self, source: &PaintSurface) {
        let copy_w = self.width.min(source.width) as usize;
        let copy_h = self.height.min(source.height) as usize;

        for row in 0..copy_h {
            let dst_start = row * self.width as usize;
            let src_start = row * source.width as usize;
            self.pixels[dst_start..dst_start + copy_w]
                .copy_from_slice(&source.pixels[src_start..src_start + copy_w]);
        }
    }

    /// Get raw pixel data as bytes, suitable for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn test_new_surface_filled_with_background() {
        let surface = PaintSurface::new(40, 30, WHITE);
        assert_eq!(surface.width, 40);
        assert_eq!(surface.height, 30);
        assert_eq!(surface.pixel_count(), 1200);
        for pixel in surface.pixels() {
            assert_eq!(*pixel, WHITE);
        }
    }

    #[test]
    fn test_new_surface_forces_opaque() {
        let surface = PaintSurface::new(4, 4, [0.2, 0.4, 0.6, 0.5]);
        for pixel in surface.pixels() {
            assert_eq!(pixel[3], 1.0);
        }
    }

    #[test]
    fn test_get_set_pixel() {
        let mut surface = PaintSurface::new(10, 10, WHITE);
        let color = [1.0, 0.5, 0.25, 1.0];

        surface.set_pixel(5, 5, color);
        assert_eq!(surface.get_pixel(5, 5), Some(color));

        // Out of bounds should return None
        assert_eq!(surface.get_pixel(100, 100), None);
    }

    #[test]
    fn test_blend_pixel() {
        let mut surface = PaintSurface::new(10, 10, WHITE);

        // Blend 50% coverage of opaque red onto white
        surface.blend_pixel(5, 5, [1.0, 0.0, 0.0, 1.0], 0.5);

        let result = surface.get_pixel(5, 5).unwrap();
        assert!((result[0] - 1.0).abs() < 0.01);
        assert!((result[1] - 0.5).abs() < 0.01);
        assert!((result[2] - 0.5).abs() < 0.01);
        assert!((result[3] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_copy_from_same_size() {
        let mut target = PaintSurface::new(8, 8, [0.0, 0.0, 0.0, 1.0]);
        let mut source = PaintSurface::new(8, 8, WHITE);
        source.set_pixel(3, 2, [1.0, 0.0, 0.0, 1.0]);

        target.copy_from(&source);
        assert_eq!(target.get_pixel(3, 2), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(target.get_pixel(0, 0), Some(WHITE));
    }

    #[test]
    fn test_copy_from_smaller_source() {
        let mut target = PaintSurface::new(8, 8, [0.0, 0.0, 0.0, 1.0]);
        let source = PaintSurface::new(4, 4, WHITE);

        target.copy_from(&source);
        // Overlap copied, remainder untouched
        assert_eq!(target.get_pixel(3, 3), Some(WHITE));
        assert_eq!(target.get_pixel(5, 5), Some([0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_as_bytes() {
        let surface = PaintSurface::new(2, 2, WHITE);
        let bytes = surface.as_bytes();
        // 4 pixels * 4 components * 4 bytes per f32 = 64 bytes
        assert_eq!(bytes.len(), 64);
    }
}
