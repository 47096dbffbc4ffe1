//! CPU RGBA surface - the pixel store behind the canvas

use crate::types::{PixelCoord, Rgba, buffer_index};

/// A float RGBA CPU surface
/// Stores pixels as [f32; 4] in row-major order, row 0 at the top
pub struct CpuSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    pixels: Vec<Rgba>,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, filled with `color`
    pub fn new_filled(width: u32, height: u32, color: Rgba) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![color; pixel_count],
        }
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, coord: PixelCoord) -> Option<Rgba> {
        buffer_index(coord, self.width, self.height).map(|index| self.pixels[index])
    }

    /// Overwrite a pixel, returning the stored color
    /// Does nothing and returns None if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, coord: PixelCoord, color: Rgba) -> Option<Rgba> {
        let index = buffer_index(coord, self.width, self.height)?;
        self.pixels[index] = color;
        Some(color)
    }

    /// Composite `color` over an existing pixel, returning the stored color
    /// Formula: rgb = src * src_a + dst * (1 - src_a), a = dst_a * (1 - src_a) + src_a
    #[inline]
    pub fn blend_pixel(&mut self, coord: PixelCoord, color: Rgba) -> Option<Rgba> {
        let index = buffer_index(coord, self.width, self.height)?;
        let blended = alpha_over(color, self.pixels[index]);
        self.pixels[index] = blended;
        Some(blended)
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }
}

/// Non-premultiplied source-over compositing of `src` onto `dst`
#[inline]
pub fn alpha_over(src: Rgba, dst: Rgba) -> Rgba {
    let src_alpha = src[3];
    let inv_src_alpha = 1.0 - src_alpha;
    [
        src[0] * src_alpha + dst[0] * inv_src_alpha,
        src[1] * src_alpha + dst[1] * inv_src_alpha,
        src[2] * src_alpha + dst[2] * inv_src_alpha,
        dst[3] * inv_src_alpha + src_alpha,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface() {
        let surface = CpuSurface::new_filled(100, 100, [0.0; 4]);
        assert_eq!(surface.width, 100);
        assert_eq!(surface.height, 100);
        assert_eq!(surface.pixels().len(), 10000);
    }

    #[test]
    fn test_get_set_pixel() {
        let mut surface = CpuSurface::new_filled(10, 10, [0.0; 4]);
        let color = [1.0, 0.5, 0.25, 1.0];

        assert_eq!(surface.set_pixel(PixelCoord::new(5, 5), color), Some(color));
        assert_eq!(surface.get_pixel(PixelCoord::new(5, 5)), Some(color));

        // Out of bounds should return None
        assert_eq!(surface.get_pixel(PixelCoord::new(100, 100)), None);
        assert_eq!(surface.set_pixel(PixelCoord::new(-1, 5), color), None);
    }

    #[test]
    fn test_blend_pixel() {
        let mut surface = CpuSurface::new_filled(10, 10, [1.0, 1.0, 1.0, 1.0]);

        // Blend 50% opaque red over white
        let result = surface
            .blend_pixel(PixelCoord::new(5, 5), [1.0, 0.0, 0.0, 0.5])
            .unwrap();
        assert!((result[0] - 1.0).abs() < 0.001);
        assert!((result[1] - 0.5).abs() < 0.001);
        assert!((result[2] - 0.5).abs() < 0.001);
        assert!((result[3] - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_blend_alpha_over_transparent() {
        // 30% red over fully transparent white
        let result = alpha_over([1.0, 0.0, 0.0, 0.3], [1.0, 1.0, 1.0, 0.0]);
        assert!((result[0] - 1.0).abs() < 0.001);
        assert!((result[1] - 0.7).abs() < 0.001);
        assert!((result[3] - 0.3).abs() < 0.001);
    }

    #[test]
    fn test_blend_opaque_source_replaces() {
        let result = alpha_over([0.2, 0.4, 0.6, 1.0], [1.0, 1.0, 1.0, 0.25]);
        assert_eq!(result, [0.2, 0.4, 0.6, 1.0]);
    }
}
