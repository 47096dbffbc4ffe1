//! Window-side display resource
//!
//! The window shows opaque `0x00RRGGBB` pixels, so the RGBA canvas is
//! composited over a solid backdrop on every upload.

use painting::{DisplayError, DisplayTarget, Rgba};

pub struct WindowTarget {
    width: u32,
    height: u32,
    backdrop: [f32; 3],
    pixels: Vec<u32>,
}

impl WindowTarget {
    pub fn new(width: u32, height: u32, backdrop: [f32; 3]) -> Self {
        Self {
            width,
            height,
            backdrop,
            pixels: vec![pack_rgb(backdrop); (width as usize) * (height as usize)],
        }
    }

    /// The last uploaded frame, ready for the window
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

impl DisplayTarget for WindowTarget {
    fn replace_pixels(&mut self, width: u32, height: u32, pixels: &[Rgba]) -> Result<(), DisplayError> {
        if (width, height) != (self.width, self.height) {
            return Err(DisplayError::SizeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width,
                height,
            });
        }
        if pixels.len() != self.pixels.len() {
            return Err(DisplayError::Backend(format!(
                "expected {} pixels, got {}",
                self.pixels.len(),
                pixels.len()
            )));
        }

        for (out, &color) in self.pixels.iter_mut().zip(pixels) {
            *out = composite_over(color, self.backdrop);
        }
        Ok(())
    }
}

/// Flatten `color` onto an opaque backdrop and pack it for the window
pub fn composite_over(color: Rgba, backdrop: [f32; 3]) -> u32 {
    let alpha = color[3].clamp(0.0, 1.0);
    pack_rgb([
        color[0] * alpha + backdrop[0] * (1.0 - alpha),
        color[1] * alpha + backdrop[1] * (1.0 - alpha),
        color[2] * alpha + backdrop[2] * (1.0 - alpha),
    ])
}

/// Pack normalized RGB as 0x00RRGGBB
pub fn pack_rgb(rgb: [f32; 3]) -> u32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (channel(rgb[0]) << 16) | (channel(rgb[1]) << 8) | channel(rgb[2])
}
