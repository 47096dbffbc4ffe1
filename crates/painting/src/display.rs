//! Display boundary: where presentation sync sends finished frames
//!
//! The engine never reads a display back. A target only has to accept a
//! full replacement of its pixels once per dirty frame.

use image::Rgba32FImage;
use thiserror::Error;

use crate::types::Rgba;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Display is {expected_width}x{expected_height}, frame is {width}x{height}")]
    SizeMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },
    #[error("Display backend failed: {0}")]
    Backend(String),
}

/// A fixed-size RGBA image resource the canvas is presented to
pub trait DisplayTarget {
    /// Replace every pixel with `pixels` (row-major, `width * height` long)
    fn replace_pixels(&mut self, width: u32, height: u32, pixels: &[Rgba]) -> Result<(), DisplayError>;
}

/// In-memory display resource backed by a float RGBA image
pub struct ImageTarget {
    image: Rgba32FImage,
    uploads: u64,
}

impl ImageTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: Rgba32FImage::new(width, height),
            uploads: 0,
        }
    }

    /// The last presented frame
    pub fn image(&self) -> &Rgba32FImage {
        &self.image
    }

    /// How many frames have been pushed so far
    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    /// Color of one presented pixel, None if out of range
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }
}

impl DisplayTarget for ImageTarget {
    fn replace_pixels(&mut self, width: u32, height: u32, pixels: &[Rgba]) -> Result<(), DisplayError> {
        if (width, height) != self.image.dimensions() {
            return Err(DisplayError::SizeMismatch {
                expected_width: self.image.width(),
                expected_height: self.image.height(),
                width,
                height,
            });
        }

        let channels: &[f32] = bytemuck::cast_slice(pixels);
        let image = Rgba32FImage::from_raw(width, height, channels.to_vec())
            .ok_or_else(|| DisplayError::Backend(format!("{} pixels do not fill {width}x{height}", pixels.len())))?;

        self.image = image;
        self.uploads += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_target_replaces_pixels() {
        let mut target = ImageTarget::new(2, 2);
        let pixels = [
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0, 0.5],
        ];

        target.replace_pixels(2, 2, &pixels).unwrap();
        assert_eq!(target.uploads(), 1);
        assert_eq!(target.pixel(0, 0), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(target.pixel(1, 1), Some([1.0, 1.0, 1.0, 0.5]));
        assert_eq!(target.pixel(2, 0), None);
    }

    #[test]
    fn test_image_target_rejects_wrong_size() {
        let mut target = ImageTarget::new(2, 2);
        let result = target.replace_pixels(3, 1, &[[0.0; 4]; 3]);
        assert!(matches!(result, Err(DisplayError::SizeMismatch { width: 3, .. })));
        assert_eq!(target.uploads(), 0);
    }

    #[test]
    fn test_image_target_rejects_short_buffer() {
        let mut target = ImageTarget::new(2, 2);
        let result = target.replace_pixels(2, 2, &[[0.0; 4]; 3]);
        assert!(matches!(result, Err(DisplayError::Backend(_))));
    }
}
