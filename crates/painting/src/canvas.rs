//! Canvas buffer: pixel surface + sketch occupancy + dirty flag
//!
//! All pixel mutation goes through [`Canvas::set_pixel`], which drops the
//! occupancy flag of any pixel that returns to the background and raises the
//! dirty flag that presentation sync consumes.

use tracing::debug;

use crate::sketch::OccupancyBuffer;
use crate::surface::CpuSurface;
use crate::types::{PixelCoord, Rgba};

pub struct Canvas {
    pub(crate) surface: CpuSurface,
    pub(crate) occupancy: OccupancyBuffer,
    background: Rgba,
    dirty: bool,
}

impl Canvas {
    /// Allocate a canvas filled with `background`
    ///
    /// A fresh canvas is dirty so the first frame presents it.
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self {
            surface: CpuSurface::new_filled(width, height, background),
            occupancy: OccupancyBuffer::new(width, height),
            background,
            dirty: true,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.surface.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.surface.height
    }

    /// The color the canvas was created with; erasing restores it
    #[inline]
    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Write one pixel
    ///
    /// `blend` composites `color` over the existing pixel, otherwise the pixel
    /// is overwritten. Out-of-range coordinates are dropped silently. A pixel
    /// left exactly equal to the background loses its occupancy flag.
    #[inline]
    pub fn set_pixel(&mut self, coord: PixelCoord, color: Rgba, blend: bool) {
        let written = if blend {
            self.surface.blend_pixel(coord, color)
        } else {
            self.surface.set_pixel(coord, color)
        };

        let Some(result) = written else {
            return;
        };

        if result == self.background {
            self.occupancy.set_inked(coord, false);
        }
        self.dirty = true;
    }

    /// Overwrite every pixel with `color`
    pub fn fill(&mut self, color: Rgba) {
        let (width, height) = (self.width() as i32, self.height() as i32);
        for y in 0..height {
            for x in 0..width {
                self.set_pixel(PixelCoord::new(x, y), color, false);
            }
        }
        debug!("Canvas::fill: {}x{} with {:?}", width, height, color);
    }

    /// Read one pixel, None if out of range
    #[inline]
    pub fn get_pixel(&self, coord: PixelCoord) -> Option<Rgba> {
        self.surface.get_pixel(coord)
    }

    /// Flag `coord` as inked for the sketch linker
    ///
    /// The pixel is not inspected: a background pixel can carry the flag until
    /// a write leaves it equal to the background again. Returns false for
    /// out-of-range coordinates.
    pub fn mark_inked(&mut self, coord: PixelCoord) -> bool {
        if self.surface.get_pixel(coord).is_none() {
            return false;
        }
        self.occupancy.set_inked(coord, true);
        true
    }

    /// Occupancy flags of the sketch tool
    #[inline]
    pub fn occupancy(&self) -> &OccupancyBuffer {
        &self.occupancy
    }

    /// Pixel data in row-major order
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        self.surface.pixels()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the canvas as presented
    #[inline]
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}
