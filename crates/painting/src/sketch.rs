//! Occupancy buffer and proximity queries for the sketch tool
//!
//! The sketch tool flags the pixels it inks. Later samples look up flagged
//! pixels in a square neighborhood and draw faint lines back to them, which
//! produces the web-like sketch look.

use tracing::trace;

use crate::types::{PixelCoord, buffer_index, quadrant_offsets};

/// One flag per canvas pixel, row-major, aligned 1:1 with the canvas surface
pub struct OccupancyBuffer {
    width: u32,
    height: u32,
    inked: Vec<bool>,
}

impl OccupancyBuffer {
    /// Create an empty buffer (no pixel inked)
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            inked: vec![false; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `coord` is flagged. Out-of-range coordinates are never inked.
    #[inline]
    pub fn is_inked(&self, coord: PixelCoord) -> bool {
        buffer_index(coord, self.width, self.height).is_some_and(|index| self.inked[index])
    }

    /// Set or clear the flag at `coord`; out-of-range coordinates are ignored
    #[inline]
    pub fn set_inked(&mut self, coord: PixelCoord, inked: bool) {
        if let Some(index) = buffer_index(coord, self.width, self.height) {
            self.inked[index] = inked;
        }
    }

    /// Number of flagged pixels
    pub fn inked_count(&self) -> usize {
        self.inked.iter().filter(|&&inked| inked).count()
    }

    /// Flagged pixels around `center`
    ///
    /// Scans offsets (i, j) with i, j in [0, radius) and their sign reflections,
    /// skipping the center itself. Results follow the scan order: i, then j,
    /// then reflection (i,j), (-i,-j), (-i,j), (i,-j). Each pixel appears once.
    pub fn neighbors_in_radius(&self, center: PixelCoord, radius: u32) -> Vec<PixelCoord> {
        let radius = radius as i32;
        let mut neighbors = Vec::new();

        for i in 0..radius {
            for j in 0..radius {
                if i == 0 && j == 0 {
                    continue;
                }
                for (dx, dy) in quadrant_offsets(i, j) {
                    let coord = center.offset(dx, dy);
                    if self.is_inked(coord) {
                        neighbors.push(coord);
                    }
                }
            }
        }

        trace!(
            "neighbors_in_radius: center=({}, {}), radius={} -> {} inked",
            center.x,
            center.y,
            radius,
            neighbors.len()
        );
        neighbors
    }
}
