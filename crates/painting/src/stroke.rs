//! Stroke rendering: disk stamps and fixed-step lines

use glam::Vec2;
use tracing::{debug, trace};

use crate::canvas::Canvas;
use crate::constants::{SOFT_EDGE_BASE, SOFT_EDGE_WIDTH};
use crate::types::{PixelCoord, Rgba, quadrant_reflections};

impl Canvas {
    /// Stamp a disk of `radius` centered on `center`
    ///
    /// Covers offsets (i, j) with i, j in [0, radius) in all four quadrants.
    /// Every reflection is written, so on the axes a smooth stamp blends the
    /// same pixel more than once (the center four times).
    /// With `smooth`, pixels in the outer ring get an attenuated alpha and are
    /// blended; without it they are overwritten at full color.
    pub fn stamp_disk(&mut self, center: Vec2, color: Rgba, radius: u32, smooth: bool) {
        let center = PixelCoord::from_point(center);
        let radius = radius as i32;
        trace!(
            "stamp_disk: center=({}, {}), radius={}, smooth={}",
            center.x, center.y, radius, smooth
        );

        for i in 0..radius {
            for j in 0..radius {
                let distance = ((i * i + j * j) as f32).sqrt().ceil() as i32;

                let mut stamp_color = color;
                if smooth {
                    stamp_color[3] *= soft_edge_falloff(radius, distance);
                }

                for (dx, dy) in quadrant_reflections(i, j) {
                    self.set_pixel(center.offset(dx, dy), stamp_color, smooth);
                }
            }
        }
    }

    /// Draw a line from `p1` to `p2` as a run of disk stamps
    ///
    /// Stamps are placed one pixel apart along the normalized direction,
    /// `round(|p2 - p1|) + 1` of them, starting exactly at `p1`. A zero-length
    /// line is a single stamp.
    pub fn draw_line(&mut self, p1: Vec2, p2: Vec2, color: Rgba, smooth: bool, radius: u32) {
        let delta = p2 - p1;
        let dir = delta.normalize_or_zero();
        let steps = delta.length().round() as u32;
        debug!(
            "draw_line: ({:.1}, {:.1}) -> ({:.1}, {:.1}), steps={}, radius={}, smooth={}",
            p1.x, p1.y, p2.x, p2.y, steps, radius, smooth
        );

        for step in 0..=steps {
            self.stamp_disk(p1 + dir * step as f32, color, radius, smooth);
        }
    }
}

/// Alpha multiplier for a smooth stamp pixel at ceil-rounded `distance`
///
/// 1.0 inside the disk; within the outer ring (`radius - distance <= 2`) it
/// decays as 0.4^((2 - (radius - distance))^2 + 1).
#[inline]
pub fn soft_edge_falloff(radius: i32, distance: i32) -> f32 {
    let inset = radius - distance;
    if inset > SOFT_EDGE_WIDTH {
        return 1.0;
    }
    let depth = SOFT_EDGE_WIDTH - inset;
    SOFT_EDGE_BASE.powi(depth * depth + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const BG: Rgba = [1.0, 1.0, 1.0, 0.0];
    const RED: Rgba = [1.0, 0.0, 0.0, 1.0];

    fn painted(canvas: &Canvas) -> HashSet<(i32, i32)> {
        let width = canvas.width() as i32;
        canvas
            .pixels()
            .iter()
            .enumerate()
            .filter(|(_, color)| **color != BG)
            .map(|(index, _)| (index as i32 % width, index as i32 / width))
            .collect()
    }

    #[test]
    fn test_soft_edge_falloff() {
        // Deep inside the disk: untouched
        assert_eq!(soft_edge_falloff(10, 0), 1.0);
        assert_eq!(soft_edge_falloff(10, 7), 1.0);
        // Ring entry: 0.4^1
        assert!((soft_edge_falloff(10, 8) - 0.4).abs() < 1e-6);
        // One further: 0.4^2
        assert!((soft_edge_falloff(10, 9) - 0.16).abs() < 1e-6);
        // On the rim: 0.4^5
        assert!((soft_edge_falloff(10, 10) - 0.4f32.powi(5)).abs() < 1e-6);
        // Past the rim (square corners): 0.4^10
        assert!((soft_edge_falloff(10, 11) - 0.4f32.powi(10)).abs() < 1e-9);
    }

    #[test]
    fn test_stamp_radius_one_is_single_pixel() {
        let mut canvas = Canvas::new(16, 16, BG);
        canvas.stamp_disk(Vec2::new(5.0, 7.0), RED, 1, false);

        let expected: HashSet<_> = [(5, 7)].into_iter().collect();
        assert_eq!(painted(&canvas), expected);
    }

    #[test]
    fn test_stamp_hard_disk_symmetry() {
        let mut canvas = Canvas::new(32, 32, BG);
        let (cx, cy) = (15, 16);
        canvas.stamp_disk(Vec2::new(cx as f32, cy as f32), RED, 5, false);

        let pixels = painted(&canvas);
        // (2*5 - 1)^2 pixels for a full square footprint
        assert_eq!(pixels.len(), 81);
        for &(x, y) in &pixels {
            assert!(pixels.contains(&(2 * cx - x, y)), "x-mirror of ({x}, {y})");
            assert!(pixels.contains(&(x, 2 * cy - y)), "y-mirror of ({x}, {y})");
            assert_eq!(canvas.get_pixel(PixelCoord::new(x, y)), Some(RED));
        }
    }

    #[test]
    fn test_stamp_smooth_feathers_edge() {
        let mut canvas = Canvas::new(32, 32, BG);
        let center = Vec2::new(16.0, 16.0);
        canvas.stamp_disk(center, RED, 5, true);

        // distance 0: inset 5 -> full alpha over transparent background
        let middle = canvas.get_pixel(PixelCoord::new(16, 16)).unwrap();
        assert!((middle[3] - 1.0).abs() < 1e-6);

        // offset (4, 0): distance 4, inset 1 -> alpha 0.4^2, blended twice
        let ring = canvas.get_pixel(PixelCoord::new(20, 16)).unwrap();
        assert!((ring[3] - (1.0 - 0.84f32.powi(2))).abs() < 1e-6);
        // offset (4, 1): off the axes, blended once
        let off_axis = canvas.get_pixel(PixelCoord::new(20, 17)).unwrap();
        assert!((off_axis[3] - 0.4f32.powi(5)).abs() < 1e-6);

        // offset (4, 4): distance ceil(5.66) = 6, inset -1 -> alpha 0.4^10
        let corner = canvas.get_pixel(PixelCoord::new(12, 12)).unwrap();
        assert!((corner[3] - 0.4f32.powi(10)).abs() < 1e-7);
    }

    #[test]
    fn test_stamp_clipped_at_border() {
        let mut canvas = Canvas::new(8, 8, BG);
        canvas.stamp_disk(Vec2::new(0.0, 0.0), RED, 3, false);

        let expected: HashSet<_> = (0..3).flat_map(|x| (0..3).map(move |y| (x, y))).collect();
        assert_eq!(painted(&canvas), expected);
    }

    #[test]
    fn test_line_endpoint_coverage() {
        let mut canvas = Canvas::new(64, 64, BG);
        let p1 = Vec2::new(5.0, 5.0);
        let p2 = Vec2::new(40.0, 22.0);
        canvas.draw_line(p1, p2, RED, false, 1);

        let pixels = painted(&canvas);
        assert!(pixels.contains(&(5, 5)));

        // Last stamp lands within one step of p2
        let near_end = pixels
            .iter()
            .any(|&(x, y)| Vec2::new(x as f32, y as f32).distance(p2) <= 1.5);
        assert!(near_end);
    }

    #[test]
    fn test_horizontal_line_exact() {
        let mut canvas = Canvas::new(32, 32, BG);
        canvas.draw_line(Vec2::new(13.0, 10.0), Vec2::new(10.0, 10.0), RED, false, 1);

        let expected: HashSet<_> = (10..=13).map(|x| (x, 10)).collect();
        assert_eq!(painted(&canvas), expected);
    }

    #[test]
    fn test_zero_length_line_is_one_stamp() {
        let mut canvas = Canvas::new(32, 32, BG);
        let p = Vec2::new(9.0, 9.0);
        canvas.draw_line(p, p, RED, false, 2);

        let expected: HashSet<_> = [(8, 8), (8, 9), (8, 10), (9, 8), (9, 9), (9, 10), (10, 8), (10, 9), (10, 10)]
            .into_iter()
            .collect();
        assert_eq!(painted(&canvas), expected);
    }

    #[test]
    fn test_line_off_canvas_is_harmless() {
        let mut canvas = Canvas::new(16, 16, BG);
        canvas.mark_clean();
        canvas.draw_line(Vec2::new(-50.0, -50.0), Vec2::new(-20.0, -30.0), RED, true, 2);

        assert!(painted(&canvas).is_empty());
        assert!(!canvas.is_dirty());
    }
}
