use glam::Vec2;

/// RGBA color, each channel normalized to [0, 1]
pub type Rgba = [f32; 4];

/// Painting tool selected on the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Tool {
    None = 0,
    #[default]
    Pencil = 1,
    Eraser = 2,
    Brush = 3,
    Sketch = 4,
}

/// Phase of a pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Drag,
    Up,
}

/// A pointer sample in buffer coordinates (row 0 at the top)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Down,
            position: Vec2::new(x, y),
        }
    }

    pub fn drag(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Drag,
            position: Vec2::new(x, y),
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Up,
            position: Vec2::new(x, y),
        }
    }
}

/// Integer pixel address. May lie outside the buffer; buffers drop such writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelCoord {
    pub x: i32,
    pub y: i32,
}

impl PixelCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel containing a continuous position (floor, so -0.5 lands at -1)
    #[inline]
    pub fn from_point(point: Vec2) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
        }
    }

    /// Offset this coordinate by (dx, dy)
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Row-major index of `coord` in a `width` x `height` buffer, or None if outside
#[inline]
pub fn buffer_index(coord: PixelCoord, width: u32, height: u32) -> Option<usize> {
    if coord.x < 0 || coord.y < 0 {
        return None;
    }
    let (x, y) = (coord.x as u32, coord.y as u32);
    if x >= width || y >= height {
        return None;
    }
    Some((y as usize) * (width as usize) + (x as usize))
}

/// The four sign reflections of (i, j), in the order (i,j), (-i,-j), (-i,j), (i,-j)
///
/// On an axis some reflections coincide; they are all returned.
#[inline]
pub fn quadrant_reflections(i: i32, j: i32) -> [(i32, i32); 4] {
    [(i, j), (-i, -j), (-i, j), (i, -j)]
}

/// Distinct reflections of (i, j), in [`quadrant_reflections`] order
pub fn quadrant_offsets(i: i32, j: i32) -> impl Iterator<Item = (i32, i32)> {
    let all = quadrant_reflections(i, j);
    all.into_iter()
        .enumerate()
        .filter(move |&(n, offset)| !all[..n].contains(&offset))
        .map(|(_, offset)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_coord_floors() {
        assert_eq!(PixelCoord::from_point(Vec2::new(3.7, 2.2)), PixelCoord::new(3, 2));
        assert_eq!(PixelCoord::from_point(Vec2::new(-0.5, 0.0)), PixelCoord::new(-1, 0));
    }

    #[test]
    fn test_buffer_index() {
        assert_eq!(buffer_index(PixelCoord::new(0, 0), 4, 3), Some(0));
        assert_eq!(buffer_index(PixelCoord::new(3, 2), 4, 3), Some(11));
        assert_eq!(buffer_index(PixelCoord::new(4, 0), 4, 3), None);
        assert_eq!(buffer_index(PixelCoord::new(0, 3), 4, 3), None);
        assert_eq!(buffer_index(PixelCoord::new(-1, 0), 4, 3), None);
    }

    #[test]
    fn test_quadrant_offsets_order() {
        let offsets: Vec<_> = quadrant_offsets(2, 3).collect();
        assert_eq!(offsets, vec![(2, 3), (-2, -3), (-2, 3), (2, -3)]);
    }

    #[test]
    fn test_quadrant_reflections_keep_duplicates() {
        assert_eq!(quadrant_reflections(0, 0), [(0, 0); 4]);
        assert_eq!(quadrant_reflections(2, 0), [(2, 0), (-2, 0), (-2, 0), (2, 0)]);
    }

    #[test]
    fn test_quadrant_offsets_dedup_on_axis() {
        let offsets: Vec<_> = quadrant_offsets(0, 3).collect();
        assert_eq!(offsets, vec![(0, 3), (0, -3)]);

        let offsets: Vec<_> = quadrant_offsets(2, 0).collect();
        assert_eq!(offsets, vec![(2, 0), (-2, 0)]);

        let offsets: Vec<_> = quadrant_offsets(0, 0).collect();
        assert_eq!(offsets, vec![(0, 0)]);
    }

    #[test]
    fn test_default_tool_is_pencil() {
        assert_eq!(Tool::default(), Tool::Pencil);
    }
}
