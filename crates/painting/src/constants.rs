/// Maximum canvas size per side. Not a magic number - may change.
pub const MAX_CANVAS_SIZE: u32 = 8192;

/// Default sketch neighbor radius (half-side of the linker's search square).
pub const SKETCH_RADIUS: u32 = 10;

/// Stamp radius used by the pencil tool.
pub const PENCIL_RADIUS: u32 = 1;

/// Stamp radius used by the brush tool.
pub const BRUSH_RADIUS: u32 = 2;

/// Stamp radius used by the eraser tool.
pub const ERASER_RADIUS: u32 = 5;

/// Stamp radius of the faint lines the sketch tool draws to its neighbors.
pub const SKETCH_LINK_RADIUS: u32 = 2;

/// Alpha of the faint sketch link color.
pub const SKETCH_LINK_ALPHA: f32 = 0.3;

/// Width in pixels of the feathered ring on a smooth stamp.
pub const SOFT_EDGE_WIDTH: i32 = 2;

/// Base of the exponential alpha falloff on the feathered ring.
pub const SOFT_EDGE_BASE: f32 = 0.4;
