//! Raster paint engine
//!
//! This module ties the pieces together:
//! - Pointer events come in via `on_pointer_event`
//! - The active tool turns them into stamps and lines on the canvas
//! - The sketch tool additionally links to nearby inked pixels
//! - `end_frame` presents the canvas when it changed
//!
//! The host calls `init` once, `on_pointer_event` for each input sample, and
//! `end_frame` at the end of every frame. Nothing is scheduled implicitly.

mod present;
mod tools;

use glam::Vec2;
use tracing::info;

use crate::canvas::Canvas;
use crate::constants::SKETCH_RADIUS;
use crate::sketch::OccupancyBuffer;
use crate::types::{PixelCoord, Rgba, Tool};
use crate::validation::{ValidationError, validate_color, validate_dimensions, validate_sketch_radius};

/// Construction parameters for [`PaintEngine`]
#[derive(Debug, Clone, PartialEq)]
pub struct PaintSettings {
    /// Canvas width, bound to the display width
    pub width: u32,
    /// Canvas height, bound to the display height
    pub height: u32,
    /// Canvas color at startup and after clear; the eraser paints with it
    pub background: Rgba,
    /// Initial draw color
    pub draw_color: Rgba,
    /// Half-side of the square the sketch tool searches for neighbors
    pub sketch_radius: u32,
}

impl PaintSettings {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            background: [1.0, 1.0, 1.0, 0.0],
            draw_color: [0.0, 0.0, 0.0, 1.0],
            sketch_radius: SKETCH_RADIUS,
        }
    }
}

/// Toolbar-facing control surface of the engine
///
/// UI components get this as an explicit `&mut` handle rather than looking
/// the engine up globally.
pub trait ToolSelection {
    fn tool(&self) -> Tool;
    fn set_tool(&mut self, tool: Tool);
    fn draw_color(&self) -> Rgba;
    /// Rejects colors with channels outside [0, 1]; the current color is kept
    fn set_draw_color(&mut self, color: Rgba) -> Result<(), ValidationError>;
    /// Deselect the tool and reset the canvas to its background
    fn clear(&mut self);
}

/// Paint engine for one canvas
pub struct PaintEngine {
    /// Pixel buffer, occupancy flags and dirty flag
    pub(crate) canvas: Canvas,
    /// Active tool
    pub(crate) tool: Tool,
    /// Color used by pencil, brush and sketch
    pub(crate) draw_color: Rgba,
    /// Sketch linker search radius
    pub(crate) sketch_radius: u32,
    /// Position of the previous pointer sample (None before the first one)
    pub(crate) prev_position: Option<Vec2>,
}

impl PaintEngine {
    /// Allocate the canvas and fill it with the background
    pub fn init(settings: PaintSettings) -> Result<Self, ValidationError> {
        validate_dimensions(settings.width, settings.height)?;
        validate_color("background", settings.background)?;
        validate_color("draw", settings.draw_color)?;
        validate_sketch_radius(settings.sketch_radius)?;

        info!(
            "PaintEngine::init: {}x{} canvas, background={:?}, sketch_radius={}",
            settings.width, settings.height, settings.background, settings.sketch_radius
        );

        Ok(Self {
            canvas: Canvas::new(settings.width, settings.height, settings.background),
            tool: Tool::default(),
            draw_color: settings.draw_color,
            sketch_radius: settings.sketch_radius,
            prev_position: None,
        })
    }

    /// Get the canvas width
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Get the canvas height
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Get the background color
    pub fn background(&self) -> Rgba {
        self.canvas.background()
    }

    /// Get the sketch linker radius
    pub fn sketch_radius(&self) -> u32 {
        self.sketch_radius
    }

    /// Get read access to the canvas
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Get the sketch occupancy flags
    pub fn occupancy(&self) -> &OccupancyBuffer {
        self.canvas.occupancy()
    }

    /// Get a single pixel's color
    ///
    /// Returns None if coordinates are out of bounds.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.canvas.get_pixel(PixelCoord::new(x, y))
    }

    /// Whether the canvas changed since the last presentation
    pub fn is_dirty(&self) -> bool {
        self.canvas.is_dirty()
    }

    /// Position of the previous pointer sample
    pub fn prev_position(&self) -> Option<Vec2> {
        self.prev_position
    }
}

impl ToolSelection for PaintEngine {
    fn tool(&self) -> Tool {
        self.tool
    }

    fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            info!("Tool changed: {:?} -> {:?}", self.tool, tool);
        }
        self.tool = tool;
    }

    fn draw_color(&self) -> Rgba {
        self.draw_color
    }

    fn set_draw_color(&mut self, color: Rgba) -> Result<(), ValidationError> {
        validate_color("draw", color)?;
        self.draw_color = color;
        Ok(())
    }

    fn clear(&mut self) {
        info!("Clearing canvas");
        self.tool = Tool::None;
        let background = self.canvas.background();
        self.canvas.fill(background);
    }
}
