//! Tool dispatch for pointer events

use glam::Vec2;
use tracing::{debug, trace};

use crate::constants::{BRUSH_RADIUS, ERASER_RADIUS, PENCIL_RADIUS, SKETCH_LINK_ALPHA, SKETCH_LINK_RADIUS};
use crate::types::{PixelCoord, PointerEvent, PointerEventKind, Tool};

use super::PaintEngine;

impl PaintEngine {
    /// Feed one pointer sample to the active tool
    ///
    /// `Down` starts a new stroke at the event position, so the first sample
    /// draws a dot instead of a line from the previous stroke. `Drag`
    /// continues from the previous sample. `Up` is ignored.
    pub fn on_pointer_event(&mut self, event: PointerEvent) {
        let point = event.position;
        match event.kind {
            PointerEventKind::Down => {
                self.prev_position = Some(point);
            }
            PointerEventKind::Drag => {}
            PointerEventKind::Up => return,
        }

        let prev = self.prev_position.unwrap_or(point);
        trace!(
            "on_pointer_event: {:?} at ({:.1}, {:.1}) with {:?}",
            event.kind, point.x, point.y, self.tool
        );

        match self.tool {
            Tool::None => {}
            Tool::Pencil => self.pencil(point, prev),
            Tool::Eraser => self.eraser(point),
            Tool::Brush => self.brush(point, prev),
            Tool::Sketch => self.sketch(point),
        }

        self.prev_position = Some(point);
    }

    /// Hard one-pixel line back to the previous sample
    fn pencil(&mut self, point: Vec2, prev: Vec2) {
        self.canvas.draw_line(point, prev, self.draw_color, false, PENCIL_RADIUS);
    }

    /// Hard disk of background color
    fn eraser(&mut self, point: Vec2) {
        let background = self.canvas.background();
        self.canvas.stamp_disk(point, background, ERASER_RADIUS, false);
    }

    /// Feathered, blended line back to the previous sample
    fn brush(&mut self, point: Vec2, prev: Vec2) {
        self.canvas.draw_line(point, prev, self.draw_color, true, BRUSH_RADIUS);
    }

    /// Flag the sample and draw faint links to inked pixels nearby
    ///
    /// The sample itself is not drawn; a sample with no inked neighbors
    /// leaves the pixels untouched.
    fn sketch(&mut self, point: Vec2) {
        let center = PixelCoord::from_point(point);
        self.canvas.mark_inked(center);

        let mut faint = self.draw_color;
        faint[3] = SKETCH_LINK_ALPHA;

        let neighbors = self.canvas.occupancy().neighbors_in_radius(center, self.sketch_radius);
        if !neighbors.is_empty() {
            debug!(
                "sketch: linking ({}, {}) to {} inked neighbors",
                center.x,
                center.y,
                neighbors.len()
            );
        }

        for neighbor in neighbors {
            let from = Vec2::new(neighbor.x as f32, neighbor.y as f32);
            self.canvas.draw_line(from, point, faint, true, SKETCH_LINK_RADIUS);
        }
    }
}
