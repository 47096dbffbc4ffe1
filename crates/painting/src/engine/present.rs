//! Presentation sync: push the canvas to the display once per dirty frame

use tracing::{debug, warn};

use crate::display::{DisplayError, DisplayTarget};

use super::PaintEngine;

impl PaintEngine {
    /// End-of-frame upload
    ///
    /// Replaces the display contents with the full canvas if anything changed
    /// since the last upload. Returns whether a push happened. A failed push
    /// leaves the canvas dirty so the next frame tries again.
    pub fn end_frame(&mut self, display: &mut dyn DisplayTarget) -> Result<bool, DisplayError> {
        if !self.canvas.is_dirty() {
            return Ok(false);
        }

        let (width, height) = (self.canvas.width(), self.canvas.height());
        if let Err(err) = display.replace_pixels(width, height, self.canvas.pixels()) {
            warn!("end_frame: presentation failed, will retry: {}", err);
            return Err(err);
        }

        self.canvas.mark_clean();
        debug!("end_frame: presented {}x{} canvas", width, height);
        Ok(true)
    }
}
