//! Mapping from the shared configuration to engine and window settings

use minifb::Scale;
use painting::PaintSettings;
use sketchpad_config::SketchpadConfig;

/// Engine construction parameters; the canvas is bound to the display size
pub fn paint_settings(config: &SketchpadConfig) -> PaintSettings {
    PaintSettings {
        width: config.display.width,
        height: config.display.height,
        background: config.canvas.background,
        draw_color: config.canvas.draw_color,
        sketch_radius: config.canvas.sketch_radius,
    }
}

/// Nearest window upscaling step at or above `scale`
///
/// Non-finite values fall back to no scaling.
pub fn window_scale(scale: f32) -> Scale {
    if !scale.is_finite() || scale <= 1.0 {
        Scale::X1
    } else if scale <= 2.0 {
        Scale::X2
    } else if scale <= 4.0 {
        Scale::X4
    } else {
        Scale::X8
    }
}
