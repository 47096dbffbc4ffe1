//! Shared configuration for Sketchpad
//!
//! This crate provides the single source of truth for the display size and
//! canvas settings. Values come from defaults, an optional JSON file named by
//! `SKETCHPAD_CONFIG`, and per-field environment overrides, in that order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 1280;

/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 720;

/// Default scale factor (1.0 = no scaling)
pub const DEFAULT_SCALE: f32 = 1.0;

/// Default sketch neighbor radius
pub const DEFAULT_SKETCH_RADIUS: u32 = 10;

/// Environment variable naming a JSON config file
pub const CONFIG_PATH_VAR: &str = "SKETCHPAD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Display configuration for window and canvas size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Window width in logical pixels (the canvas matches it)
    pub width: u32,
    /// Window height in logical pixels (the canvas matches it)
    pub height: u32,
    /// Window upscaling factor
    pub scale: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
        }
    }
}

impl DisplayConfig {
    /// Create a new display config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale: DEFAULT_SCALE,
        }
    }
}

/// Canvas colors and tool parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas color at startup, after clear, and under the eraser
    pub background: [f32; 4],
    /// Initial draw color
    pub draw_color: [f32; 4],
    /// Sketch tool neighbor radius
    pub sketch_radius: u32,
    /// Opaque color the canvas is composited over on screen
    pub backdrop: [f32; 3],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: [1.0, 1.0, 1.0, 0.0],
            draw_color: [0.0, 0.0, 0.0, 1.0],
            sketch_radius: DEFAULT_SKETCH_RADIUS,
            backdrop: [0.5, 0.5, 0.5],
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    pub display: DisplayConfig,
    pub canvas: CanvasConfig,
}

impl SketchpadConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        check_scale("display.scale", config.display.scale)?;
        Ok(config)
    }

    /// Apply per-field overrides looked up by variable name
    ///
    /// Recognized: `SKETCHPAD_WIDTH`, `SKETCHPAD_HEIGHT`, `SKETCHPAD_SCALE`,
    /// `SKETCHPAD_BACKGROUND`, `SKETCHPAD_COLOR` (colors as `r,g,b,a`).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(value) = lookup("SKETCHPAD_WIDTH") {
            self.display.width = parse_u32("SKETCHPAD_WIDTH", &value)?;
        }
        if let Some(value) = lookup("SKETCHPAD_HEIGHT") {
            self.display.height = parse_u32("SKETCHPAD_HEIGHT", &value)?;
        }
        if let Some(value) = lookup("SKETCHPAD_SCALE") {
            self.display.scale = parse_scale("SKETCHPAD_SCALE", &value)?;
        }
        if let Some(value) = lookup("SKETCHPAD_BACKGROUND") {
            self.canvas.background = parse_color("SKETCHPAD_BACKGROUND", &value)?;
        }
        if let Some(value) = lookup("SKETCHPAD_COLOR") {
            self.canvas.draw_color = parse_color("SKETCHPAD_COLOR", &value)?;
        }
        Ok(())
    }
}

fn parse_u32(var: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
        reason: "expected a positive integer",
    })
}

fn parse_scale(var: &'static str, value: &str) -> Result<f32, ConfigError> {
    let scale = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
        reason: "expected a number",
    })?;
    check_scale(var, scale)?;
    Ok(scale)
}

fn check_scale(var: &'static str, scale: f32) -> Result<(), ConfigError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ConfigError::InvalidValue {
            var,
            value: scale.to_string(),
            reason: "scale must be a positive number",
        });
    }
    Ok(())
}

/// Parse `r,g,b,a` floats in [0, 1]
pub fn parse_color(var: &'static str, value: &str) -> Result<[f32; 4], ConfigError> {
    let invalid = |reason| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
        reason,
    };

    let channels = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid("expected comma-separated numbers"))?;

    let color: [f32; 4] = channels
        .try_into()
        .map_err(|_| invalid("expected four channels r,g,b,a"))?;

    if color.iter().any(|c| !(0.0..=1.0).contains(c)) {
        return Err(invalid("channels must be in 0..=1"));
    }
    Ok(color)
}
