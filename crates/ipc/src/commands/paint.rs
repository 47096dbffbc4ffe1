//! Paint command types for the painting system.

use serde::{Deserialize, Serialize};

use crate::error::IpcError;

/// Painting tool as selected on the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    None,
    #[default]
    Pencil,
    Eraser,
    Brush,
    Sketch,
}

/// Commands for controlling the painting system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PaintCommand {
    /// Select the active tool
    SetTool { tool: Tool },
    /// Set draw color (RGBA, 0.0-1.0)
    SetDrawColor { color: [f32; 4] },
    /// Deselect the tool and reset the canvas to its background
    Clear,
}

impl PaintCommand {
    /// Parse a command from its JSON form
    pub fn from_json(text: &str) -> Result<Self, IpcError> {
        let command: Self = serde_json::from_str(text)?;
        command.validate()?;
        Ok(command)
    }

    /// Reject payloads that parse but cannot be applied
    pub fn validate(&self) -> Result<(), IpcError> {
        if let PaintCommand::SetDrawColor { color } = self {
            if color.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(IpcError::InvalidFormat(format!(
                    "draw color channels must be in 0..=1, got {color:?}"
                )));
            }
        }
        Ok(())
    }
}
