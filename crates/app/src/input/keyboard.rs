//! Keyboard shortcuts for the toolbar
//!
//! - 1..4: pencil, eraser, brush, sketch
//! - 0: no tool
//! - C: clear
//! - K / R / G / B: black, red, green, blue draw color

use minifb::Key;
use sketchpad_ipc::{PaintCommand, Tool};

/// Map a freshly pressed key to a toolbar command
pub fn command_for_key(key: Key) -> Option<PaintCommand> {
    let command = match key {
        Key::Key0 => PaintCommand::SetTool { tool: Tool::None },
        Key::Key1 => PaintCommand::SetTool { tool: Tool::Pencil },
        Key::Key2 => PaintCommand::SetTool { tool: Tool::Eraser },
        Key::Key3 => PaintCommand::SetTool { tool: Tool::Brush },
        Key::Key4 => PaintCommand::SetTool { tool: Tool::Sketch },
        Key::C => PaintCommand::Clear,
        Key::K => PaintCommand::SetDrawColor { color: [0.0, 0.0, 0.0, 1.0] },
        Key::R => PaintCommand::SetDrawColor { color: [1.0, 0.0, 0.0, 1.0] },
        Key::G => PaintCommand::SetDrawColor { color: [0.0, 0.6, 0.0, 1.0] },
        Key::B => PaintCommand::SetDrawColor { color: [0.0, 0.0, 1.0, 1.0] },
        _ => return None,
    };
    Some(command)
}
