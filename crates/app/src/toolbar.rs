//! On-screen toolbar: a column of buttons along the left edge
//!
//! Buttons are sized relative to the window (10% wide, 15% tall) and stacked
//! from 15% of the height downward. Clicking one produces a
//! [`PaintCommand`]; commands reach the engine through its
//! [`ToolSelection`] handle.

use glam::Vec2;
use painting::{Tool as EngineTool, ToolSelection};
use sketchpad_ipc::{PaintCommand, Tool};
use tracing::{info, warn};

const BUTTON_FILL: u32 = 0x00_30_30_30;
const BUTTON_ACTIVE: u32 = 0x00_30_70_C0;
const BUTTON_BORDER: u32 = 0x00_10_10_10;

/// Axis-aligned rectangle in window pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// One toolbar button
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub command: PaintCommand,
    /// Marker color drawn inside the button
    pub accent: u32,
}

pub struct Toolbar {
    buttons: Vec<Button>,
    width: usize,
    height: usize,
}

impl Toolbar {
    /// Lay out the buttons for a `width` x `height` window
    pub fn new(width: u32, height: u32) -> Self {
        let (w, h) = (width as f32, height as f32);
        let entries = [
            (PaintCommand::SetTool { tool: Tool::Pencil }, 0x00_E0_E0_E0),
            (PaintCommand::SetTool { tool: Tool::Eraser }, 0x00_F0_A0_A0),
            (PaintCommand::SetTool { tool: Tool::Brush }, 0x00_A0_D0_F0),
            (PaintCommand::SetTool { tool: Tool::Sketch }, 0x00_B0_F0_B0),
            (PaintCommand::Clear, 0x00_F0_D0_60),
        ];

        let buttons = entries
            .into_iter()
            .enumerate()
            .map(|(index, (command, accent))| Button {
                rect: Rect {
                    x: 0.0,
                    y: 0.15 * h * (index as f32 + 1.0),
                    width: 0.1 * w,
                    height: 0.15 * h,
                },
                command,
                accent,
            })
            .collect();

        Self {
            buttons,
            width: width as usize,
            height: height as usize,
        }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Command of the button under `point`, if any
    pub fn hit(&self, point: Vec2) -> Option<PaintCommand> {
        self.buttons
            .iter()
            .find(|button| button.rect.contains(point))
            .map(|button| button.command.clone())
    }

    /// Draw the buttons on top of a presented frame
    pub fn draw(&self, frame: &mut [u32], active: EngineTool) {
        for button in &self.buttons {
            let selected = matches!(
                &button.command,
                PaintCommand::SetTool { tool } if engine_tool(*tool) == active
            );
            let fill = if selected { BUTTON_ACTIVE } else { BUTTON_FILL };
            let rect = button.rect;

            self.fill_rect(frame, rect, BUTTON_BORDER);
            self.fill_rect(
                frame,
                Rect {
                    x: rect.x + 1.0,
                    y: rect.y + 1.0,
                    width: rect.width - 2.0,
                    height: rect.height - 2.0,
                },
                fill,
            );
            self.fill_rect(
                frame,
                Rect {
                    x: rect.x + rect.width * 0.3,
                    y: rect.y + rect.height * 0.3,
                    width: rect.width * 0.4,
                    height: rect.height * 0.4,
                },
                button.accent,
            );
        }
    }

    fn fill_rect(&self, frame: &mut [u32], rect: Rect, color: u32) {
        let x0 = rect.x.max(0.0) as usize;
        let y0 = rect.y.max(0.0) as usize;
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);

        for y in y0..y1 {
            let row = y * self.width;
            if let Some(span) = frame.get_mut(row + x0..row + x1.max(x0)) {
                span.fill(color);
            }
        }
    }
}

/// Engine-side tool for a wire tool
pub fn engine_tool(tool: Tool) -> EngineTool {
    match tool {
        Tool::None => EngineTool::None,
        Tool::Pencil => EngineTool::Pencil,
        Tool::Eraser => EngineTool::Eraser,
        Tool::Brush => EngineTool::Brush,
        Tool::Sketch => EngineTool::Sketch,
    }
}

/// Apply a toolbar command through the engine's tool-selection handle
pub fn apply_command(target: &mut impl ToolSelection, command: &PaintCommand) {
    match command {
        PaintCommand::SetTool { tool } => target.set_tool(engine_tool(*tool)),
        PaintCommand::SetDrawColor { color } => match target.set_draw_color(*color) {
            Ok(()) => info!("Draw color set to {:?}", color),
            Err(err) => warn!("Ignoring draw color command: {}", err),
        },
        PaintCommand::Clear => target.clear(),
    }
}
