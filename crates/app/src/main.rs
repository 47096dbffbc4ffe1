//! Sketchpad - desktop host for the paint engine
//!
//! One window, one canvas. Every frame the host samples the keyboard and
//! mouse, forwards pointer events to the engine, presents the canvas if it
//! changed, and draws the toolbar on top. JSON commands on stdin drive the
//! same tool selection as the toolbar.

use glam::Vec2;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use painting::{PaintEngine, PointerEventKind, ToolSelection};
use sketchpad_config::SketchpadConfig;
use tracing::{debug, info};

mod commands;
mod config;
mod display;
mod error;
mod input;
mod toolbar;

use display::WindowTarget;
use error::AppError;
use input::keyboard::command_for_key;
use input::{MouseSample, PointerTracker};
use toolbar::{Toolbar, apply_command};

const TARGET_FPS: usize = 60;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt::init();

    let config = SketchpadConfig::from_env()?;
    let mut engine = PaintEngine::init(config::paint_settings(&config))?;
    let (width, height) = (engine.width(), engine.height());

    info!(
        "Starting Sketchpad with a {}x{} canvas at scale {}",
        width, height, config.display.scale
    );

    let mut window = Window::new(
        "Sketchpad",
        width as usize,
        height as usize,
        WindowOptions {
            scale: config::window_scale(config.display.scale),
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(TARGET_FPS);

    let mut target = WindowTarget::new(width, height, config.canvas.backdrop);
    let mut tracker = PointerTracker::default();
    let toolbar = Toolbar::new(width, height);
    let mut frame = vec![0u32; (width as usize) * (height as usize)];
    let scripted = commands::spawn_stdin_reader();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        for key in window.get_keys_pressed(KeyRepeat::No) {
            if let Some(command) = command_for_key(key) {
                apply_command(&mut engine, &command);
            }
        }

        for command in scripted.try_iter() {
            apply_command(&mut engine, &command);
        }

        let sample = MouseSample {
            position: window
                .get_mouse_pos(MouseMode::Discard)
                .map(|(x, y)| Vec2::new(x, y)),
            left_down: window.get_mouse_down(MouseButton::Left),
        };
        if let Some(event) = tracker.update(sample) {
            match toolbar.hit(event.position) {
                Some(command) if event.kind == PointerEventKind::Down => {
                    apply_command(&mut engine, &command);
                    tracker.consume();
                }
                _ => engine.on_pointer_event(event),
            }
        }

        if let Err(err) = engine.end_frame(&mut target) {
            debug!("Canvas not presented this frame: {}", err);
        }

        frame.copy_from_slice(target.pixels());
        toolbar.draw(&mut frame, engine.tool());
        window.update_with_buffer(&frame, width as usize, height as usize)?;
    }

    info!("Window closed, shutting down");
    Ok(())
}

