//! Sketchpad painting system - CPU raster paint engine
//!
//! This crate provides the paint engine and its building blocks:
//! - [`surface::CpuSurface`] - float RGBA pixel store
//! - [`canvas::Canvas`] - pixel writes with occupancy and dirty tracking
//! - [`stroke`] - disk stamps and fixed-step lines
//! - [`sketch::OccupancyBuffer`] - inked-pixel flags and neighbor queries
//! - [`display`] - the display boundary presentation sync pushes to
//! - [`engine::PaintEngine`] - tool dispatch and frame entry points
//! - [`validation`] - checks for construction parameters

pub mod canvas;
pub mod constants;
pub mod display;
pub mod engine;
pub mod sketch;
pub mod stroke;
pub mod surface;
pub mod types;
pub mod validation;

pub use canvas::*;
pub use constants::*;
pub use display::*;
pub use engine::*;
pub use sketch::*;
pub use stroke::*;
pub use surface::*;
pub use types::*;
pub use validation::*;
