//! IPC message protocol for Sketchpad
//!
//! Defines the commands a toolbar (or any other UI layer) sends to the paint
//! engine. The engine side maps these onto its tool-selection handle.

pub mod commands;
pub mod error;

pub use commands::*;
pub use error::IpcError;
