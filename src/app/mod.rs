//! Engine module - the main Sprintboard state and command surface.
//!
//! - `state` - The Sprintboard struct definition and sub-structs
//! - `commands` - Tool, zoom, clipboard, and quick-action commands

mod commands;
mod state;

pub use state::{CanvasState, EditState, Sprintboard, ToolState};
