//! Sprintboard - an interactive whiteboard engine for sprint planning.
//!
//! This crate implements the headless core of a freeform planning canvas:
//! sticky notes, text boxes and shapes placed on a pannable, zoomable
//! surface, with multi-select, drag/resize gestures, inter-item
//! connectors, rich multi-line content, a copy/paste buffer, and
//! column-based drop classification.
//!
//! The engine owns all state and mutates it synchronously from input
//! events; rendering and persistence are external collaborators. A
//! renderer consumes [`render::RenderSnapshot`], a storage layer consumes
//! [`board::BoardState`].

pub mod app;
pub mod board;
pub mod clipboard;
pub mod columns;
pub mod constants;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod input;
pub mod render;
pub mod selection;
pub mod spatial_index;
pub mod types;

pub use app::Sprintboard;
pub use board::{Board, BoardState};
pub use columns::{Column, ColumnLayout};
pub use error::{BoardError, BoardResult};
pub use geometry::{point, Point};
pub use types::{BoardItem, Connection, ContentLine, ItemKind, LineType, TextStyle, ToolType};
