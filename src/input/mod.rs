//! Pointer and keyboard input handling for the board canvas.
//!
//! This module implements all interaction logic for the sprint board:
//! item creation via tools, selection, dragging, resizing, panning, and
//! the two-click connector gesture.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to
//! track the current gesture. Each variant carries exactly the data its
//! gesture needs, making impossible states unrepresentable.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `coords` - Screen/world coordinate conversion
//! - `mouse_down` - Pointer down handling (creation, selection, gesture start)
//! - `drag` - Pointer move handling (drag, resize, pan)
//! - `mouse_up` - Pointer up handling (finalize gestures, drop classification)
//! - `keyboard` - Escape/Delete/Copy/Paste commands

pub mod coords;
mod drag;
mod keyboard;
mod mouse_down;
mod mouse_up;
mod state;

pub use keyboard::KeyEvent;
pub use state::InputState;

use crate::geometry::Point;

/// Modifier keys held during a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
}

/// Pointer press, in screen coordinates.
#[derive(Clone, Copy, Debug)]
pub struct MouseDownEvent {
    pub position: Point,
    pub modifiers: Modifiers,
}

impl MouseDownEvent {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_shift(position: Point) -> Self {
        Self {
            position,
            modifiers: Modifiers { shift: true },
        }
    }
}

/// Pointer movement, in screen coordinates.
#[derive(Clone, Copy, Debug)]
pub struct MouseMoveEvent {
    pub position: Point,
}

/// Pointer release, in screen coordinates.
#[derive(Clone, Copy, Debug)]
pub struct MouseUpEvent {
    pub position: Point,
}
