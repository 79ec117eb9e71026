//! Gesture state machine for all pointer interactions.
//!
//! A single explicit enum replaces scattered flags and nullable item
//! references; each variant carries exactly the data its gesture needs.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingItems    (pointer down on unlocked item, select/pan tool)
//! Idle -> ResizingItem     (pointer down on item resize corner)
//! Idle -> Panning          (pointer down on empty canvas, pan tool)
//! Idle -> ConnectingFrom   (pointer down on item, connector tool)
//!
//! Any  -> Idle             (pointer up - finalizes the gesture)
//! ```
//!
//! `ConnectingFrom` is the one exception: connecting is a two-click
//! gesture, so it survives pointer up and ends on the second click.

use crate::geometry::Point;

/// The gesture currently in progress, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Dragging the selection, anchored to the item under the cursor
    DraggingItems {
        /// The item the pointer went down on
        primary_item: u64,
        /// World-space offset from the primary item's origin to the cursor
        grab_offset: Point,
    },

    /// Resizing a single item from its bottom-right corner
    ResizingItem {
        item_id: u64,
        /// Size when the gesture started, for change detection on release
        start_size: (f32, f32),
    },

    /// Panning the view
    Panning {
        /// Screen-space offset between the cursor and the view offset
        grab_offset: Point,
    },

    /// First click of a connector gesture has landed on this item
    ConnectingFrom { item_id: u64 },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging_items(&self) -> bool {
        matches!(self, Self::DraggingItems { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingItem { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, Self::ConnectingFrom { .. })
    }

    /// The item being dragged, if any.
    pub fn dragging_item(&self) -> Option<u64> {
        match self {
            Self::DraggingItems { primary_item, .. } => Some(*primary_item),
            _ => None,
        }
    }

    /// The item being resized, if any.
    pub fn resizing_item(&self) -> Option<u64> {
        match self {
            Self::ResizingItem { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    /// The pending connector source, if any.
    pub fn connecting_from(&self) -> Option<u64> {
        match self {
            Self::ConnectingFrom { item_id } => Some(*item_id),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_dragging(&mut self, primary_item: u64, grab_offset: Point) {
        *self = Self::DraggingItems {
            primary_item,
            grab_offset,
        };
    }

    pub fn start_resizing(&mut self, item_id: u64, start_size: (f32, f32)) {
        *self = Self::ResizingItem {
            item_id,
            start_size,
        };
    }

    pub fn start_panning(&mut self, grab_offset: Point) {
        *self = Self::Panning { grab_offset };
    }

    pub fn start_connecting(&mut self, item_id: u64) {
        *self = Self::ConnectingFrom { item_id };
    }
}
