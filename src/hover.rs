//! Hover tracking with delayed hide for the quick-action toolbar.
//!
//! Moving the pointer from an item onto its floating toolbar must not
//! flicker the toolbar away, so leaving an item only arms a hide
//! deadline; re-entering the item or its toolbar cancels it. The
//! deadline is plain data checked cooperatively via [`HoverController::
//! tick`], never a raw timer handle, so a stale hide can never fire
//! after a fresh hover: arming always replaces the previous deadline.

use crate::constants::HOVER_HIDE_DELAY_MS;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
struct PendingHide {
    item_id: u64,
    deadline: Instant,
}

/// Tracks which item currently shows its quick-action toolbar.
#[derive(Debug, Default)]
pub struct HoverController {
    hovered: Option<u64>,
    pending_hide: Option<PendingHide>,
}

impl HoverController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The item whose toolbar is currently visible, if any.
    pub fn hovered(&self) -> Option<u64> {
        self.hovered
    }

    /// Pointer entered an item: cancel any pending hide and show its
    /// toolbar.
    pub fn pointer_enter(&mut self, item_id: u64) {
        self.pending_hide = None;
        self.hovered = Some(item_id);
    }

    /// Pointer entered the item's toolbar; behaves exactly like
    /// re-entering the item itself.
    pub fn toolbar_enter(&mut self, item_id: u64) {
        self.pointer_enter(item_id);
    }

    /// Pointer left the item: arm the hide deadline. Any previously
    /// armed deadline is replaced.
    pub fn pointer_leave(&mut self, item_id: u64, now: Instant) {
        if self.hovered != Some(item_id) {
            return;
        }
        self.pending_hide = Some(PendingHide {
            item_id,
            deadline: now + Duration::from_millis(HOVER_HIDE_DELAY_MS),
        });
    }

    /// Apply an expired hide deadline. Returns true when the hover state
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending_hide else {
            return false;
        };
        if now < pending.deadline {
            return false;
        }

        self.pending_hide = None;
        if self.hovered == Some(pending.item_id) {
            self.hovered = None;
            return true;
        }
        false
    }

    /// Drop all state referring to an item, used when it is deleted.
    pub fn forget(&mut self, item_id: u64) {
        if self.hovered == Some(item_id) {
            self.hovered = None;
        }
        if self.pending_hide.is_some_and(|p| p.item_id == item_id) {
            self.pending_hide = None;
        }
    }
}
