//! Discrete commands - tool and zoom selection, clipboard operations,
//! deletion, and the quick-action toolbar verbs (edit, recolor, lock,
//! rotate, duplicate, z-order).

use super::Sprintboard;
use crate::clipboard;
use crate::constants::PASTE_OFFSET;
use crate::editor::EditSession;
use crate::types::{BoardItem, ToolType};
use tracing::debug;

impl Sprintboard {
    // ==================== Tools & view ====================

    /// Switch the active tool. A half-finished connector gesture is
    /// abandoned when the connector tool is left.
    pub fn set_tool(&mut self, tool: ToolType) {
        if self.canvas.input_state.is_connecting() {
            self.canvas.input_state.reset();
        }
        self.tools.selected = tool;
    }

    pub fn zoom_in(&mut self) {
        self.canvas.board.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.canvas.board.zoom_out();
    }

    pub fn zoom_reset(&mut self) {
        self.canvas.board.zoom_reset();
    }

    // ==================== Clipboard ====================

    /// Snapshot the selected items into the clipboard slot. Empty
    /// selections leave the slot untouched.
    pub fn copy_selection(&mut self) {
        let ids = self.canvas.selection.ids();
        clipboard::copy_items(
            ids.iter()
                .filter_map(|&id| self.canvas.board.get_item(id)),
        );
        debug!(count = ids.len(), "selection copied");
    }

    /// Clone the clipboard contents onto the board. Each paste produces
    /// an independent set of items, offset so they do not cover the
    /// originals, stacked above everything else, and selected.
    pub fn paste(&mut self) -> Vec<u64> {
        self.insert_clones(clipboard::snapshot())
    }

    /// Copy-and-paste in one step, without touching the clipboard slot.
    pub fn duplicate_selection(&mut self) -> Vec<u64> {
        let ids = self.canvas.selection.ids();
        let snapshot: Vec<BoardItem> = ids
            .iter()
            .filter_map(|&id| self.canvas.board.get_item(id))
            .cloned()
            .collect();
        self.insert_clones(snapshot)
    }

    /// Duplicate a single item (quick-action toolbar verb).
    pub fn duplicate_item(&mut self, id: u64) -> Option<u64> {
        let snapshot: Vec<BoardItem> = self.canvas.board.get_item(id).cloned().into_iter().collect();
        self.insert_clones(snapshot).first().copied()
    }

    fn insert_clones(&mut self, snapshot: Vec<BoardItem>) -> Vec<u64> {
        if snapshot.is_empty() {
            return Vec::new();
        }

        let mut pasted = Vec::with_capacity(snapshot.len());
        for mut item in snapshot {
            let id = self.canvas.board.next_item_id;
            self.canvas.board.next_item_id += 1;

            item.id = id;
            item.position.0 += PASTE_OFFSET;
            item.position.1 += PASTE_OFFSET;
            item.z_index = self.canvas.board.max_z_index().map_or(0, |z| z + 1);

            self.canvas.board.insert_item(item);
            pasted.push(id);
        }

        debug!(count = pasted.len(), "items pasted");
        self.canvas.selection.replace(pasted.iter().copied());
        pasted
    }

    // ==================== Deletion ====================

    /// Delete every unlocked selected item, cascading connection
    /// removal. No-ops while an edit session is open.
    pub fn delete_selection(&mut self) {
        if self.editor.session.is_some() {
            return;
        }
        for id in self.canvas.selection.ids() {
            self.delete_item(id);
        }
    }

    /// Delete one item. Locked items and the item under edit refuse.
    pub fn delete_item(&mut self, id: u64) {
        if self.editing_item() == Some(id) {
            return;
        }
        let locked = self
            .canvas
            .board
            .get_item(id)
            .is_none_or(|item| item.locked);
        if locked {
            return;
        }

        self.canvas.board.remove_item(id);
        self.canvas.selection.remove(id);
        self.hover.forget(id);
    }

    // ==================== Quick actions ====================

    /// Recolor an item. The color must come from the kind's palette;
    /// anything else is silently ignored, as is a locked item.
    pub fn set_item_color(&mut self, id: u64, color: &str) {
        if let Some(item) = self.canvas.board.get_item_mut(id) {
            if item.locked || !item.kind.palette().contains(&color) {
                return;
            }
            item.color = color.to_string();
            self.canvas.board.mark_dirty();
        }
    }

    /// Cycle an item through its palette (toolbar recolor button).
    pub fn cycle_item_color(&mut self, id: u64) {
        if let Some(item) = self.canvas.board.get_item_mut(id) {
            if item.locked {
                return;
            }
            let palette = item.kind.palette();
            let current = palette
                .iter()
                .position(|&c| c == item.color)
                .unwrap_or(palette.len() - 1);
            item.color = palette[(current + 1) % palette.len()].to_string();
            self.canvas.board.mark_dirty();
        }
    }

    /// Toggle the lock flag. Unlock is the one mutation a locked item
    /// accepts.
    pub fn toggle_lock(&mut self, id: u64) {
        if let Some(item) = self.canvas.board.get_item_mut(id) {
            item.locked = !item.locked;
            self.canvas.board.mark_dirty();
        }
    }

    pub fn set_rotation(&mut self, id: u64, degrees: f32) {
        if let Some(item) = self.canvas.board.get_item_mut(id) {
            if item.locked {
                return;
            }
            item.rotation = degrees;
            self.canvas.board.mark_dirty();
        }
    }

    pub fn bring_selection_to_front(&mut self) {
        let ids = self.canvas.selection.ids();
        self.canvas.board.bring_to_front(&ids);
    }

    pub fn send_selection_to_back(&mut self) {
        let ids = self.canvas.selection.ids();
        self.canvas.board.send_to_back(&ids);
    }

    // ==================== Content editing ====================

    /// Open an edit session on an item. Refuses locked items, shape
    /// kinds, and a second concurrent session.
    pub fn start_editing(&mut self, id: u64) -> bool {
        if self.editor.session.is_some() {
            return false;
        }
        let Some(session) = self.canvas.board.get_item(id).and_then(EditSession::open) else {
            return false;
        };
        debug!(item_id = id, "edit session opened");
        self.editor.session = Some(session);
        true
    }

    /// Commit the open session back into the board.
    pub fn commit_editing(&mut self) {
        if let Some(session) = self.editor.session.take() {
            session.commit(&mut self.canvas.board);
        }
    }

    /// Drop the open session without writing anything back.
    pub fn cancel_editing(&mut self) {
        if let Some(session) = self.editor.session.take() {
            debug!(item_id = session.item_id(), "edit session discarded");
        }
    }
}
