//! Process-wide copy/paste buffer for board items.
//!
//! The slot holds deep value snapshots: mutating or deleting the source
//! items after a copy does not affect the buffer, and pasting never
//! drains it, so repeated pastes each produce independent clones. The
//! buffer lives for the process and is distinct from the host system
//! clipboard.

use crate::types::BoardItem;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

static CLIPBOARD: Lazy<Mutex<Vec<BoardItem>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Overwrite the buffer with deep copies of the given items.
pub fn copy_items<'a>(items: impl Iterator<Item = &'a BoardItem>) {
    let snapshot: Vec<BoardItem> = items.cloned().collect();
    if snapshot.is_empty() {
        return;
    }
    *CLIPBOARD.lock() = snapshot;
}

/// Clone the buffered items without consuming them.
pub fn snapshot() -> Vec<BoardItem> {
    CLIPBOARD.lock().clone()
}

pub fn is_empty() -> bool {
    CLIPBOARD.lock().is_empty()
}

pub fn clear() {
    CLIPBOARD.lock().clear();
}
