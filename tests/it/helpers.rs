//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestBoardBuilder` - Builder pattern for creating engines with items
//! - Pointer gesture helpers (`drag`, `click`)
//! - `clipboard_lock` for tests touching the process-wide clipboard slot

use sprintboard::app::Sprintboard;
use sprintboard::columns::{Column, ColumnLayout};
use sprintboard::geometry::point;
use sprintboard::input::{MouseDownEvent, MouseMoveEvent, MouseUpEvent};
use sprintboard::types::{ContentLine, ItemKind};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Serialize tests that touch the process-wide clipboard slot, so
/// parallel test threads cannot interleave copy and paste.
pub fn clipboard_lock() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Opt-in tracing output for debugging test failures
/// (`RUST_LOG=sprintboard=debug cargo test`).
pub fn init_tracing() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

// ============================================================================
// TestBoardBuilder - Builder pattern for creating engines
// ============================================================================

/// Builder for creating a Sprintboard engine with items and view
/// configuration.
///
/// # Example
/// ```ignore
/// let app = TestBoardBuilder::new()
///     .with_note((0.0, 0.0))
///     .with_item(ItemKind::Rectangle, (400.0, 0.0))
///     .with_zoom(1.5)
///     .build();
/// ```
pub struct TestBoardBuilder {
    items: Vec<(ItemKind, (f32, f32))>,
    zoom: f32,
    offset: (f32, f32),
    columns: ColumnLayout,
}

impl Default for TestBoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBoardBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            zoom: 1.0,
            offset: (0.0, 0.0),
            columns: ColumnLayout::sprint_default(),
        }
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = (x, y);
        self
    }

    pub fn with_columns(mut self, columns: ColumnLayout) -> Self {
        self.columns = columns;
        self
    }

    /// Add a sticky note at the specified world position.
    pub fn with_note(mut self, pos: (f32, f32)) -> Self {
        self.items.push((ItemKind::Note, pos));
        self
    }

    /// Add an item of any kind at the specified world position.
    pub fn with_item(mut self, kind: ItemKind, pos: (f32, f32)) -> Self {
        self.items.push((kind, pos));
        self
    }

    /// Add N notes spaced 400 world units apart on the x axis.
    pub fn with_n_notes(mut self, count: usize) -> Self {
        for i in 0..count {
            self.items.push((ItemKind::Note, (i as f32 * 400.0, 0.0)));
        }
        self
    }

    pub fn build(self) -> Sprintboard {
        let mut app = Sprintboard::new(self.columns);
        app.canvas.board.view_offset = point(self.offset.0, self.offset.1);
        app.canvas.board.zoom = self.zoom;

        for (kind, pos) in self.items {
            app.canvas.board.add_item(kind, point(pos.0, pos.1));
        }

        app
    }
}

// ============================================================================
// Gesture helpers
// ============================================================================

/// Press, move, release in screen coordinates.
pub fn drag(app: &mut Sprintboard, from: (f32, f32), to: (f32, f32)) {
    app.handle_mouse_down(&MouseDownEvent::new(point(from.0, from.1)));
    app.handle_mouse_move(&MouseMoveEvent {
        position: point(to.0, to.1),
    });
    app.handle_mouse_up(&MouseUpEvent {
        position: point(to.0, to.1),
    });
}

/// Press and release without movement.
pub fn click(app: &mut Sprintboard, at: (f32, f32)) {
    app.handle_mouse_down(&MouseDownEvent::new(point(at.0, at.1)));
    app.handle_mouse_up(&MouseUpEvent {
        position: point(at.0, at.1),
    });
}

// ============================================================================
// Content and layout helpers
// ============================================================================

/// Overwrite an item's content with plain paragraph lines.
pub fn set_lines(app: &mut Sprintboard, id: u64, lines: &[&str]) {
    let item = app.canvas.board.get_item_mut(id).unwrap();
    item.content = lines.iter().map(|text| ContentLine::new(*text)).collect();
}

/// Five 250-wide columns "a".."e" starting at x = 0.
pub fn five_columns() -> ColumnLayout {
    ColumnLayout::new(
        ["a", "b", "c", "d", "e"]
            .iter()
            .map(|id| Column::new(*id, id.to_uppercase(), 250.0))
            .collect(),
    )
}

// ============================================================================
// Assertion helpers
// ============================================================================

pub fn assert_item_count(app: &Sprintboard, expected: usize) {
    assert_eq!(
        app.board().items.len(),
        expected,
        "Expected {} items, found {}",
        expected,
        app.board().items.len()
    );
}

pub fn assert_item_position(app: &Sprintboard, id: u64, expected: (f32, f32)) {
    let item = app.board().get_item(id);
    assert!(item.is_some(), "Item {} not found", id);
    assert_eq!(
        item.unwrap().position,
        expected,
        "Item {} has wrong position",
        id
    );
}
