//! The authoritative board state: items, connections, columns, view.
//!
//! All writes flow through the interaction layer and the content
//! editor's commit; everything else sees the board read-only. The board
//! guarantees referential integrity at every observable boundary: no
//! connection ever references a removed item.

use crate::columns::ColumnLayout;
use crate::constants::{
    DEFAULT_CONNECTION_COLOR, DEFAULT_FONT_SIZE, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};
use crate::error::BoardResult;
use crate::geometry::Point;
use crate::spatial_index::SpatialIndex;
use crate::types::{BoardItem, Connection, ItemKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// Serializable snapshot of a board, the shape the persistence boundary
/// consumes. Derived state (the spatial index, the dirty flag) is
/// rebuilt on restore.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardState {
    pub id: String,
    pub view_offset: Point,
    pub zoom: f32,
    pub items: Vec<BoardItem>,
    pub connections: Vec<Connection>,
    pub columns: ColumnLayout,
    pub next_item_id: u64,
    pub next_connection_id: u64,
}

/// The board itself.
pub struct Board {
    pub id: String,
    pub items: Vec<BoardItem>,
    pub connections: Vec<Connection>,
    pub columns: ColumnLayout,
    /// Pan translation in screen pixels
    pub view_offset: Point,
    /// Clamped to [`MIN_ZOOM`], [`MAX_ZOOM`]
    pub zoom: f32,
    pub next_item_id: u64,
    pub next_connection_id: u64,
    spatial_index: SpatialIndex,
    dirty: bool,
}

impl Board {
    pub fn new(columns: ColumnLayout) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            items: Vec::new(),
            connections: Vec::new(),
            columns,
            view_offset: Point::ZERO,
            zoom: DEFAULT_ZOOM,
            next_item_id: 0,
            next_connection_id: 0,
            spatial_index: SpatialIndex::new(),
            dirty: false,
        }
    }

    pub fn new_for_test() -> Self {
        Self::new(ColumnLayout::sprint_default())
    }

    // ==================== Items ====================

    /// Create an item of the given kind at a world position, with
    /// kind-specific default size, color and content. The item lands on
    /// top of the z-order and in the first column.
    pub fn add_item(&mut self, kind: ItemKind, position: Point) -> u64 {
        let id = self.next_item_id;
        self.next_item_id += 1;

        let item = BoardItem {
            id,
            kind,
            position: (position.x, position.y),
            size: kind.default_size(),
            content: Vec::new(),
            color: kind.default_color().to_string(),
            font_size: DEFAULT_FONT_SIZE,
            locked: false,
            rotation: 0.0,
            z_index: self.max_z_index().map_or(0, |z| z + 1),
            column: self.columns.first_id().map(str::to_string),
            story_points: None,
        };

        debug!(item_id = id, kind = item.kind.type_label(), "item added");
        self.spatial_index.upsert(&item);
        self.items.push(item);
        self.mark_dirty();
        id
    }

    /// Insert a pre-built item (paste/duplicate path). The caller is
    /// responsible for having assigned a fresh id and z-index.
    pub fn insert_item(&mut self, item: BoardItem) {
        self.next_item_id = self.next_item_id.max(item.id + 1);
        self.spatial_index.upsert(&item);
        self.items.push(item);
        self.mark_dirty();
    }

    pub fn get_item(&self, id: u64) -> Option<&BoardItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_item_mut(&mut self, id: u64) -> Option<&mut BoardItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Remove an item and every connection referencing it.
    pub fn remove_item(&mut self, id: u64) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };

        self.items.remove(index);
        self.spatial_index.remove(id);
        self.connections
            .retain(|connection| connection.from != id && connection.to != id);

        debug!(item_id = id, "item removed");
        self.mark_dirty();
        true
    }

    /// Re-sync the spatial index after an item moved or resized.
    pub fn update_spatial_index(&mut self, id: u64) {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            let item = &self.items[index];
            self.spatial_index.upsert(item);
        }
    }

    /// Reassign an item's column from its center x. Runs on drag
    /// release, never during free movement.
    pub fn classify_item(&mut self, id: u64) {
        let Some(center_x) = self.get_item(id).map(|item| item.center().0) else {
            return;
        };
        let column = self.columns.classify(center_x).map(str::to_string);
        if let Some(item) = self.get_item_mut(id) {
            item.column = column;
        }
    }

    // ==================== Hit testing & z-order ====================

    /// Topmost item whose bounds contain the given world point.
    pub fn hit_test(&self, world: Point) -> Option<u64> {
        let candidates: HashSet<u64> = self
            .spatial_index
            .query_point(world.x, world.y)
            .into_iter()
            .collect();

        self.items
            .iter()
            .filter(|item| candidates.contains(&item.id))
            .max_by_key(|item| (item.z_index, item.id))
            .map(|item| item.id)
    }

    /// Items in ascending render order: z-index, ties by insertion order.
    pub fn items_by_z(&self) -> Vec<&BoardItem> {
        let mut items: Vec<&BoardItem> = self.items.iter().collect();
        items.sort_by_key(|item| (item.z_index, item.id));
        items
    }

    pub fn max_z_index(&self) -> Option<i32> {
        self.items.iter().map(|item| item.z_index).max()
    }

    pub fn min_z_index(&self) -> Option<i32> {
        self.items.iter().map(|item| item.z_index).min()
    }

    /// Raise the given unlocked items above everything else, preserving
    /// their relative order.
    pub fn bring_to_front(&mut self, ids: &[u64]) {
        let targets = self.reorder_targets(ids);
        if targets.is_empty() {
            return;
        }

        let base = self
            .items
            .iter()
            .filter(|item| !targets.contains(&item.id))
            .map(|item| item.z_index)
            .max()
            .unwrap_or(-1);

        for (offset, id) in self.z_sorted(&targets).into_iter().enumerate() {
            if let Some(item) = self.get_item_mut(id) {
                item.z_index = base + 1 + offset as i32;
            }
        }
        self.mark_dirty();
    }

    /// Push the given unlocked items below everything else, preserving
    /// their relative order.
    pub fn send_to_back(&mut self, ids: &[u64]) {
        let targets = self.reorder_targets(ids);
        if targets.is_empty() {
            return;
        }

        let base = self
            .items
            .iter()
            .filter(|item| !targets.contains(&item.id))
            .map(|item| item.z_index)
            .min()
            .unwrap_or(1);

        let ordered = self.z_sorted(&targets);
        let count = ordered.len() as i32;
        for (offset, id) in ordered.into_iter().enumerate() {
            if let Some(item) = self.get_item_mut(id) {
                item.z_index = base - count + offset as i32;
            }
        }
        self.mark_dirty();
    }

    fn reorder_targets(&self, ids: &[u64]) -> HashSet<u64> {
        self.items
            .iter()
            .filter(|item| ids.contains(&item.id) && !item.locked)
            .map(|item| item.id)
            .collect()
    }

    fn z_sorted(&self, targets: &HashSet<u64>) -> Vec<u64> {
        let mut ordered: Vec<(i32, u64)> = self
            .items
            .iter()
            .filter(|item| targets.contains(&item.id))
            .map(|item| (item.z_index, item.id))
            .collect();
        ordered.sort_unstable();
        ordered.into_iter().map(|(_, id)| id).collect()
    }

    // ==================== Connections ====================

    /// Create a connection between two items. Both endpoints must
    /// resolve at commit time; otherwise nothing is created. Self-loops
    /// and duplicate edges are allowed.
    pub fn add_connection(&mut self, from: u64, to: u64) -> Option<u64> {
        if self.get_item(from).is_none() || self.get_item(to).is_none() {
            return None;
        }

        let id = self.next_connection_id;
        self.next_connection_id += 1;
        self.connections.push(Connection {
            id,
            from,
            to,
            color: DEFAULT_CONNECTION_COLOR.to_string(),
        });

        debug!(connection_id = id, from, to, "connection added");
        self.mark_dirty();
        Some(id)
    }

    pub fn remove_connection(&mut self, id: u64) -> bool {
        let before = self.connections.len();
        self.connections.retain(|connection| connection.id != id);
        let removed = self.connections.len() != before;
        if removed {
            self.mark_dirty();
        }
        removed
    }

    /// Connections that touch the given item as either endpoint.
    pub fn connections_of(&self, item_id: u64) -> impl Iterator<Item = &Connection> {
        self.connections
            .iter()
            .filter(move |connection| connection.from == item_id || connection.to == item_id)
    }

    // ==================== View ====================

    /// Step the zoom in. The view offset never changes with zoom.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
        self.mark_dirty();
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
        self.mark_dirty();
    }

    pub fn zoom_reset(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.mark_dirty();
    }

    // ==================== Persistence ====================

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn to_state(&self) -> BoardState {
        BoardState {
            id: self.id.clone(),
            view_offset: self.view_offset,
            zoom: self.zoom,
            items: self.items.clone(),
            connections: self.connections.clone(),
            columns: self.columns.clone(),
            next_item_id: self.next_item_id,
            next_connection_id: self.next_connection_id,
        }
    }

    pub fn from_state(state: BoardState) -> Self {
        let spatial_index = SpatialIndex::from_items(state.items.iter());
        Self {
            id: state.id,
            items: state.items,
            connections: state.connections,
            columns: state.columns,
            view_offset: state.view_offset,
            zoom: state.zoom,
            next_item_id: state.next_item_id,
            next_connection_id: state.next_connection_id,
            spatial_index,
            dirty: false,
        }
    }

    /// Write the board as JSON. Clears the dirty flag on success.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> BoardResult<()> {
        let json = serde_json::to_string_pretty(&self.to_state())?;
        std::fs::write(path, json)?;
        self.dirty = false;
        Ok(())
    }

    pub fn load_from(path: impl AsRef<Path>) -> BoardResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let state: BoardState = serde_json::from_str(&json)?;
        Ok(Self::from_state(state))
    }
}
