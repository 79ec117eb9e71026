//! R-tree spatial index over board items.
//!
//! Pointer hit testing runs on every mouse down; the index keeps point
//! queries at O(log n) instead of scanning the whole item list. Callers
//! resolve the returned candidate set against z-order.

use crate::types::BoardItem;
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// Bounding box of one item, keyed by item id.
#[derive(Debug, Clone, Copy)]
struct ItemEnvelope {
    item_id: u64,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl ItemEnvelope {
    fn of(item: &BoardItem) -> Self {
        Self {
            item_id: item.id,
            min_x: item.position.0,
            min_y: item.position.1,
            max_x: item.position.0 + item.size.0,
            max_y: item.position.1 + item.size.1,
        }
    }

    #[inline]
    fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for ItemEnvelope {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for ItemEnvelope {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index for board items.
///
/// The side map of envelopes lets `upsert` locate and evict the stale
/// entry for a moved or resized item before inserting the fresh one.
pub struct SpatialIndex {
    tree: RTree<ItemEnvelope>,
    envelopes: HashMap<u64, ItemEnvelope>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            envelopes: HashMap::new(),
        }
    }

    /// Bulk-build an index from existing items (board load path).
    pub fn from_items<'a>(items: impl Iterator<Item = &'a BoardItem>) -> Self {
        let envelopes: Vec<ItemEnvelope> = items.map(ItemEnvelope::of).collect();
        let by_id = envelopes.iter().map(|e| (e.item_id, *e)).collect();

        Self {
            tree: RTree::bulk_load(envelopes),
            envelopes: by_id,
        }
    }

    /// Insert an item, replacing any stale envelope it already has.
    pub fn upsert(&mut self, item: &BoardItem) {
        if let Some(stale) = self.envelopes.remove(&item.id) {
            self.tree.remove(&stale);
        }

        let envelope = ItemEnvelope::of(item);
        self.tree.insert(envelope);
        self.envelopes.insert(item.id, envelope);
    }

    pub fn remove(&mut self, item_id: u64) -> bool {
        match self.envelopes.remove(&item_id) {
            Some(envelope) => {
                self.tree.remove(&envelope);
                true
            }
            None => false,
        }
    }

    /// Ids of all items whose bounds contain the given world point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<u64> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .filter(|envelope| envelope.contains(x, y))
            .map(|envelope| envelope.item_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.envelopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.envelopes.is_empty()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
