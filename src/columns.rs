//! Sprint columns - vertical classification bands laid out left to right.
//!
//! Columns never constrain placement; they only tag items by horizontal
//! drop position. The set of columns is fixed when the board is created.

use crate::constants::DEFAULT_COLUMN_WIDTH;
use serde::{Deserialize, Serialize};

/// A named vertical band used for drop classification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub width: f32,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>, width: f32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            width,
        }
    }
}

/// The fixed, ordered set of columns for a board, starting at world x = 0.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub columns: Vec<Column>,
}

impl ColumnLayout {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// The standard five-stage sprint layout.
    pub fn sprint_default() -> Self {
        Self::new(vec![
            Column::new("backlog", "Backlog", DEFAULT_COLUMN_WIDTH),
            Column::new("todo", "To Do", DEFAULT_COLUMN_WIDTH),
            Column::new("in_progress", "In Progress", DEFAULT_COLUMN_WIDTH),
            Column::new("review", "Review", DEFAULT_COLUMN_WIDTH),
            Column::new("done", "Done", DEFAULT_COLUMN_WIDTH),
        ])
    }

    /// Id of the leftmost column. Newly created items default here, and
    /// out-of-range classification falls back here.
    pub fn first_id(&self) -> Option<&str> {
        self.columns.first().map(|c| c.id.as_str())
    }

    /// Classify a world x coordinate into a column id.
    ///
    /// Walks the columns in order accumulating widths and returns the
    /// first whose `[start, start + width)` interval contains `world_x`.
    /// Positions left or right of every column fall back to the first
    /// column. Returns `None` only when the layout has no columns.
    pub fn classify(&self, world_x: f32) -> Option<&str> {
        let mut start = 0.0;
        for column in &self.columns {
            if world_x >= start && world_x < start + column.width {
                return Some(column.id.as_str());
            }
            start += column.width;
        }
        self.first_id()
    }

    /// Cumulative x offset of a column's left edge.
    pub fn offset_of(&self, id: &str) -> Option<f32> {
        let mut start = 0.0;
        for column in &self.columns {
            if column.id == id {
                return Some(start);
            }
            start += column.width;
        }
        None
    }

    pub fn total_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }
}
