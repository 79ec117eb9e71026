//! Read-only projection of engine state for an external renderer.
//!
//! The engine never draws; it hands the renderer one ordered snapshot
//! per frame. Items arrive in ascending z-order (bottom first),
//! connections as center-to-center segments, columns with their
//! cumulative offsets.

use crate::app::Sprintboard;
use crate::constants::GRID_SPACING;
use crate::geometry::Point;
use crate::types::{ContentLine, ItemKind};

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct RenderSnapshot {
    pub view_offset: Point,
    pub zoom: f32,
    /// Background grid spacing in screen pixels at the current zoom
    pub grid_spacing: f32,
    pub columns: Vec<ColumnBand>,
    /// Ascending z-order: drawing in iteration order paints back to front
    pub items: Vec<ItemVisual>,
    pub connections: Vec<ConnectionVisual>,
}

/// A column band overlay, positioned by cumulative offset.
#[derive(Clone, Debug)]
pub struct ColumnBand {
    pub id: String,
    pub title: String,
    pub x: f32,
    pub width: f32,
}

/// One item with its resolved decorations.
#[derive(Clone, Debug)]
pub struct ItemVisual {
    pub id: u64,
    pub kind: ItemKind,
    pub position: (f32, f32),
    pub size: (f32, f32),
    pub color: String,
    pub font_size: u32,
    pub rotation: f32,
    pub z_index: i32,
    /// Live editor buffer while a session is open, committed content
    /// otherwise
    pub lines: Vec<ContentLine>,
    pub story_points: Option<u32>,
    pub locked: bool,
    pub selected: bool,
    pub editing: bool,
    pub hovered: bool,
    /// Resize handle decoration: selected, unlocked, not under edit
    pub show_resize_handle: bool,
}

/// A connector segment between two item centers.
#[derive(Clone, Debug)]
pub struct ConnectionVisual {
    pub id: u64,
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub color: String,
}

impl Sprintboard {
    pub fn render_snapshot(&self) -> RenderSnapshot {
        let board = &self.canvas.board;
        let editing = self.editing_item();
        let hovered = self.hover.hovered();

        let mut x = 0.0;
        let columns = board
            .columns
            .columns
            .iter()
            .map(|column| {
                let band = ColumnBand {
                    id: column.id.clone(),
                    title: column.title.clone(),
                    x,
                    width: column.width,
                };
                x += column.width;
                band
            })
            .collect();

        let items = board
            .items_by_z()
            .into_iter()
            .map(|item| {
                let selected = self.canvas.selection.contains(item.id);
                let is_editing = editing == Some(item.id);
                let lines = if is_editing {
                    self.editor
                        .session
                        .as_ref()
                        .map(|session| session.lines().to_vec())
                        .unwrap_or_default()
                } else {
                    item.content.clone()
                };

                ItemVisual {
                    id: item.id,
                    kind: item.kind,
                    position: item.position,
                    size: item.size,
                    color: item.color.clone(),
                    font_size: item.font_size,
                    rotation: item.rotation,
                    z_index: item.z_index,
                    lines,
                    story_points: item.story_points,
                    locked: item.locked,
                    selected,
                    editing: is_editing,
                    hovered: hovered == Some(item.id),
                    show_resize_handle: selected && !item.locked && !is_editing,
                }
            })
            .collect();

        let connections = board
            .connections
            .iter()
            .filter_map(|connection| {
                let from = board.get_item(connection.from)?.center();
                let to = board.get_item(connection.to)?.center();
                Some(ConnectionVisual {
                    id: connection.id,
                    from,
                    to,
                    color: connection.color.clone(),
                })
            })
            .collect();

        RenderSnapshot {
            view_offset: board.view_offset,
            zoom: board.zoom,
            grid_spacing: GRID_SPACING * board.zoom,
            columns,
            items,
            connections,
        }
    }
}
