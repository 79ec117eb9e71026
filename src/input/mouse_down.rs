//! Pointer down handling - item creation, selection, gesture initiation.
//!
//! Hit testing goes through the R-tree spatial index; candidates are
//! resolved against z-order so the topmost item wins.

use crate::app::Sprintboard;
use crate::constants::RESIZE_CORNER_SIZE;
use crate::geometry::point;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::MouseDownEvent;
use crate::types::{ItemKind, ToolType};

impl Sprintboard {
    pub fn handle_mouse_down(&mut self, event: &MouseDownEvent) {
        let view_offset = self.canvas.board.view_offset;
        let zoom = self.canvas.board.zoom;
        let ctx = CoordinateContext::new(&view_offset, zoom);
        let world = CoordinateConverter::screen_to_world(event.position, &ctx);

        // Creation tools stamp a new item at the clicked world position
        // and hand control back to the select tool.
        let created_kind = match self.tools.selected {
            ToolType::Note => Some(ItemKind::Note),
            ToolType::Text => Some(ItemKind::Text),
            ToolType::Rectangle => Some(ItemKind::Rectangle),
            ToolType::Circle => Some(ItemKind::Circle),
            _ => None,
        };
        if let Some(kind) = created_kind {
            let id = self.canvas.board.add_item(kind, world);
            self.canvas.selection.select_only(id);
            self.tools.selected = ToolType::Select;
            return;
        }

        let hit = self.canvas.board.hit_test(world);

        if self.tools.selected == ToolType::Connector {
            match (self.canvas.input_state.connecting_from(), hit) {
                // Second click completes the edge; the source must still
                // exist. Self-loops and duplicates are allowed.
                (Some(from), Some(target)) => {
                    self.canvas.board.add_connection(from, target);
                    self.canvas.input_state.reset();
                }
                // Second click on empty canvas abandons the gesture.
                (Some(_), None) => self.canvas.input_state.reset(),
                (None, Some(target)) => {
                    let unlocked = self
                        .canvas
                        .board
                        .get_item(target)
                        .is_some_and(|item| !item.locked);
                    if unlocked {
                        self.canvas.input_state.start_connecting(target);
                    }
                }
                (None, None) => {}
            }
            return;
        }

        // Select and pan tools share item handling: clicking an item
        // selects it and starts a drag.
        let Some(item_id) = hit else {
            match self.tools.selected {
                ToolType::Pan => self
                    .canvas
                    .input_state
                    .start_panning(event.position - view_offset),
                ToolType::Select => self.canvas.selection.clear(),
                _ => {}
            }
            return;
        };

        // An item with an open edit session is excluded from
        // drag/resize dispatch.
        if self.editing_item() == Some(item_id) {
            return;
        }

        if event.modifiers.shift {
            self.canvas.selection.insert(item_id);
        } else if !self.canvas.selection.contains(item_id) {
            self.canvas.selection.select_only(item_id);
        }

        let Some((item_pos, item_size, locked)) = self
            .canvas
            .board
            .get_item(item_id)
            .map(|item| (item.position, item.size, item.locked))
        else {
            return;
        };
        if locked {
            return;
        }

        // Resize takes priority over drag when the press lands in the
        // bottom-right corner region, measured in screen pixels.
        let corner_world = point(item_pos.0 + item_size.0, item_pos.1 + item_size.1);
        let corner_screen = CoordinateConverter::world_to_screen(corner_world, &ctx);
        let near_corner = (event.position.x - corner_screen.x).abs() <= RESIZE_CORNER_SIZE
            && (event.position.y - corner_screen.y).abs() <= RESIZE_CORNER_SIZE;

        if near_corner {
            self.canvas.input_state.start_resizing(item_id, item_size);
        } else {
            let grab_offset = world - point(item_pos.0, item_pos.1);
            self.canvas.input_state.start_dragging(item_id, grab_offset);
        }
    }
}
