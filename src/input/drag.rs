//! Pointer move handling - drag, resize, and pan updates.
//!
//! Pointer moves arrive at display frequency during a gesture, so each
//! arm does the minimum: convert the position, apply the delta, mark the
//! board dirty. Spatial index maintenance waits for pointer up.

use crate::app::Sprintboard;
use crate::constants::{MIN_ITEM_HEIGHT, MIN_ITEM_WIDTH};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::{InputState, MouseMoveEvent};

impl Sprintboard {
    pub fn handle_mouse_move(&mut self, event: &MouseMoveEvent) {
        let view_offset = self.canvas.board.view_offset;
        let zoom = self.canvas.board.zoom;

        match self.canvas.input_state {
            InputState::ResizingItem { item_id, .. } => {
                let ctx = CoordinateContext::new(&view_offset, zoom);
                let world = CoordinateConverter::screen_to_world(event.position, &ctx);

                if let Some(item) = self.canvas.board.get_item_mut(item_id) {
                    item.size = (
                        (world.x - item.position.0).max(MIN_ITEM_WIDTH),
                        (world.y - item.position.1).max(MIN_ITEM_HEIGHT),
                    );
                    self.canvas.board.mark_dirty();
                }
            }

            InputState::DraggingItems {
                primary_item,
                grab_offset,
            } => {
                let ctx = CoordinateContext::new(&view_offset, zoom);
                let world = CoordinateConverter::screen_to_world(event.position, &ctx);

                let Some(primary_pos) = self
                    .canvas
                    .board
                    .get_item(primary_item)
                    .map(|item| item.position)
                else {
                    return;
                };

                let target = world - grab_offset;
                let delta = (target.x - primary_pos.0, target.y - primary_pos.1);

                // The whole selection moves by the same world delta,
                // preserving relative offsets. Locked items stay put, as
                // does an item with an open edit session.
                let editing = self.editing_item();
                for id in self.canvas.selection.ids() {
                    if editing == Some(id) {
                        continue;
                    }
                    if let Some(item) = self.canvas.board.get_item_mut(id) {
                        if item.locked {
                            continue;
                        }
                        item.position.0 += delta.0;
                        item.position.1 += delta.1;
                    }
                }
                self.canvas.board.mark_dirty();
            }

            InputState::Panning { grab_offset } => {
                self.canvas.board.view_offset = event.position - grab_offset;
                self.canvas.board.mark_dirty();
            }

            InputState::ConnectingFrom { .. } | InputState::Idle => {}
        }
    }
}
