//! Pointer up handling - gesture finalization and drop classification.

use crate::app::Sprintboard;
use crate::input::{InputState, MouseUpEvent};
use tracing::debug;

impl Sprintboard {
    pub fn handle_mouse_up(&mut self, _event: &MouseUpEvent) {
        match self.canvas.input_state {
            InputState::DraggingItems { .. } => {
                // Every item that moved gets its spatial bounds re-synced
                // and its column recomputed from the final position.
                let editing = self.editing_item();
                let mut moved = 0usize;
                for id in self.canvas.selection.ids() {
                    if editing == Some(id) {
                        continue;
                    }
                    let locked = self
                        .canvas
                        .board
                        .get_item(id)
                        .is_none_or(|item| item.locked);
                    if locked {
                        continue;
                    }
                    self.canvas.board.update_spatial_index(id);
                    self.canvas.board.classify_item(id);
                    moved += 1;
                }
                debug!(moved, "drag finished");
            }

            InputState::ResizingItem {
                item_id,
                start_size,
            } => {
                let resized = self
                    .canvas
                    .board
                    .get_item(item_id)
                    .is_some_and(|item| item.size != start_size);
                if resized {
                    self.canvas.board.update_spatial_index(item_id);
                }
            }

            // Connecting is a two-click gesture: it survives pointer up
            // and ends on the second click.
            InputState::ConnectingFrom { .. } => return,

            InputState::Panning { .. } | InputState::Idle => {}
        }

        self.canvas.input_state.reset();
    }
}
