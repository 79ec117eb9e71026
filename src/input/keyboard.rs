//! Keyboard command handling.

use crate::app::Sprintboard;
use crate::clipboard;

/// The keyboard commands the engine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    Escape,
    Delete,
    Copy,
    Paste,
}

impl Sprintboard {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key {
            // Escape drops the selection and any open edit session, but
            // never an in-flight drag/resize/pan gesture.
            KeyEvent::Escape => {
                self.cancel_editing();
                self.canvas.selection.clear();
            }

            // Delete is reserved for text while an edit session is open.
            KeyEvent::Delete => {
                if self.editor.session.is_some() {
                    return;
                }
                self.delete_selection();
            }

            KeyEvent::Copy => {
                if !self.canvas.selection.is_empty() {
                    self.copy_selection();
                }
            }

            KeyEvent::Paste => {
                if !clipboard::is_empty() {
                    self.paste();
                }
            }
        }
    }
}
