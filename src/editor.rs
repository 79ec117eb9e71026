//! Line-based rich content editing for notes and text boxes.
//!
//! An [`EditSession`] is a session-scoped buffer: opening one snapshots
//! the item's content, edits apply to the buffer only, and `commit`
//! writes the cleaned result back to the board. While a session is open
//! its item is excluded from drag/resize dispatch.

use crate::board::Board;
use crate::types::{BoardItem, ContentLine, ItemKind, LineType};
use tracing::debug;

/// Which inline style flag to flip on the focused line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleFlag {
    Bold,
    Italic,
    Underline,
}

/// An open editing session over one item's content.
///
/// The buffer always holds at least one line while the session is open;
/// empty lines are stripped at commit time, so the committed content may
/// end up empty.
#[derive(Clone, Debug)]
pub struct EditSession {
    item_id: u64,
    lines: Vec<ContentLine>,
    focused: usize,
    story_points: Option<u32>,
}

impl EditSession {
    /// Open a session for an item. Refuses locked items and shape kinds.
    pub fn open(item: &BoardItem) -> Option<Self> {
        if item.locked || !item.kind.has_content() {
            return None;
        }

        let mut lines = item.content.clone();
        if lines.is_empty() {
            lines.push(ContentLine::default());
        }

        Some(Self {
            item_id: item.id,
            lines,
            focused: 0,
            story_points: item.story_points,
        })
    }

    pub fn item_id(&self) -> u64 {
        self.item_id
    }

    pub fn lines(&self) -> &[ContentLine] {
        &self.lines
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn story_points(&self) -> Option<u32> {
        self.story_points
    }

    /// Move focus to a line, clamped to the buffer.
    pub fn focus(&mut self, index: usize) {
        self.focused = index.min(self.lines.len() - 1);
    }

    /// Replace the text of the focused line.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.lines[self.focused].text = text.into();
    }

    /// Split point: insert a new empty line after `index` and focus it.
    /// The new line takes `inherited_type`, defaulting to the split
    /// line's own type.
    pub fn insert_line_after(&mut self, index: usize, inherited_type: Option<LineType>) {
        let index = index.min(self.lines.len() - 1);
        let line_type = inherited_type.unwrap_or(self.lines[index].line_type);

        self.lines.insert(
            index + 1,
            ContentLine {
                line_type,
                ..ContentLine::default()
            },
        );
        self.focused = index + 1;
    }

    /// Remove a line and move focus to the previous one. The last
    /// remaining line cannot be deleted.
    pub fn delete_line(&mut self, index: usize) {
        if self.lines.len() <= 1 || index >= self.lines.len() {
            return;
        }
        self.lines.remove(index);
        self.focused = index.saturating_sub(1);
    }

    /// Flip one style flag on the focused line.
    pub fn toggle_style(&mut self, flag: StyleFlag) {
        let style = &mut self.lines[self.focused].style;
        match flag {
            StyleFlag::Bold => style.bold = !style.bold,
            StyleFlag::Italic => style.italic = !style.italic,
            StyleFlag::Underline => style.underline = !style.underline,
        }
    }

    /// Overwrite the block type of the focused line.
    pub fn set_line_type(&mut self, line_type: LineType) {
        self.lines[self.focused].line_type = line_type;
    }

    pub fn set_story_points(&mut self, points: Option<u32>) {
        self.story_points = points;
    }

    /// Write the buffer back to the item and end the session.
    ///
    /// Lines whose trimmed text is empty are stripped; the committed
    /// content may therefore be empty. Story points only land on notes.
    pub fn commit(self, board: &mut Board) {
        let content: Vec<ContentLine> = self
            .lines
            .into_iter()
            .filter(|line| !line.text.trim().is_empty())
            .collect();

        if let Some(item) = board.get_item_mut(self.item_id) {
            debug!(item_id = self.item_id, lines = content.len(), "content committed");
            item.content = content;
            if item.kind == ItemKind::Note {
                item.story_points = self.story_points;
            }
            board.mark_dirty();
        }
    }
}
