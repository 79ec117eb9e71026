//! Core types for the sprint board canvas.
//!
//! This module defines the fundamental data structures used throughout the
//! engine: placed items, their rich-text content, and connector edges.

use crate::constants::{
    DEFAULT_CIRCLE_SIZE, DEFAULT_NOTE_SIZE, DEFAULT_RECT_SIZE, DEFAULT_TEXT_SIZE,
    HEADING_FONT_DELTA, NOTE_PALETTE, SHAPE_PALETTE,
};
use serde::{Deserialize, Serialize};

/// Tool types for the board tool dock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolType {
    #[default]
    Select,
    Pan,
    Note,
    Text,
    Rectangle,
    Circle,
    Connector,
}

/// The kind of a placed item. Fixed for the item's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Note,
    Text,
    Rectangle,
    Circle,
}

impl ItemKind {
    /// Default world-space size for a freshly created item of this kind.
    pub fn default_size(&self) -> (f32, f32) {
        match self {
            ItemKind::Note => DEFAULT_NOTE_SIZE,
            ItemKind::Text => DEFAULT_TEXT_SIZE,
            ItemKind::Rectangle => DEFAULT_RECT_SIZE,
            ItemKind::Circle => DEFAULT_CIRCLE_SIZE,
        }
    }

    /// Notes and text boxes carry editable line content; shapes do not.
    pub fn has_content(&self) -> bool {
        matches!(self, ItemKind::Note | ItemKind::Text)
    }

    /// The fill palette this kind draws its colors from.
    pub fn palette(&self) -> &'static [&'static str] {
        if self.has_content() {
            NOTE_PALETTE
        } else {
            SHAPE_PALETTE
        }
    }

    /// First palette entry, used for freshly created items.
    pub fn default_color(&self) -> &'static str {
        self.palette()[0]
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            ItemKind::Note => "NOTE",
            ItemKind::Text => "TEXT",
            ItemKind::Rectangle => "RECT",
            ItemKind::Circle => "CIRCLE",
        }
    }
}

/// Block type of a single content line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    #[default]
    Paragraph,
    Heading,
    Bullet,
    Numbered,
}

/// Inline style flags, independent booleans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// One line of rich text inside a note or text box.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentLine {
    pub line_type: LineType,
    pub text: String,
    pub style: TextStyle,
}

impl ContentLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            line_type: LineType::Paragraph,
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            line_type: LineType::Heading,
            text: text.into(),
            style: TextStyle::default(),
        }
    }
}

/// An item placed on the board.
///
/// Positions and sizes are world-space with a top-left origin. The
/// `z_index` gives a strict render/hit order; ties are broken by
/// ascending id, which matches insertion order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardItem {
    /// Unique identifier for this item
    pub id: u64,
    /// What kind of item this is
    pub kind: ItemKind,
    /// Position on the board in world coordinates (x, y)
    pub position: (f32, f32),
    /// Size in world units (width, height)
    pub size: (f32, f32),
    /// Rich text lines; always empty for shape kinds
    pub content: Vec<ContentLine>,
    /// Fill color, a hex value from the kind's palette
    pub color: String,
    /// Base font size shared by the item's lines
    pub font_size: u32,
    /// Locked items refuse every mutation except unlock
    pub locked: bool,
    /// Rotation in degrees, informational only
    pub rotation: f32,
    /// Render/hit-test order; higher values draw on top
    pub z_index: i32,
    /// Column id assigned on creation and recomputed on drag release
    pub column: Option<String>,
    /// Estimation value, meaningful only for notes
    pub story_points: Option<u32>,
}

impl BoardItem {
    /// Center of the item in world coordinates.
    pub fn center(&self) -> (f32, f32) {
        (
            self.position.0 + self.size.0 / 2.0,
            self.position.1 + self.size.1 / 2.0,
        )
    }

    /// Whether a world-space point falls inside the item's bounds.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.position.0
            && x <= self.position.0 + self.size.0
            && y >= self.position.1
            && y <= self.position.1 + self.size.1
    }

    /// Effective font size for one of this item's lines. Headings render
    /// larger than the item's base size.
    pub fn line_font_size(&self, line: &ContentLine) -> u32 {
        match line.line_type {
            LineType::Heading => self.font_size + HEADING_FONT_DELTA,
            _ => self.font_size,
        }
    }
}

/// A connector edge between two items, drawn center to center.
///
/// Stored directed (`from` -> `to`) although rendering does not
/// distinguish the endpoints. Self-loops and duplicate edges between the
/// same pair are allowed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Connection {
    pub id: u64,
    pub from: u64,
    pub to: u64,
    pub color: String,
}
