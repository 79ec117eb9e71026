//! Application-wide constants.
//!
//! Centralizes magic numbers and default values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Item Defaults
// ============================================================================

/// Minimum item width enforced during resize
pub const MIN_ITEM_WIDTH: f32 = 100.0;

/// Minimum item height enforced during resize
pub const MIN_ITEM_HEIGHT: f32 = 80.0;

/// Default sticky note size
pub const DEFAULT_NOTE_SIZE: (f32, f32) = (250.0, 200.0);

/// Default text box size
pub const DEFAULT_TEXT_SIZE: (f32, f32) = (220.0, 120.0);

/// Default rectangle size
pub const DEFAULT_RECT_SIZE: (f32, f32) = (200.0, 150.0);

/// Default circle size
pub const DEFAULT_CIRCLE_SIZE: (f32, f32) = (160.0, 160.0);

/// Default font size for item content
pub const DEFAULT_FONT_SIZE: u32 = 14;

/// Extra point size applied to heading lines
pub const HEADING_FONT_DELTA: u32 = 4;

// ============================================================================
// Colors
// ============================================================================

/// Fill palette for notes and text boxes
pub const NOTE_PALETTE: &[&str] = &[
    "#fff59d", "#ffcc80", "#a5d6a7", "#81d4fa", "#f48fb1", "#ce93d8",
];

/// Fill palette for rectangles and circles
pub const SHAPE_PALETTE: &[&str] = &["#90a4ae", "#80cbc4", "#b39ddb", "#ffab91", "#9fa8da"];

/// Default connector line color
pub const DEFAULT_CONNECTION_COLOR: &str = "#78909c";

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.5;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom step for the zoom in/out commands
pub const ZOOM_STEP: f32 = 0.1;

// ============================================================================
// Input Handling
// ============================================================================

/// Size of the resize corner hit area in screen pixels
pub const RESIZE_CORNER_SIZE: f32 = 30.0;

/// Screen-pixel offset applied to pasted and duplicated items
pub const PASTE_OFFSET: f32 = 24.0;

// ============================================================================
// Hover Toolbar
// ============================================================================

/// Delay before the quick-action toolbar hides after the pointer leaves
pub const HOVER_HIDE_DELAY_MS: u64 = 200;

// ============================================================================
// Columns & Rendering
// ============================================================================

/// Default width of a sprint column band
pub const DEFAULT_COLUMN_WIDTH: f32 = 250.0;

/// Background grid spacing in world units at zoom 1.0
pub const GRID_SPACING: f32 = 24.0;
