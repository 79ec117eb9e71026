//! Engine state - the Sprintboard struct definition and sub-structs.

use crate::board::Board;
use crate::columns::ColumnLayout;
use crate::editor::EditSession;
use crate::hover::HoverController;
use crate::input::InputState;
use crate::selection::SelectionManager;
use crate::types::ToolType;

/// Canvas interaction state - the board, selection and active gesture.
pub struct CanvasState {
    /// Board data, the single source of truth
    pub board: Board,
    /// Set of selected item ids
    pub selection: SelectionManager,
    /// Gesture state machine
    pub input_state: InputState,
}

/// Tool state - the currently selected tool.
pub struct ToolState {
    pub selected: ToolType,
}

/// Content editing state.
pub struct EditState {
    /// The open edit session, if any. While present, its item is
    /// excluded from drag/resize dispatch.
    pub session: Option<EditSession>,
}

/// The sprint board engine. Owns all state; every mutation flows
/// through its input handlers and commands.
pub struct Sprintboard {
    /// Canvas interaction state
    pub canvas: CanvasState,
    /// Tool selection
    pub tools: ToolState,
    /// Content editing state
    pub editor: EditState,
    /// Quick-action toolbar hover tracking
    pub hover: HoverController,
}

impl Sprintboard {
    pub fn new(columns: ColumnLayout) -> Self {
        Self::with_board(Board::new(columns))
    }

    /// Wrap an existing board, e.g. one restored from a state snapshot.
    pub fn with_board(board: Board) -> Self {
        Self {
            canvas: CanvasState {
                board,
                selection: SelectionManager::new(),
                input_state: InputState::Idle,
            },
            tools: ToolState {
                selected: ToolType::Select,
            },
            editor: EditState { session: None },
            hover: HoverController::new(),
        }
    }

    pub fn new_for_test() -> Self {
        Self::new(ColumnLayout::sprint_default())
    }

    pub fn board(&self) -> &Board {
        &self.canvas.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.canvas.board
    }

    /// The item with an open edit session, if any.
    pub fn editing_item(&self) -> Option<u64> {
        self.editor.session.as_ref().map(|session| session.item_id())
    }
}
