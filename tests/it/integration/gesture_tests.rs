//! Pointer gesture tests - creation tools, drag, resize, pan, connect.

use crate::helpers::{assert_item_position, drag, click, TestBoardBuilder};
use sprintboard::geometry::point;
use sprintboard::input::{KeyEvent, MouseDownEvent, MouseMoveEvent, MouseUpEvent};
use sprintboard::types::{ItemKind, ToolType};

#[test]
fn test_note_tool_creates_at_world_position() {
    let mut app = TestBoardBuilder::new().with_zoom(2.0).with_offset(100.0, 0.0).build();
    app.set_tool(ToolType::Note);

    click(&mut app, (300.0, 200.0));

    // world = ((300 - 100) / 2, (200 - 0) / 2)
    let item = &app.board().items[0];
    assert_eq!(item.position, (100.0, 100.0));
    assert_eq!(item.size, (250.0, 200.0));
    assert_eq!(item.kind, ItemKind::Note);
    assert_eq!(item.column.as_deref(), Some("backlog"));

    // The tool hands control back to select and the new item is the
    // whole selection.
    assert_eq!(app.tools.selected, ToolType::Select);
    assert_eq!(app.canvas.selection.ids(), vec![item.id]);
    assert!(app.canvas.input_state.is_idle());
}

#[test]
fn test_each_creation_tool_stacks_on_top() {
    let mut app = TestBoardBuilder::new().build();

    for tool in [
        ToolType::Note,
        ToolType::Text,
        ToolType::Rectangle,
        ToolType::Circle,
    ] {
        app.set_tool(tool);
        click(&mut app, (500.0, 500.0));
    }

    let z_values: Vec<i32> = app
        .board()
        .items_by_z()
        .iter()
        .map(|item| item.z_index)
        .collect();
    assert_eq!(z_values, vec![0, 1, 2, 3]);
}

#[test]
fn test_multi_drag_moves_selection_coherently() {
    let mut app = TestBoardBuilder::new().with_n_notes(3).build();
    app.toggle_lock(1);
    app.canvas.selection.replace([0, 1, 2]);

    drag(&mut app, (10.0, 10.0), (60.0, 35.0));

    assert_item_position(&app, 0, (50.0, 25.0));
    assert_item_position(&app, 2, (850.0, 25.0));
    // Locked items never move, even while selected.
    assert_item_position(&app, 1, (400.0, 0.0));
}

#[test]
fn test_drag_reclassifies_on_release_only() {
    let mut app = TestBoardBuilder::new().with_note((0.0, 0.0)).build();
    app.canvas.selection.select_only(0);

    app.handle_mouse_down(&MouseDownEvent::new(point(10.0, 10.0)));
    app.handle_mouse_move(&MouseMoveEvent {
        position: point(510.0, 10.0),
    });
    // Mid-drag the column still reflects creation time.
    assert_eq!(
        app.board().get_item(0).unwrap().column.as_deref(),
        Some("backlog")
    );

    app.handle_mouse_up(&MouseUpEvent {
        position: point(510.0, 10.0),
    });
    // center x = 500 + 125 = 625 -> third column
    assert_eq!(
        app.board().get_item(0).unwrap().column.as_deref(),
        Some("in_progress")
    );
}

#[test]
fn test_resize_floors_at_minimum() {
    let mut app = TestBoardBuilder::new().with_note((0.0, 0.0)).build();

    app.handle_mouse_down(&MouseDownEvent::new(point(250.0, 200.0)));
    assert!(app.canvas.input_state.is_resizing());

    app.handle_mouse_move(&MouseMoveEvent {
        position: point(500.0, 400.0),
    });
    assert_eq!(app.board().get_item(0).unwrap().size, (500.0, 400.0));

    // Dragging far past the minimum clamps, never inverts.
    app.handle_mouse_move(&MouseMoveEvent {
        position: point(-500.0, -500.0),
    });
    assert_eq!(app.board().get_item(0).unwrap().size, (100.0, 80.0));

    app.handle_mouse_up(&MouseUpEvent {
        position: point(-500.0, -500.0),
    });
    assert!(app.canvas.input_state.is_idle());
}

#[test]
fn test_pan_follows_pointer() {
    let mut app = TestBoardBuilder::new().build();
    app.set_tool(ToolType::Pan);

    app.handle_mouse_down(&MouseDownEvent::new(point(500.0, 500.0)));
    app.handle_mouse_move(&MouseMoveEvent {
        position: point(550.0, 520.0),
    });
    assert_eq!(app.board().view_offset, point(50.0, 20.0));

    app.handle_mouse_move(&MouseMoveEvent {
        position: point(600.0, 600.0),
    });
    assert_eq!(app.board().view_offset, point(100.0, 100.0));

    app.handle_mouse_up(&MouseUpEvent {
        position: point(600.0, 600.0),
    });
    assert!(app.canvas.input_state.is_idle());
}

#[test]
fn test_pan_tool_still_drags_items() {
    let mut app = TestBoardBuilder::new().with_note((0.0, 0.0)).build();
    app.set_tool(ToolType::Pan);

    drag(&mut app, (10.0, 10.0), (110.0, 10.0));

    assert_item_position(&app, 0, (100.0, 0.0));
    assert_eq!(app.board().view_offset, point(0.0, 0.0));
}

#[test]
fn test_connector_two_click_gesture() {
    let mut app = TestBoardBuilder::new().with_n_notes(2).build();
    app.set_tool(ToolType::Connector);

    click(&mut app, (10.0, 10.0));
    // The gesture survives pointer up; it is two clicks, not a drag.
    assert!(app.canvas.input_state.is_connecting());

    click(&mut app, (410.0, 10.0));
    assert!(app.canvas.input_state.is_idle());

    let connections = &app.board().connections;
    assert_eq!(connections.len(), 1);
    assert_eq!((connections[0].from, connections[0].to), (0, 1));
}

#[test]
fn test_connector_permits_self_loops_and_duplicates() {
    let mut app = TestBoardBuilder::new().with_n_notes(2).build();
    app.set_tool(ToolType::Connector);

    click(&mut app, (10.0, 10.0));
    click(&mut app, (10.0, 10.0));

    click(&mut app, (10.0, 10.0));
    click(&mut app, (410.0, 10.0));
    click(&mut app, (10.0, 10.0));
    click(&mut app, (410.0, 10.0));

    let connections = &app.board().connections;
    assert_eq!(connections.len(), 3);
    assert_eq!((connections[0].from, connections[0].to), (0, 0));
    assert_eq!((connections[1].from, connections[1].to), (0, 1));
    assert_eq!((connections[2].from, connections[2].to), (0, 1));
}

#[test]
fn test_connector_drops_vanished_source() {
    let mut app = TestBoardBuilder::new().with_n_notes(2).build();
    app.set_tool(ToolType::Connector);

    click(&mut app, (10.0, 10.0));
    app.delete_item(0);
    click(&mut app, (410.0, 10.0));

    assert!(app.board().connections.is_empty());
    assert!(app.canvas.input_state.is_idle());
}

#[test]
fn test_connector_ignores_locked_source() {
    let mut app = TestBoardBuilder::new().with_note((0.0, 0.0)).build();
    app.toggle_lock(0);
    app.set_tool(ToolType::Connector);

    click(&mut app, (10.0, 10.0));
    assert!(app.canvas.input_state.is_idle());
}

#[test]
fn test_switching_tools_abandons_pending_connection() {
    let mut app = TestBoardBuilder::new().with_note((0.0, 0.0)).build();
    app.set_tool(ToolType::Connector);
    click(&mut app, (10.0, 10.0));

    app.set_tool(ToolType::Select);
    assert!(app.canvas.input_state.is_idle());
}

#[test]
fn test_shift_click_extends_selection() {
    let mut app = TestBoardBuilder::new().with_n_notes(2).build();

    click(&mut app, (10.0, 10.0));
    assert_eq!(app.canvas.selection.ids(), vec![0]);

    app.handle_mouse_down(&MouseDownEvent::with_shift(point(410.0, 10.0)));
    app.handle_mouse_up(&MouseUpEvent {
        position: point(410.0, 10.0),
    });
    assert_eq!(app.canvas.selection.ids(), vec![0, 1]);
}

#[test]
fn test_click_on_empty_canvas_clears_selection() {
    let mut app = TestBoardBuilder::new().with_note((0.0, 0.0)).build();
    click(&mut app, (10.0, 10.0));
    assert!(!app.canvas.selection.is_empty());

    click(&mut app, (2000.0, 2000.0));
    assert!(app.canvas.selection.is_empty());
}

#[test]
fn test_locked_item_selects_but_never_drags() {
    let mut app = TestBoardBuilder::new().with_note((0.0, 0.0)).build();
    app.toggle_lock(0);

    app.handle_mouse_down(&MouseDownEvent::new(point(10.0, 10.0)));
    assert_eq!(app.canvas.selection.ids(), vec![0]);
    assert!(app.canvas.input_state.is_idle());

    drag(&mut app, (10.0, 10.0), (200.0, 200.0));
    assert_item_position(&app, 0, (0.0, 0.0));
}

#[test]
fn test_escape_never_cancels_a_live_gesture() {
    let mut app = TestBoardBuilder::new().with_note((0.0, 0.0)).build();

    app.handle_mouse_down(&MouseDownEvent::new(point(10.0, 10.0)));
    app.handle_mouse_move(&MouseMoveEvent {
        position: point(50.0, 50.0),
    });

    app.handle_key(KeyEvent::Escape);
    assert!(app.canvas.input_state.is_dragging_items());
    assert!(app.canvas.selection.is_empty());

    app.handle_mouse_up(&MouseUpEvent {
        position: point(50.0, 50.0),
    });
    assert!(app.canvas.input_state.is_idle());
}

#[test]
fn test_zoom_commands_clamp() {
    let mut app = TestBoardBuilder::new().build();

    for _ in 0..40 {
        app.zoom_in();
    }
    assert!(app.board().zoom <= 3.0);
    assert!((app.board().zoom - 3.0).abs() < 1e-4);

    for _ in 0..60 {
        app.zoom_out();
    }
    assert!(app.board().zoom >= 0.5);
    assert!((app.board().zoom - 0.5).abs() < 1e-4);

    // Zooming never touches the pan offset.
    assert_eq!(app.board().view_offset, point(0.0, 0.0));

    app.zoom_reset();
    assert_eq!(app.board().zoom, 1.0);
}

#[test]
fn test_editing_item_is_excluded_from_drag() {
    let mut app = TestBoardBuilder::new().with_note((0.0, 0.0)).build();
    app.canvas.selection.select_only(0);
    app.start_editing(0);

    drag(&mut app, (10.0, 10.0), (200.0, 200.0));

    assert_item_position(&app, 0, (0.0, 0.0));
    assert!(app.canvas.input_state.is_idle());
}
