//! Snapshot tests using the insta crate.
//!
//! Inline JSON snapshots pin the serialized shape of the data model,
//! which is the contract the persistence boundary consumes. To update
//! after intentional changes:
//!
//! ```sh
//! cargo insta test --accept
//! ```

use sprintboard::board::Board;
use sprintboard::columns::{Column, ColumnLayout};
use sprintboard::types::{BoardItem, Connection, ContentLine, ItemKind};

#[test]
fn snapshot_note_item() {
    let item = BoardItem {
        id: 1,
        kind: ItemKind::Note,
        position: (100.0, 100.0),
        size: (250.0, 200.0),
        content: vec![
            ContentLine::heading("Login flow"),
            ContentLine::new("Retry on timeout"),
        ],
        color: "#fff59d".to_string(),
        font_size: 14,
        locked: false,
        rotation: 0.0,
        z_index: 3,
        column: Some("todo".to_string()),
        story_points: Some(5),
    };

    insta::assert_json_snapshot!(item, @r###"
    {
      "id": 1,
      "kind": "note",
      "position": [
        100.0,
        100.0
      ],
      "size": [
        250.0,
        200.0
      ],
      "content": [
        {
          "line_type": "heading",
          "text": "Login flow",
          "style": {
            "bold": false,
            "italic": false,
            "underline": false
          }
        },
        {
          "line_type": "paragraph",
          "text": "Retry on timeout",
          "style": {
            "bold": false,
            "italic": false,
            "underline": false
          }
        }
      ],
      "color": "#fff59d",
      "font_size": 14,
      "locked": false,
      "rotation": 0.0,
      "z_index": 3,
      "column": "todo",
      "story_points": 5
    }
    "###);
}

#[test]
fn snapshot_connection() {
    let connection = Connection {
        id: 0,
        from: 1,
        to: 2,
        color: "#78909c".to_string(),
    };

    insta::assert_json_snapshot!(connection, @r###"
    {
      "id": 0,
      "from": 1,
      "to": 2,
      "color": "#78909c"
    }
    "###);
}

#[test]
fn snapshot_empty_board_state() {
    let board = Board::new(ColumnLayout::new(vec![Column::new("todo", "To Do", 250.0)]));
    let state = board.to_state();

    insta::assert_json_snapshot!(state, {
        ".id" => "[board-id]"
    }, @r###"
    {
      "id": "[board-id]",
      "view_offset": {
        "x": 0.0,
        "y": 0.0
      },
      "zoom": 1.0,
      "items": [],
      "connections": [],
      "columns": {
        "columns": [
          {
            "id": "todo",
            "title": "To Do",
            "width": 250.0
          }
        ]
      },
      "next_item_id": 0,
      "next_connection_id": 0
    }
    "###);
}
