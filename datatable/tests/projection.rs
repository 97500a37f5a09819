use datatable::prelude::*;
use tabledom::Node;

fn headers() -> Vec<Header> {
    vec![Header::new("UID"), Header::new("Amount")]
}

fn cell_text(tree: &Tree, row: usize, col: usize) -> String {
    match &tree.rows[row].cells[col].children[0] {
        Node::Text { content } => content.clone(),
        other => panic!("expected text node, got {other:?}"),
    }
}

#[test]
fn test_matching_rows_and_columns() {
    let rows = vec![
        Row::new("r1", vec![Cell::text("r1"), Cell::text("10")]),
        Row::new("r2", vec![Cell::text("r2"), Cell::text("25")]),
    ];
    let table = Table::with_rows(headers(), rows, TableOptions::default());
    let tree = table.projection();

    assert_eq!(tree.row_count(), 2);
    assert_eq!(tree.column_count(), 2);
    for row in &tree.rows {
        assert_eq!(row.cells.len(), 2);
    }
    assert_eq!(cell_text(&tree, 0, 0), "r1");
    assert_eq!(cell_text(&tree, 0, 1), "10");
}

#[test]
fn test_null_text_renders_empty() {
    let rows = vec![Row::new("r1", vec![Cell::empty(), Cell::text("x")])];
    let table = Table::with_rows(headers(), rows, TableOptions::default());
    let tree = table.projection();

    assert_eq!(cell_text(&tree, 0, 0), "");
    assert_eq!(cell_text(&tree, 0, 1), "x");
}

#[test]
fn test_extra_cells_are_dropped() {
    let rows = vec![Row::new(
        "r1",
        vec![Cell::text("a"), Cell::text("b"), Cell::text("surplus")],
    )];
    let table = Table::with_rows(headers(), rows, TableOptions::default());
    let tree = table.projection();

    assert_eq!(tree.rows[0].cells.len(), 2);
}

#[test]
fn test_missing_cells_render_empty() {
    let rows = vec![Row::new("r1", vec![Cell::text("only")])];
    let table = Table::with_rows(headers(), rows, TableOptions::default());
    let tree = table.projection();

    assert_eq!(tree.rows[0].cells.len(), 2);
    assert_eq!(cell_text(&tree, 0, 1), "");
}

#[test]
fn test_hidden_column_is_skipped_but_keeps_model_index() {
    let headers = vec![
        Header::new("uid").hidden(),
        Header::new("Order"),
        Header::new("Amount"),
    ];
    let rows = vec![Row::new(
        "r1",
        vec![Cell::text("r1"), Cell::text("ord-1"), Cell::text("10")],
    )];
    let table = Table::with_rows(headers, rows, TableOptions::default());
    let tree = table.projection();

    assert_eq!(tree.column_count(), 2);
    assert_eq!(tree.head[0].label, "Order");
    // Model column indices survive hiding.
    assert_eq!(tree.head[0].col, 1);
    assert_eq!(tree.rows[0].cells[0].target.col, 1);
    assert_eq!(cell_text(&tree, 0, 0), "ord-1");
}

#[test]
fn test_checkbox_cell_reflects_checked_set() {
    let headers = vec![Header::new(""), Header::new("Order")];
    let rows = vec![
        Row::new("a", vec![Cell::checkbox(), Cell::text("one")]),
        Row::new("b", vec![Cell::checkbox(), Cell::text("two")]),
    ];
    let table = Table::with_rows(headers, rows, TableOptions::default());
    table.toggle_checked("a");

    let tree = table.projection();
    assert_eq!(
        tree.rows[0].cells[0].children,
        vec![Node::Checkbox { checked: true }]
    );
    assert_eq!(
        tree.rows[1].cells[0].children,
        vec![Node::Checkbox { checked: false }]
    );
}

#[test]
fn test_decorations_in_order() {
    let headers = vec![Header::new("Docs")];
    let rows = vec![Row::new(
        "r1",
        vec![Cell::text("v")
            .icon("/static/pending.gif")
            .button(ButtonSpec::new("Edit").id("edit"))
            .badge(BadgeSpec::new("new").class("badge bg-primary"))
            .link(LinkSpec::new("/doc.pdf"))],
    )];
    let table = Table::with_rows(headers, rows, TableOptions::default());
    let tree = table.projection();

    let kinds: Vec<&str> = tree.rows[0].cells[0]
        .children
        .iter()
        .map(|n| match n {
            Node::Text { .. } => "text",
            Node::Icon { .. } => "icon",
            Node::Button { .. } => "button",
            Node::Badge { .. } => "badge",
            Node::Link { .. } => "link",
            Node::Checkbox { .. } => "checkbox",
        })
        .collect();
    assert_eq!(kinds, vec!["text", "icon", "button", "badge", "link"]);

    // Link label defaults to the href.
    match &tree.rows[0].cells[0].children[4] {
        Node::Link { label, href, .. } => {
            assert_eq!(label, "/doc.pdf");
            assert_eq!(href, "/doc.pdf");
        }
        other => panic!("expected link, got {other:?}"),
    }
}

#[test]
fn test_refresh_is_idempotent() {
    let rows = vec![Row::new("r1", vec![Cell::text("r1"), Cell::text("10")])];
    let table = Table::with_rows(headers(), rows.clone(), TableOptions::default());
    table.toggle_checked("r1");

    table.refresh(Some(rows.clone()), false);
    let first = table.projection();
    let checked_before = table.checked_ids();

    table.refresh(Some(rows), false);
    let second = table.projection();

    assert_eq!(first, second);
    assert_eq!(table.checked_ids(), checked_before);
}

#[test]
fn test_active_row_is_marked() {
    let rows = vec![
        Row::new("r1", vec![Cell::text("r1"), Cell::text("10")]),
        Row::new("r2", vec![Cell::text("r2"), Cell::text("20")]),
    ];
    let table = Table::with_rows(headers(), rows, TableOptions::default());
    table.set_active(Some(1));

    let tree = table.projection();
    assert!(!tree.rows[0].active);
    assert!(tree.rows[1].active);
}

#[test]
fn test_row_deserializes_from_wire_shape() {
    // The JSON shape the dashboard backend produces.
    let json = r#"{
        "id": "row-1",
        "cells": [
            {
                "id": "cell[1,1]",
                "text": "Value[1,1]",
                "class": "bg bg-warning",
                "buttons": [
                    {"id": "btn1", "label": "Button1", "class": "m-1"},
                    {"id": "btn2", "label": "Button2", "class": "m-1 btn btn-danger"}
                ]
            },
            {
                "text": null,
                "icon": {"src": "/static/assets/img/pending-green2.gif", "style": "max-height: 15px;"},
                "badges": [{"label": "test-1", "class": "badge bg-primary"}]
            }
        ]
    }"#;
    let row: Row = serde_json::from_str(json).expect("row should deserialize");

    assert_eq!(row.id, "row-1");
    assert_eq!(row.cells.len(), 2);
    assert_eq!(row.cells[0].buttons.len(), 2);
    assert_eq!(row.cells[0].buttons[1].id.as_deref(), Some("btn2"));
    assert_eq!(row.cells[1].text, None);
    assert_eq!(row.cells[1].display_text(), "");
    assert_eq!(row.cells[1].badges[0].label, "test-1");
    assert!(row.cells[1].links.is_empty());
}

#[test]
fn test_header_deserializes_with_defaults() {
    let json = r#"[{"label": "Column-1", "sortable": true, "type": "number"}, {"label": "Column-2"}]"#;
    let headers: Vec<Header> = serde_json::from_str(json).expect("headers should deserialize");

    assert!(headers[0].sortable);
    assert_eq!(headers[0].kind, ColumnKind::Number);
    assert!(!headers[1].sortable);
    assert!(!headers[1].hidden);
    assert_eq!(headers[1].kind, ColumnKind::Text);
}
