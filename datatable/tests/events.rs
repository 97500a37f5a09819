use datatable::prelude::*;

fn sample_table() -> Table {
    let headers = vec![
        Header::new("Order"),
        Header::new("Amount").sortable().kind(ColumnKind::Number),
        Header::new("Actions"),
    ];
    let rows = vec![
        Row::new(
            "abc",
            vec![
                Cell::text("ord-1"),
                Cell::text("10"),
                Cell::empty()
                    .button(ButtonSpec::new("Edit").id("edit"))
                    .link(LinkSpec::new("/doc/abc.pdf").id("doc")),
            ],
        ),
        Row::new(
            "def",
            vec![
                Cell::text("ord-2"),
                Cell::text("5"),
                Cell::empty().button(ButtonSpec::new("Edit").id("edit")),
            ],
        ),
    ];
    Table::with_rows(headers, rows, TableOptions::default())
}

fn target(kind: TargetKind, id: Option<&str>, row: usize, col: usize, row_id: &str) -> Hit {
    Hit::Cell(Target {
        kind,
        id: id.map(str::to_string),
        row,
        col,
        row_id: row_id.to_string(),
    })
}

#[test]
fn test_button_click_emits_only_click_btn() {
    let table = sample_table();

    let result = table.handle_hit(&target(TargetKind::Button, Some("edit"), 0, 2, "abc"));
    assert_eq!(result, EventResult::Consumed);

    let events = table.take_events();
    assert_eq!(
        events,
        vec![TableEvent::ClickButton {
            id: Some("edit".into()),
            row: 0,
            col: 2,
            row_id: "abc".into(),
        }]
    );
    // No click_cell, and the highlight did not move.
    assert_eq!(table.active(), None);
}

#[test]
fn test_link_click_emits_click_link() {
    let table = sample_table();

    table.handle_hit(&target(TargetKind::Link, Some("doc"), 0, 2, "abc"));

    assert_eq!(
        table.take_events(),
        vec![TableEvent::ClickLink {
            id: Some("doc".into()),
            row: 0,
            col: 2,
            row_id: "abc".into(),
        }]
    );
    assert_eq!(table.active(), None);
}

#[test]
fn test_cell_click_emits_and_activates() {
    let table = sample_table();

    table.handle_hit(&target(TargetKind::Cell, None, 1, 0, "def"));

    assert_eq!(
        table.take_events(),
        vec![TableEvent::ClickCell {
            id: None,
            row: 1,
            col: 0,
            row_id: "def".into(),
        }]
    );
    assert_eq!(table.active(), Some(1));
}

#[test]
fn test_checkbox_click_toggles_silently() {
    let table = sample_table();
    table.set_active(Some(0));

    let result = table.handle_hit(&target(TargetKind::Checkbox, None, 1, 0, "def"));
    assert_eq!(result, EventResult::Consumed);

    assert!(table.is_checked("def"));
    assert_eq!(table.take_events(), Vec::new());
    assert_eq!(table.active(), Some(0), "checkbox must not move the highlight");

    // Toggling back restores prior membership.
    table.handle_hit(&target(TargetKind::Checkbox, None, 1, 0, "def"));
    assert!(!table.is_checked("def"));
}

#[test]
fn test_select_row_emits_dedicated_event() {
    let table = sample_table();

    assert_eq!(table.select_row(1), EventResult::Consumed);
    assert_eq!(
        table.take_events(),
        vec![TableEvent::SelectRow {
            row: 1,
            row_id: "def".into(),
        }]
    );

    assert_eq!(table.select_row(9), EventResult::Ignored);
    assert_eq!(table.take_events(), Vec::new());
}

#[test]
fn test_sortable_header_click_sorts_and_emits() {
    let table = sample_table();

    let result = table.handle_hit(&Hit::Header { col: 1 });
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(
        table.take_events(),
        vec![TableEvent::Sort {
            col: 1,
            ascending: true,
        }]
    );
    // Ascending by amount: 5 before 10.
    assert_eq!(table.view(), vec![1, 0]);

    table.handle_hit(&Hit::Header { col: 1 });
    assert_eq!(
        table.take_events(),
        vec![TableEvent::Sort {
            col: 1,
            ascending: false,
        }]
    );
    assert_eq!(table.view(), vec![0, 1]);
}

#[test]
fn test_unsortable_header_click_is_ignored() {
    let table = sample_table();

    assert_eq!(table.handle_hit(&Hit::Header { col: 0 }), EventResult::Ignored);
    assert_eq!(table.take_events(), Vec::new());
    assert_eq!(table.sort(), None);
}
