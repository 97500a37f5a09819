use datatable::prelude::*;

fn amount_table(searchable: bool) -> Table {
    let headers = vec![
        Header::new("Customer"),
        Header::new("Amount").sortable().kind(ColumnKind::Number),
    ];
    let rows = vec![
        Row::new("a", vec![Cell::text("ivanov"), Cell::text("9")]),
        Row::new("b", vec![Cell::text("petrov"), Cell::text("100")]),
        Row::new("c", vec![Cell::text("sidorov"), Cell::text("10")]),
    ];
    Table::with_rows(headers, rows, TableOptions { searchable })
}

#[test]
fn test_numeric_sort_is_not_lexicographic() {
    let table = amount_table(false);

    table.toggle_sort(1);
    // 9 < 10 < 100; a string sort would give "10", "100", "9".
    assert_eq!(table.view(), vec![0, 2, 1]);

    table.toggle_sort(1);
    assert_eq!(table.view(), vec![1, 2, 0]);
}

#[test]
fn test_text_sort() {
    let headers = vec![Header::new("Status").sortable()];
    let rows = vec![
        Row::new("a", vec![Cell::text("pending")]),
        Row::new("b", vec![Cell::text("done")]),
        Row::new("c", vec![Cell::text("failed")]),
    ];
    let table = Table::with_rows(headers, rows, TableOptions::default());

    table.toggle_sort(0);
    assert_eq!(table.view(), vec![1, 2, 0]);
}

#[test]
fn test_sort_does_not_disturb_row_identity() {
    let table = amount_table(false);
    table.set_active(Some(0));
    table.toggle_checked("b");

    table.toggle_sort(1);

    // The view is a permutation; model state is untouched.
    assert_eq!(table.active(), Some(0));
    assert_eq!(table.checked_ids(), vec!["b".to_string()]);
    assert_eq!(table.row(0).unwrap().id, "a");

    let tree = table.projection();
    // Display order changed, but each rendered row keeps its model index.
    assert_eq!(tree.rows[2].index, 1);
    assert_eq!(tree.rows[2].row_id, "b");
}

#[test]
fn test_search_narrows_without_reordering() {
    let table = amount_table(true);

    table.set_query("ov");
    // Every customer matches "ov"; order preserved.
    assert_eq!(table.view(), vec![0, 1, 2]);

    table.set_query("petrov");
    assert_eq!(table.view(), vec![1]);
    assert_eq!(table.len(), 3, "the store itself is never filtered");

    table.set_query("");
    assert_eq!(table.view(), vec![0, 1, 2]);
}

#[test]
fn test_search_ignored_when_not_searchable() {
    let table = amount_table(false);

    table.set_query("petrov");
    assert_eq!(table.view(), vec![0, 1, 2]);
}

#[test]
fn test_search_does_not_touch_selection() {
    let table = amount_table(true);
    table.set_active(Some(2));
    table.toggle_checked("a");

    table.set_query("petrov");

    assert_eq!(table.active(), Some(2));
    assert_eq!(table.checked_ids(), vec!["a".to_string()]);
}

#[test]
fn test_check_all_visible_respects_filter() {
    let table = amount_table(true);

    table.set_query("petrov");
    let added = table.check_all_visible();
    assert_eq!(added, vec!["b".to_string()]);
    assert_eq!(table.checked_ids(), vec!["b".to_string()]);
}

#[test]
fn test_sorted_projection_emits_model_indices_in_targets() {
    let table = amount_table(false);
    table.toggle_sort(1);

    let tree = table.projection();
    let first = &tree.rows[0];
    assert_eq!(first.row_id, "a");
    assert_eq!(first.cells[0].target.row, 0);

    // An interaction on the first displayed row targets model row 0.
    let hit = Hit::Cell(first.cells[0].target.clone());
    table.handle_hit(&hit);
    assert_eq!(table.active(), Some(0));
}
