use datatable::prelude::*;

fn sample_table() -> Table {
    let headers = vec![Header::new("UID"), Header::new("Amount")];
    let rows = vec![
        Row::new("abc", vec![Cell::text("abc"), Cell::text("10")]),
        Row::new("def", vec![Cell::text("def"), Cell::text("20")]),
        Row::new("ghi", vec![Cell::text("ghi"), Cell::text("30")]),
    ];
    Table::with_rows(headers, rows, TableOptions::default())
}

#[test]
fn test_toggle_twice_restores_membership() {
    let table = sample_table();

    assert!(table.toggle_checked("abc"));
    assert!(table.is_checked("abc"));

    assert!(!table.toggle_checked("abc"));
    assert!(!table.is_checked("abc"));
    assert!(table.checked_ids().is_empty());
}

#[test]
fn test_toggle_never_moves_active_row() {
    let table = sample_table();
    table.set_active(Some(1));

    table.toggle_checked("abc");
    table.toggle_checked("ghi");
    assert_eq!(table.active(), Some(1));

    table.toggle_checked("abc");
    assert_eq!(table.active(), Some(1));
}

#[test]
fn test_check_all_visible() {
    let table = sample_table();
    table.toggle_checked("def");

    let added = table.check_all_visible();
    assert_eq!(added, vec!["abc".to_string(), "ghi".to_string()]);
    assert_eq!(table.checked_ids().len(), 3);

    let removed = table.clear_checked();
    assert_eq!(removed.len(), 3);
    assert!(table.checked_ids().is_empty());
}

#[test]
fn test_refresh_with_reset_clears_active() {
    let table = sample_table();
    table.set_active(Some(2));

    table.refresh(None, true);
    assert_eq!(table.active(), None);

    // Holds regardless of prior state.
    table.refresh(Some(Vec::new()), true);
    assert_eq!(table.active(), None);
}

#[test]
fn test_refresh_without_reset_keeps_valid_active() {
    let table = sample_table();
    table.set_active(Some(1));

    table.refresh(None, false);
    assert_eq!(table.active(), Some(1));
}

#[test]
fn test_refresh_without_reset_drops_out_of_range_active() {
    let table = sample_table();
    table.set_active(Some(2));

    let shorter = vec![Row::new("abc", vec![Cell::text("abc"), Cell::text("10")])];
    table.refresh(Some(shorter), false);
    assert_eq!(table.active(), None);
}

#[test]
fn test_checked_survives_refresh_that_removes_the_row() {
    let table = sample_table();
    table.toggle_checked("abc");

    table.refresh(Some(Vec::new()), true);

    // Not auto-reconciled: bulk actions may still target the id.
    assert_eq!(table.checked_ids(), vec!["abc".to_string()]);

    let removed = table.retain_checked(&table.visible_ids());
    assert_eq!(removed, vec!["abc".to_string()]);
    assert!(table.checked_ids().is_empty());
}

#[test]
fn test_retain_keeps_still_valid_ids() {
    let table = sample_table();
    table.toggle_checked("abc");
    table.toggle_checked("def");

    let remaining = vec![Row::new("def", vec![Cell::text("def"), Cell::text("20")])];
    table.refresh(Some(remaining), true);

    let removed = table.retain_checked(&table.visible_ids());
    assert_eq!(removed, vec!["abc".to_string()]);
    assert_eq!(table.checked_ids(), vec!["def".to_string()]);
}

#[test]
fn test_clear_empties_rows_and_active_only() {
    let table = sample_table();
    table.set_active(Some(0));
    table.toggle_checked("abc");
    table.set_error(Some("boom".into()));

    table.clear(true);

    assert!(table.is_empty());
    assert_eq!(table.active(), None);
    assert_eq!(table.checked_ids(), vec!["abc".to_string()]);
    assert_eq!(table.error_msg(), Some("boom".to_string()));
}

#[test]
fn test_loading_and_error_flags_are_caller_driven() {
    let table = sample_table();
    assert!(!table.loading());
    assert_eq!(table.error_msg(), None);

    table.set_loading(true);
    table.set_error(Some("HTTP 502".into()));
    assert!(table.loading());
    assert_eq!(table.error_msg(), Some("HTTP 502".to_string()));

    // Flags never touch the row model.
    assert_eq!(table.len(), 3);

    table.set_loading(false);
    table.set_error(None);
    assert!(!table.loading());
    assert_eq!(table.error_msg(), None);
}

#[test]
fn test_dirty_tracking() {
    let table = sample_table();
    table.clear_dirty();
    assert!(!table.is_dirty());

    table.toggle_checked("abc");
    assert!(table.is_dirty());

    table.clear_dirty();
    table.clear(false);
    assert!(!table.is_dirty(), "clear(false) must not schedule a render");
}
