//! Table component state.

use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use tabledom::Tree;

use crate::events::TableEvent;
use crate::filter::filter_rows;
use crate::row::{ColumnKind, Header, Row};
use crate::selection::Selection;

use super::projection;

/// Unique identifier for a Table component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Presentation options fixed at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableOptions {
    /// Enable the search filter over cell text.
    pub searchable: bool,
}

/// Internal state for the Table component.
#[derive(Debug, Default)]
pub(super) struct TableInner {
    pub headers: Vec<Header>,
    pub rows: Vec<Row>,
    pub selection: Selection,
    /// Active sort: (model column index, ascending).
    pub sort: Option<(usize, bool)>,
    pub query: String,
    /// Display order: model row indices after filtering and sorting.
    pub view: Vec<usize>,
    pub searchable: bool,
    pub loading: bool,
    pub error_msg: Option<String>,
    pub events: Vec<TableEvent>,
}

/// Interactive table with selection and an incremental-refresh contract.
///
/// Cheap to clone; clones share state. All mutation goes through the
/// inner lock, so handlers stay short and never re-enter.
#[derive(Debug)]
pub struct Table {
    id: TableId,
    inner: Arc<RwLock<TableInner>>,
    dirty: Arc<AtomicBool>,
}

impl Table {
    pub fn new(headers: Vec<Header>, options: TableOptions) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner {
                headers,
                searchable: options.searchable,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a table with an initial row set.
    pub fn with_rows(headers: Vec<Header>, rows: Vec<Row>, options: TableOptions) -> Self {
        let table = Self::new(headers, options);
        table.refresh(Some(rows), true);
        table
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Row model access
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by model index.
    pub fn row(&self, index: usize) -> Option<Row> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(index).cloned())
    }

    pub fn rows(&self) -> Vec<Row> {
        self.inner.read().map(|g| g.rows.clone()).unwrap_or_default()
    }

    pub fn headers(&self) -> Vec<Header> {
        self.inner
            .read()
            .map(|g| g.headers.clone())
            .unwrap_or_default()
    }

    /// Current display order: model row indices after search and sort.
    pub fn view(&self) -> Vec<usize> {
        self.inner.read().map(|g| g.view.clone()).unwrap_or_default()
    }

    /// Row ids in display order.
    pub fn visible_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| {
                g.view
                    .iter()
                    .filter_map(|&i| g.rows.get(i).map(|r| r.id.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Refresh contract
    // -------------------------------------------------------------------------

    /// Replace the row model (or keep it when `rows` is `None`) and rebuild
    /// the display order.
    ///
    /// When `reset_selection` is true the active row is cleared. The
    /// checked set is left untouched either way; callers that want it
    /// cleared or reconciled do so explicitly.
    pub fn refresh(&self, rows: Option<Vec<Row>>, reset_selection: bool) {
        if let Ok(mut guard) = self.inner.write() {
            if let Some(rows) = rows {
                log::debug!("{}: refresh with {} rows", self.id, rows.len());
                guard.rows = rows;
            }
            if reset_selection {
                guard.selection.clear_active();
            } else if let Some(active) = guard.selection.active()
                && active >= guard.rows.len()
            {
                // Index-based selection cannot survive a shrink.
                guard.selection.clear_active();
            }
            rebuild_view(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Empty the row model. The checked set is untouched; the active row
    /// is cleared because its index no longer refers to anything.
    pub fn clear(&self, rerender: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows.clear();
            guard.view.clear();
            guard.selection.clear_active();
            if rerender {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Presentation flags
    // -------------------------------------------------------------------------

    pub fn set_loading(&self, on: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.loading = on;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    pub fn set_error(&self, error_msg: Option<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_msg = error_msg;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn error_msg(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.error_msg.clone())
    }

    // -------------------------------------------------------------------------
    // Active row
    // -------------------------------------------------------------------------

    pub fn active(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.selection.active())
    }

    pub fn set_active(&self, index: Option<usize>) {
        if let Ok(mut guard) = self.inner.write() {
            let clamped = index.filter(|&i| i < guard.rows.len());
            guard.selection.set_active(clamped);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Checked set
    // -------------------------------------------------------------------------

    pub fn is_checked(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_checked(id))
            .unwrap_or(false)
    }

    /// All checked ids, sorted.
    pub fn checked_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.selection.checked())
            .unwrap_or_default()
    }

    /// Toggle one id. Returns whether it is checked afterwards.
    pub fn toggle_checked(&self, id: &str) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            let now = guard.selection.toggle(id);
            self.dirty.store(true, Ordering::SeqCst);
            now
        } else {
            false
        }
    }

    /// Check every currently visible (filtered) row. Returns newly
    /// checked ids.
    pub fn check_all_visible(&self) -> Vec<String> {
        if let Ok(mut guard) = self.inner.write() {
            let ids: Vec<String> = guard
                .view
                .iter()
                .filter_map(|&i| guard.rows.get(i).map(|r| r.id.clone()))
                .collect();
            let added = guard.selection.check_all(&ids);
            self.dirty.store(true, Ordering::SeqCst);
            added
        } else {
            Vec::new()
        }
    }

    /// Uncheck everything. Returns the previously checked ids.
    pub fn clear_checked(&self) -> Vec<String> {
        if let Ok(mut guard) = self.inner.write() {
            let removed = guard.selection.clear_checked();
            self.dirty.store(true, Ordering::SeqCst);
            removed
        } else {
            Vec::new()
        }
    }

    /// Explicit reconciliation of the checked set against a list of ids
    /// known to be valid. Returns the dropped ids.
    pub fn retain_checked(&self, valid: &[String]) -> Vec<String> {
        if let Ok(mut guard) = self.inner.write() {
            let removed = guard.selection.retain(valid);
            if !removed.is_empty() {
                log::debug!("{}: dropped {} stale checked ids", self.id, removed.len());
                self.dirty.store(true, Ordering::SeqCst);
            }
            removed
        } else {
            Vec::new()
        }
    }

    // -------------------------------------------------------------------------
    // Sort and search
    // -------------------------------------------------------------------------

    pub fn sort(&self) -> Option<(usize, bool)> {
        self.inner.read().ok().and_then(|g| g.sort)
    }

    /// Toggle sorting on a column: unsorted → ascending → descending →
    /// ascending… Returns the new sort state, or `None` when the column
    /// is missing or not sortable.
    pub fn toggle_sort(&self, col: usize) -> Option<(usize, bool)> {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.headers.get(col).is_some_and(|h| h.sortable) {
                return None;
            }
            let ascending = match guard.sort {
                Some((current, asc)) if current == col => !asc,
                _ => true,
            };
            guard.sort = Some((col, ascending));
            rebuild_view(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
            Some((col, ascending))
        } else {
            None
        }
    }

    pub fn query(&self) -> String {
        self.inner.read().map(|g| g.query.clone()).unwrap_or_default()
    }

    /// Set the search query. A no-op view-wise unless the table was
    /// created searchable.
    pub fn set_query(&self, query: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.query = query.into();
            rebuild_view(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Projection and events
    // -------------------------------------------------------------------------

    /// Recompute the render projection from current state.
    pub fn projection(&self) -> Tree {
        self.inner
            .read()
            .map(|g| projection::project(&g.headers, &g.rows, &g.view, &g.selection, g.sort))
            .unwrap_or_default()
    }

    pub(super) fn push_event(&self, event: TableEvent) {
        if let Ok(mut guard) = self.inner.write() {
            guard.events.push(event);
        }
    }

    /// Drain the pending semantic events.
    pub fn take_events(&self) -> Vec<TableEvent> {
        self.inner
            .write()
            .map(|mut g| std::mem::take(&mut g.events))
            .unwrap_or_default()
    }

    pub(super) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Table {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

/// Rebuild the display order: filter by query, then sort.
fn rebuild_view(inner: &mut TableInner) {
    let mut view: Vec<usize> = if inner.searchable && !inner.query.is_empty() {
        let haystacks: Vec<String> = inner.rows.iter().map(Row::search_text).collect();
        filter_rows(&inner.query, &haystacks)
    } else {
        (0..inner.rows.len()).collect()
    };

    if let Some((col, ascending)) = inner.sort {
        let kind = inner
            .headers
            .get(col)
            .map(|h| h.kind)
            .unwrap_or_default();
        view.sort_by(|&a, &b| {
            let ord = compare_cells(&inner.rows[a], &inner.rows[b], col, kind);
            if ascending { ord } else { ord.reverse() }
        });
    }

    inner.view = view;
}

fn cell_text(row: &Row, col: usize) -> &str {
    row.cells
        .get(col)
        .and_then(|c| c.text.as_deref())
        .unwrap_or("")
}

fn compare_cells(a: &Row, b: &Row, col: usize, kind: ColumnKind) -> CmpOrdering {
    let ta = cell_text(a, col);
    let tb = cell_text(b, col);
    match kind {
        ColumnKind::Number => {
            let na = ta.parse::<f64>().unwrap_or(f64::NEG_INFINITY);
            let nb = tb.parse::<f64>().unwrap_or(f64::NEG_INFINITY);
            na.partial_cmp(&nb).unwrap_or(CmpOrdering::Equal)
        }
        ColumnKind::Bool => {
            let ba = ta.eq_ignore_ascii_case("true");
            let bb = tb.eq_ignore_ascii_case("true");
            ba.cmp(&bb)
        }
        ColumnKind::Text => ta.cmp(tb),
    }
}
