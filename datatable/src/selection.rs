//! Selection state for the table component.
//!
//! Two independent strategies coexist: an index-based active row for
//! single-row detail views, and an identifier-keyed checked set for bulk
//! operations. The checked set survives refreshes by design; callers
//! reconcile it explicitly with [`Selection::retain`] when they want
//! identifiers of removed rows dropped.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Index of the highlighted row in the current row list.
    active: Option<usize>,
    /// Checked row identifiers.
    checked: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn set_active(&mut self, index: Option<usize>) {
        self.active = index;
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// All checked ids (sorted for deterministic ordering).
    pub fn checked(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.checked.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    /// Number of checked rows.
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Toggle one id. Returns whether the id is checked afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.checked.remove(id) {
            false
        } else {
            self.checked.insert(id.to_string());
            true
        }
    }

    /// Check every id in the list. Returns the ids that were newly checked.
    pub fn check_all(&mut self, ids: &[String]) -> Vec<String> {
        let mut added = Vec::new();
        for id in ids {
            if self.checked.insert(id.clone()) {
                added.push(id.clone());
            }
        }
        added
    }

    /// Uncheck everything. Returns the ids that were checked.
    pub fn clear_checked(&mut self) -> Vec<String> {
        self.checked.drain().collect()
    }

    /// Explicit reconciliation: drop checked ids that are no longer in
    /// `valid`. Returns the removed ids. Never called implicitly.
    pub fn retain(&mut self, valid: &[String]) -> Vec<String> {
        let keep: HashSet<&String> = valid.iter().collect();
        let removed: Vec<String> = self
            .checked
            .iter()
            .filter(|id| !keep.contains(id))
            .cloned()
            .collect();
        for id in &removed {
            self.checked.remove(id);
        }
        removed
    }
}
