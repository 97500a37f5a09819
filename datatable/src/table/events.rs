//! Interaction handling for the Table component.
//!
//! Adapters resolve pointer positions to [`Hit`]s (via
//! [`tabledom::hit_test`]) and feed them here. Resolution order inside a
//! cell is decided by hit-testing; this module decides what each target
//! kind *means*: a checkbox toggles the checked set and nothing else, a
//! button or link only emits its event, and a plain cell click both emits
//! and moves the active-row highlight.

use tabledom::{Hit, TargetKind};

use crate::events::{EventResult, TableEvent};

use super::state::Table;

impl Table {
    /// Handle a resolved interaction target.
    pub fn handle_hit(&self, hit: &Hit) -> EventResult {
        match hit {
            Hit::Header { col } => {
                let Some((col, ascending)) = self.toggle_sort(*col) else {
                    return EventResult::Ignored;
                };
                self.push_event(TableEvent::Sort { col, ascending });
                EventResult::Consumed
            }
            Hit::Cell(target) => match target.kind {
                TargetKind::Checkbox => {
                    // Toggles only; the active row and the cell-click
                    // event are both untouched.
                    self.toggle_checked(&target.row_id);
                    EventResult::Consumed
                }
                TargetKind::Button | TargetKind::Link => {
                    self.push_event(TableEvent::from_target(target));
                    EventResult::Consumed
                }
                TargetKind::Cell => {
                    self.set_active(Some(target.row));
                    self.push_event(TableEvent::from_target(target));
                    EventResult::Consumed
                }
            },
        }
    }

    /// Dedicated row-selection interaction (for detail views), distinct
    /// from a cell click.
    pub fn select_row(&self, row: usize) -> EventResult {
        let Some(row_data) = self.row(row) else {
            return EventResult::Ignored;
        };
        self.push_event(TableEvent::SelectRow {
            row,
            row_id: row_data.id,
        });
        self.mark_dirty();
        EventResult::Consumed
    }
}
