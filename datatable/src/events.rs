//! Semantic events emitted by the table toward its caller.
//!
//! Each click-derived event carries the typed payload that the original
//! interaction resolved to: control id, model row index, model column
//! index and the stable row identifier.

use tabledom::Target;

/// Result of handling an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Interaction was ignored, try other handlers.
    Ignored,
    /// Interaction was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// An event for the caller to act on (navigate, mutate, refetch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    ClickButton {
        id: Option<String>,
        row: usize,
        col: usize,
        row_id: String,
    },
    ClickLink {
        id: Option<String>,
        row: usize,
        col: usize,
        row_id: String,
    },
    ClickCell {
        id: Option<String>,
        row: usize,
        col: usize,
        row_id: String,
    },
    /// A dedicated row-selection interaction, distinct from a cell click.
    SelectRow { row: usize, row_id: String },
    /// The sort order changed via a header click.
    Sort { col: usize, ascending: bool },
}

impl TableEvent {
    /// Build the click event matching a body-cell target.
    pub(crate) fn from_target(target: &Target) -> Self {
        let id = target.id.clone();
        let row = target.row;
        let col = target.col;
        let row_id = target.row_id.clone();
        match target.kind {
            tabledom::TargetKind::Button => TableEvent::ClickButton { id, row, col, row_id },
            tabledom::TargetKind::Link => TableEvent::ClickLink { id, row, col, row_id },
            _ => TableEvent::ClickCell { id, row, col, row_id },
        }
    }
}
