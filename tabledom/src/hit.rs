//! Hit-testing: pointer coordinates to typed interaction targets.

use crate::layout::{GridLayout, RowSlot, CELL_PADDING};
use crate::tree::{Hit, Target, Tree};

/// Resolve the interaction target at the given screen coordinates.
///
/// Children are checked before the enclosing cell, so a click on a button,
/// link or checkbox glyph resolves to that control rather than to the cell
/// body. A click on cell padding or past the last child resolves to the
/// cell itself.
pub fn hit_test(grid: &GridLayout, tree: &Tree, x: u16, y: u16) -> Option<Hit> {
    if !grid.area.contains(x, y) {
        return None;
    }

    match grid.row_at(y)? {
        RowSlot::Header => {
            let display_col = grid.column_at(x)?;
            let head = tree.head.get(display_col)?;
            Some(Hit::Header { col: head.col })
        }
        RowSlot::Body(display_row) => {
            let row = tree.rows.get(display_row)?;
            let display_col = grid.column_at(x)?;
            let cell = row.cells.get(display_col)?;
            let band = grid.columns[display_col];

            let rel = x - band.x;
            if rel >= CELL_PADDING {
                let content_x = rel - CELL_PADDING;
                for (node, (start, width)) in cell.children.iter().zip(cell.child_spans()) {
                    if content_x >= start && content_x < start + width {
                        return Some(Hit::Cell(node.target_for(&cell.target)));
                    }
                }
            }

            Some(Hit::Cell(Target {
                // Padding and gaps hit the bare cell, with no control id.
                id: None,
                ..cell.target.clone()
            }))
        }
    }
}
