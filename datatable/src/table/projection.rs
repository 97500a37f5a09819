//! Pure projection from table state to a render tree.

use tabledom::{HeadCell, Node, RenderCell, RenderRow, Target, TargetKind, Tree};

use crate::row::{Cell, Header, Row};
use crate::selection::Selection;

/// Build the render projection.
///
/// `view` lists model row indices in display order; `sort` is the active
/// `(column, ascending)` pair shown in the header. The function is total:
/// malformed input degrades (extra cells are dropped, missing cells render
/// empty) instead of panicking.
pub fn project(
    headers: &[Header],
    rows: &[Row],
    view: &[usize],
    selection: &Selection,
    sort: Option<(usize, bool)>,
) -> Tree {
    let visible: Vec<(usize, &Header)> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !h.hidden)
        .collect();

    let head = visible
        .iter()
        .map(|&(col, header)| HeadCell {
            label: header.label.clone(),
            col,
            sortable: header.sortable,
            sort: sort.and_then(|(sort_col, ascending)| (sort_col == col).then_some(ascending)),
        })
        .collect();

    let tree_rows = view
        .iter()
        .filter_map(|&index| {
            let row = rows.get(index)?;
            let active = selection.active() == Some(index);
            let cells = visible
                .iter()
                .map(|&(col, _)| project_cell(row, index, col, selection))
                .collect();
            Some(RenderRow {
                row_id: row.id.clone(),
                index,
                active,
                cells,
            })
        })
        .collect();

    Tree {
        head,
        rows: tree_rows,
    }
}

fn cell_target(cell: Option<&Cell>, row: &Row, index: usize, col: usize) -> Target {
    Target {
        kind: TargetKind::Cell,
        id: cell.and_then(|c| c.id.clone()),
        row: index,
        col,
        row_id: row.id.clone(),
    }
}

fn project_cell(row: &Row, index: usize, col: usize, selection: &Selection) -> RenderCell {
    let cell = row.cells.get(col);
    let target = cell_target(cell, row, index, col);

    let Some(cell) = cell else {
        // Unmatched trailing header: render an empty cell.
        return RenderCell {
            target,
            class: None,
            style: None,
            children: vec![Node::Text {
                content: String::new(),
            }],
        };
    };

    let mut children = Vec::new();

    if cell.checkbox {
        // Checkbox cells render the glyph alone; its state is derived
        // from the checked set.
        children.push(Node::Checkbox {
            checked: selection.is_checked(&row.id),
        });
    } else {
        children.push(Node::Text {
            content: cell.display_text().to_string(),
        });
        if let Some(icon) = &cell.icon {
            children.push(Node::Icon {
                src: icon.src.clone(),
                style: icon.style.clone(),
            });
        }
        for button in &cell.buttons {
            children.push(Node::Button {
                id: button.id.clone(),
                label: button.label.clone(),
                class: button.class.clone(),
                style: button.style.clone(),
            });
        }
        for badge in &cell.badges {
            children.push(Node::Badge {
                id: badge.id.clone(),
                label: badge.label.clone(),
                class: badge.class.clone(),
                style: badge.style.clone(),
            });
        }
        for link in &cell.links {
            children.push(Node::Link {
                id: link.id.clone(),
                label: link.display_label().to_string(),
                href: link.href.clone(),
                class: link.class.clone(),
                style: link.style.clone(),
            });
        }
    }

    RenderCell {
        target,
        class: cell.class.clone(),
        style: cell.style.clone(),
        children,
    }
}
