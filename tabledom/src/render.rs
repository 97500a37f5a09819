//! Rendering a [`Tree`] into a [`Buffer`].
//!
//! Class strings from the source data are mapped onto a small fixed
//! terminal palette; style strings are carried as data but not
//! interpreted here.

use crate::buffer::{Buffer, Cell, Rgb};
use crate::layout::{GridLayout, CELL_PADDING};
use crate::tree::{Node, RenderCell, Tree, CHECKBOX_CHECKED, CHECKBOX_UNCHECKED};

const WHITE: Rgb = Rgb::new(230, 230, 230);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const GREEN: Rgb = Rgb::new(80, 200, 120);
const RED: Rgb = Rgb::new(220, 80, 80);
const YELLOW: Rgb = Rgb::new(220, 180, 60);
const BLUE: Rgb = Rgb::new(90, 140, 230);
const GRAY: Rgb = Rgb::new(140, 140, 140);
const ACTIVE_BG: Rgb = Rgb::new(40, 70, 130);

/// Map a class string (space-separated) onto foreground/background colors.
fn class_colors(class: Option<&str>) -> (Option<Rgb>, Option<Rgb>) {
    let mut fg = None;
    let mut bg = None;
    for token in class.unwrap_or_default().split_whitespace() {
        match token {
            "text-success" => fg = Some(GREEN),
            "text-danger" => fg = Some(RED),
            "text-warning" => fg = Some(YELLOW),
            "text-primary" => fg = Some(BLUE),
            "text-muted" => fg = Some(GRAY),
            "bg-success" | "btn-success" => bg = Some(GREEN),
            "bg-danger" | "btn-danger" => bg = Some(RED),
            "bg-warning" | "btn-warning" => bg = Some(YELLOW),
            "bg-primary" | "btn-primary" | "table-primary" => bg = Some(BLUE),
            _ => {}
        }
    }
    (fg, bg)
}

fn render_cell(buf: &mut Buffer, cell: &RenderCell, x: u16, y: u16, clip_right: u16, base: Cell) {
    let (cell_fg, cell_bg) = class_colors(cell.class.as_deref());
    let cell_base = Cell {
        fg: cell_fg.unwrap_or(base.fg),
        bg: cell_bg.unwrap_or(base.bg),
        ..base
    };

    let origin = x + CELL_PADDING;
    for (node, (start, _)) in cell.children.iter().zip(cell.child_spans()) {
        let nx = origin.saturating_add(start);
        if nx >= clip_right {
            break;
        }
        match node {
            Node::Text { content } => {
                buf.put_str(nx, y, content, cell_base, clip_right);
            }
            Node::Icon { .. } => {
                buf.put_str(nx, y, "●", cell_base, clip_right);
            }
            Node::Button { label, class, .. } => {
                let (fg, bg) = class_colors(class.as_deref());
                let template = Cell {
                    fg: fg.unwrap_or(cell_base.fg),
                    bg: bg.unwrap_or(cell_base.bg),
                    bold: true,
                    ..cell_base
                };
                buf.put_str(nx, y, &format!("[{label}]"), template, clip_right);
            }
            Node::Badge { label, class, .. } => {
                let (fg, bg) = class_colors(class.as_deref());
                let template = Cell {
                    fg: fg.unwrap_or(BLACK),
                    bg: bg.unwrap_or(GRAY),
                    ..cell_base
                };
                buf.put_str(nx, y, &format!(" {label} "), template, clip_right);
            }
            Node::Link { label, class, .. } => {
                let (fg, _) = class_colors(class.as_deref());
                let template = Cell {
                    fg: fg.unwrap_or(BLUE),
                    underline: true,
                    ..cell_base
                };
                buf.put_str(nx, y, label, template, clip_right);
            }
            Node::Checkbox { checked } => {
                let glyph = if *checked {
                    CHECKBOX_CHECKED
                } else {
                    CHECKBOX_UNCHECKED
                };
                buf.put_str(nx, y, glyph, cell_base, clip_right);
            }
        }
    }
}

/// Draw the tree into the buffer using the given grid geometry.
pub fn render_to_buffer(tree: &Tree, grid: &GridLayout, buf: &mut Buffer) {
    if grid.columns.is_empty() {
        return;
    }

    // Header row.
    if grid.header_height > 0 {
        let y = grid.area.y;
        let header = Cell {
            fg: WHITE,
            bg: BLACK,
            bold: true,
            ..Cell::default()
        };
        for (band, head) in grid.columns.iter().zip(&tree.head) {
            buf.fill(band.x, y, band.width, header);
            let clip = band.x + band.width;
            let mut label = head.label.clone();
            if let Some(ascending) = head.sort {
                label.push_str(if ascending { " ▲" } else { " ▼" });
            }
            buf.put_str(band.x + CELL_PADDING, y, &label, header, clip);
        }
    }

    // Data rows, clipped to the area.
    let visible = grid.visible_rows().min(tree.rows.len());
    for (display_index, row) in tree.rows.iter().take(visible).enumerate() {
        let Some(y) = grid.row_y(display_index) else {
            break;
        };
        let base = if row.active {
            Cell {
                fg: WHITE,
                bg: ACTIVE_BG,
                ..Cell::default()
            }
        } else {
            Cell {
                fg: WHITE,
                ..Cell::default()
            }
        };
        if row.active {
            buf.fill(grid.area.x, y, grid.area.width, base);
        }
        for (band, cell) in grid.columns.iter().zip(&row.cells) {
            render_cell(buf, cell, band.x, y, band.x + band.width, base);
        }
    }
}
