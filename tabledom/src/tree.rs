//! The render projection tree for a tabular UI.
//!
//! A [`Tree`] is a purely declarative description of one table render: a
//! header row plus decorated data rows. It carries no widget state and no
//! callbacks; interactive leaves carry typed [`Target`] payloads instead,
//! so a runtime adapter can translate pointer coordinates into semantic
//! interactions without scraping identifiers out of rendered output.

use unicode_width::UnicodeWidthStr;

/// What kind of control an interaction resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// The cell body (text, icon, badge or background).
    Cell,
    /// A checkbox glyph.
    Checkbox,
    /// A button.
    Button,
    /// A hyperlink.
    Link,
}

/// Typed interaction payload attached to projection nodes.
///
/// `row` and `col` are *model* indices (positions in the caller's row list
/// and header list), not display positions: sorting or filtering the view
/// must never re-target an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub kind: TargetKind,
    /// Control id (`Cell.id`, `ButtonSpec.id`, ...), if the caller set one.
    pub id: Option<String>,
    /// Model row index.
    pub row: usize,
    /// Model column index.
    pub col: usize,
    /// Stable row identifier.
    pub row_id: String,
}

/// Result of hit-testing a pointer position against a [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// The header cell of the given model column.
    Header { col: usize },
    /// A body cell or one of its interactive children.
    Cell(Target),
}

/// One rendered header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadCell {
    pub label: String,
    /// Model column index (hidden columns are absent from the tree, so
    /// display position and model index can differ).
    pub col: usize,
    pub sortable: bool,
    /// `Some(ascending)` when this column is the active sort key.
    pub sort: Option<bool>,
}

/// A leaf inside a rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text {
        content: String,
    },
    Icon {
        src: String,
        style: Option<String>,
    },
    Button {
        id: Option<String>,
        label: String,
        class: Option<String>,
        style: Option<String>,
    },
    Badge {
        id: Option<String>,
        label: String,
        class: Option<String>,
        style: Option<String>,
    },
    Link {
        id: Option<String>,
        label: String,
        href: String,
        class: Option<String>,
        style: Option<String>,
    },
    Checkbox {
        checked: bool,
    },
}

/// Checkbox glyphs, matching the dashboard's rendered characters.
pub const CHECKBOX_CHECKED: &str = "☑";
pub const CHECKBOX_UNCHECKED: &str = "☐";

impl Node {
    /// Width of this leaf in terminal columns.
    pub fn width(&self) -> u16 {
        match self {
            Node::Text { content } => content.width() as u16,
            Node::Icon { .. } => 1,
            // Buttons render as `[label]`.
            Node::Button { label, .. } => label.width() as u16 + 2,
            // Badges render with one column of padding on each side.
            Node::Badge { label, .. } => label.width() as u16 + 2,
            Node::Link { label, .. } => label.width() as u16,
            Node::Checkbox { checked } => {
                let glyph = if *checked {
                    CHECKBOX_CHECKED
                } else {
                    CHECKBOX_UNCHECKED
                };
                glyph.width() as u16
            }
        }
    }

    /// The target produced when this leaf is hit, given the enclosing
    /// cell's own target.
    pub fn target_for(&self, cell: &Target) -> Target {
        match self {
            Node::Text { .. } | Node::Icon { .. } => cell.clone(),
            Node::Badge { id, .. } => Target {
                kind: TargetKind::Cell,
                id: id.clone().or_else(|| cell.id.clone()),
                ..cell.clone()
            },
            Node::Button { id, .. } => Target {
                kind: TargetKind::Button,
                id: id.clone(),
                ..cell.clone()
            },
            Node::Link { id, .. } => Target {
                kind: TargetKind::Link,
                id: id.clone(),
                ..cell.clone()
            },
            Node::Checkbox { .. } => Target {
                kind: TargetKind::Checkbox,
                id: None,
                ..cell.clone()
            },
        }
    }
}

/// One rendered cell: its own target plus decorated children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCell {
    /// The cell-body target (`kind == Cell`, `id` from the source cell).
    pub target: Target,
    /// Class string carried through from the source cell.
    pub class: Option<String>,
    /// Style string carried through from the source cell.
    pub style: Option<String>,
    pub children: Vec<Node>,
}

/// Gap between children of one cell, in columns.
const CHILD_GAP: u16 = 1;

impl RenderCell {
    /// Horizontal spans of the children, relative to the cell content
    /// origin. Shared by rendering and hit-testing so both agree on
    /// where each leaf sits.
    pub fn child_spans(&self) -> Vec<(u16, u16)> {
        let mut spans = Vec::with_capacity(self.children.len());
        let mut x = 0u16;
        for child in &self.children {
            let width = child.width();
            spans.push((x, width));
            x = x.saturating_add(width).saturating_add(CHILD_GAP);
        }
        spans
    }
}

/// One rendered data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub row_id: String,
    /// Model row index.
    pub index: usize,
    /// Whether this is the highlighted (active) row.
    pub active: bool,
    pub cells: Vec<RenderCell>,
}

/// A complete table render: header cells plus data rows, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree {
    pub head: Vec<HeadCell>,
    pub rows: Vec<RenderRow>,
}

impl Tree {
    /// Number of displayed columns.
    pub fn column_count(&self) -> usize {
        self.head.len()
    }

    /// Number of displayed rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
