//! Grid geometry: mapping a [`Tree`](crate::tree::Tree) onto a rectangle of
//! terminal cells.

use crate::tree::Tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Horizontal band occupied by one displayed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBand {
    pub x: u16,
    pub width: u16,
}

impl ColumnBand {
    pub fn contains(&self, x: u16) -> bool {
        x >= self.x && x < self.x + self.width
    }
}

/// Which horizontal slot a y coordinate falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSlot {
    Header,
    /// Display row index (position in `tree.rows`).
    Body(usize),
}

/// Columns of leading padding inside each cell.
pub const CELL_PADDING: u16 = 1;

/// Resolved grid geometry for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridLayout {
    pub area: Rect,
    pub columns: Vec<ColumnBand>,
    pub header_height: u16,
    pub row_height: u16,
}

impl GridLayout {
    /// Display column index at the given x coordinate.
    pub fn column_at(&self, x: u16) -> Option<usize> {
        self.columns.iter().position(|band| band.contains(x))
    }

    /// Row slot at the given y coordinate. Does not bounds-check against
    /// the tree's actual row count; callers look the row up themselves.
    pub fn row_at(&self, y: u16) -> Option<RowSlot> {
        if y < self.area.y || y >= self.area.bottom() {
            return None;
        }
        let rel = y - self.area.y;
        if rel < self.header_height {
            return Some(RowSlot::Header);
        }
        if self.row_height == 0 {
            return None;
        }
        Some(RowSlot::Body(((rel - self.header_height) / self.row_height) as usize))
    }

    /// Screen y of the given display row, if it fits in the area.
    pub fn row_y(&self, display_index: usize) -> Option<u16> {
        let y = self
            .area
            .y
            .checked_add(self.header_height)?
            .checked_add(display_index as u16 * self.row_height)?;
        (y < self.area.bottom()).then_some(y)
    }

    /// How many data rows fit below the header.
    pub fn visible_rows(&self) -> usize {
        if self.row_height == 0 {
            return 0;
        }
        (self.area.height.saturating_sub(self.header_height) / self.row_height) as usize
    }
}

/// Compute the grid for a tree over the available area.
///
/// Columns share the width evenly; the remainder goes to the leftmost
/// columns one cell at a time.
pub fn layout(tree: &Tree, area: Rect) -> GridLayout {
    let count = tree.column_count() as u16;
    if count == 0 || area.is_empty() {
        return GridLayout {
            area,
            ..Default::default()
        };
    }

    let base = area.width / count;
    let remainder = area.width % count;

    let mut columns = Vec::with_capacity(count as usize);
    let mut x = area.x;
    for i in 0..count {
        let width = if i < remainder { base + 1 } else { base };
        columns.push(ColumnBand { x, width });
        x = x.saturating_add(width);
    }

    GridLayout {
        area,
        columns,
        header_height: 1,
        row_height: 1,
    }
}
