pub mod buffer;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod tree;

pub use buffer::{Buffer, Cell, Rgb};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::hit_test;
pub use layout::{layout, ColumnBand, GridLayout, Rect, RowSlot};
pub use render::render_to_buffer;
pub use terminal::Terminal;
pub use tree::{HeadCell, Hit, Node, RenderCell, RenderRow, Target, TargetKind, Tree};
