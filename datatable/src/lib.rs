//! Interactive data-table component for dashboard UIs.
//!
//! The component owns a row model (an ordered list of [`row::Row`]s),
//! selection state (one active row plus an identifier-keyed checked set),
//! and a semantic event queue. Rendering is a pure projection into a
//! [`tabledom::Tree`]; any runtime adapter that can draw the tree and
//! hit-test pointer positions can host the component.
//!
//! Callers fetch domain objects, map them to rows, and call
//! [`table::Table::refresh`]. Concurrent fetches are ordered by the
//! generation tokens in [`refresh`], so a stale response can never
//! overwrite a newer one.

pub mod events;
pub mod filter;
pub mod refresh;
pub mod row;
pub mod selection;
pub mod table;

pub mod prelude {
    pub use crate::events::{EventResult, TableEvent};
    pub use crate::refresh::{RefreshError, RefreshGate, RefreshTicket, Refresher};
    pub use crate::row::{BadgeSpec, ButtonSpec, Cell, ColumnKind, Header, IconSpec, LinkSpec, Row};
    pub use crate::selection::Selection;
    pub use crate::table::{project, Table, TableId, TableOptions};
    pub use tabledom::{Hit, Target, TargetKind, Tree};
}
