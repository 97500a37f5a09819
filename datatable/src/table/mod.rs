//! The interactive table component.
//!
//! The component owns:
//! - the row model (replaced wholesale by [`Table::refresh`]),
//! - selection state (active row + checked set),
//! - presentation filters (sort order and search query),
//! - loading/error flags, and
//! - the semantic event queue.
//!
//! Rendering is a pure function ([`project`]) from that state to a
//! [`tabledom::Tree`]; interactions come back in as typed
//! [`tabledom::Hit`]s through [`Table::handle_hit`].
//!
//! # Example
//!
//! ```ignore
//! let table = Table::new(
//!     vec![Header::new("UID").hidden(), Header::new("Amount").sortable()],
//!     TableOptions { searchable: true },
//! );
//! table.refresh(Some(rows), true);
//! let tree = table.projection();
//! // ... adapter renders the tree, hit-tests a click ...
//! table.handle_hit(&hit);
//! for event in table.take_events() {
//!     // navigate / mutate / refetch
//! }
//! ```

mod events;
mod projection;
mod state;

pub use projection::project;
pub use state::{Table, TableId, TableOptions};
