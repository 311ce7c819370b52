//! Generic tabular-data display component.
//!
//! [`DataTable`](table::DataTable) turns rows, column descriptors and row
//! actions into a `celldom` element tree, and registers click handlers for
//! page navigation and row actions in a [`HandlerRegistry`].

pub mod error;
pub mod handlers;
pub mod record;
pub mod state;
pub mod table;

pub use error::TableError;
pub use handlers::{Handler, HandlerRegistry, ON_CLICK};
pub use record::{Record, Value};
pub use state::State;

pub mod prelude {
    pub use crate::error::TableError;
    pub use crate::handlers::{HandlerRegistry, ON_CLICK};
    pub use crate::record::{Record, Value};
    pub use crate::state::State;
    pub use crate::table::{
        Action, CellSource, Column, DataTable, DataTableState, PageEntry, Pager, Variant,
        compute_window,
    };
}
