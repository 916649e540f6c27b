//! The virtual table engine.
//!
//! [`TableGrid`] owns the row store, query state, selection, scroll
//! position, debounced filter input, and the infinite-scroll loader, and
//! turns them into [`RenderPlan`]s on demand.

mod render;
mod state;

pub use render::{
    HeaderCell, HeaderPlan, RenderCell, RenderPlan, RenderRow, TriState, NULL_CELL_TEXT,
};
pub use state::TableGrid;
