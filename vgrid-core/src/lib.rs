pub mod column;
pub mod error;
pub mod query;
pub mod row;
pub mod selection;
pub mod value;
pub mod viewport;

pub use column::{validate_columns, Align, CellRenderer, Column, ColumnWidth};
pub use error::ConfigError;
pub use query::{process, FilterMap, SortDirection, SortSpec};
pub use row::{KeyedRow, Row, RowKey};
pub use selection::{Selection, SelectionMode};
pub use value::Value;
pub use viewport::{
    bottom_spacer_px, compute_visible_range, top_spacer_px, total_height_px, VisibleRange,
};
