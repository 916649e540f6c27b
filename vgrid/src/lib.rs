pub mod config;
pub mod debounce;
pub mod events;
pub mod loader;
pub mod source;
pub mod table;

pub use table::TableGrid;

pub mod prelude {
    pub use crate::config::{TableConfig, VirtualizationMode};
    pub use crate::debounce::Debouncer;
    pub use crate::events::TableEvents;
    pub use crate::loader::{LoadPhase, LoaderEvent, PageLoader};
    pub use crate::source::{RowPage, RowSource, SourceError};
    pub use crate::table::{
        HeaderCell, HeaderPlan, RenderCell, RenderPlan, RenderRow, TableGrid, TriState,
    };

    pub use vgrid_core::{
        compute_visible_range, process, validate_columns, Align, Column, ColumnWidth, ConfigError,
        FilterMap, KeyedRow, Row, RowKey, Selection, SelectionMode, SortDirection, SortSpec,
        Value, VisibleRange,
    };
}
