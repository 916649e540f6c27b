//! Table configuration surface.
//!
//! All behavior is configured by an explicit value passed at construction
//! and validated eagerly; the engine never consults ambient state.

use std::time::Duration;

use vgrid_core::ConfigError;

/// How rows are materialized.
///
/// Selected by the caller; the engine never switches modes on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VirtualizationMode {
    /// Render only the rows in the visible window; reserve the rest as
    /// spacer height. For large datasets.
    #[default]
    Window,
    /// Render every processed row. For small datasets.
    Plain,
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Height of one row in pixels.
    pub row_height: u32,
    /// Height of the scroll container in pixels.
    pub container_height: u32,
    /// Extra rows rendered beyond the strictly visible range.
    pub overscan: usize,
    /// Rows requested per page from the source.
    pub page_size: usize,
    /// Trigger a load once fewer than this many rows remain below the
    /// visible tail.
    pub tail_threshold: usize,
    /// Quiet period for filter input debouncing.
    pub debounce_delay: Duration,
    /// Whether header clicks sort.
    pub sortable: bool,
    /// Whether columns offer filter inputs.
    pub filterable: bool,
    /// Whether rows can be selected.
    pub selectable: bool,
    /// Whether more than one row can be selected at once.
    pub multi_select: bool,
    /// Row materialization mode.
    pub mode: VirtualizationMode,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_height: 50,
            container_height: 400,
            overscan: 5,
            page_size: 50,
            tail_threshold: 5,
            debounce_delay: Duration::from_millis(300),
            sortable: true,
            filterable: true,
            selectable: false,
            multi_select: false,
            mode: VirtualizationMode::Window,
        }
    }
}

impl TableConfig {
    /// Validate the configuration up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_height == 0 {
            return Err(ConfigError::ZeroRowHeight);
        }
        if self.container_height == 0 {
            return Err(ConfigError::ZeroContainerHeight);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}
