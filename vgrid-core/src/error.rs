//! Error types for eager configuration validation.

use thiserror::Error;

/// Malformed table configuration.
///
/// Raised during setup, never at render time: a bad column or a zero
/// geometry value would otherwise fail silently deep inside the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A column was declared without a key.
    #[error("column at index {index} has an empty key")]
    EmptyColumnKey { index: usize },

    /// Two columns share the same key.
    #[error("duplicate column key: {key}")]
    DuplicateColumnKey { key: String },

    /// No columns were declared.
    #[error("a table needs at least one column")]
    NoColumns,

    /// Row height of zero would make the window calculation divide by zero.
    #[error("row height must be non-zero")]
    ZeroRowHeight,

    /// Container height of zero renders nothing.
    #[error("container height must be non-zero")]
    ZeroContainerHeight,

    /// Page size of zero would make the loader spin without progress.
    #[error("page size must be non-zero")]
    ZeroPageSize,
}
