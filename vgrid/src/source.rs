//! Data-source contract for paged row loading.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use vgrid_core::Row;

/// Error type for page load failures.
///
/// Load failures are expected at this boundary: they are caught, logged,
/// and surfaced as loader events, never propagated into the renderer.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SourceError {
    /// Error message.
    pub message: String,
}

impl SourceError {
    /// Create a new source error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<String> for SourceError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for SourceError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// One page of rows from the remote source.
///
/// Matches the `{items, hasNextPage}` wire shape, so a JSON API response
/// deserializes directly into it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowPage {
    /// The rows in this page.
    pub items: Vec<Row>,
    /// Whether more pages are available after this one.
    pub has_next_page: bool,
}

impl RowPage {
    /// Create a page.
    pub fn new(items: Vec<Row>, has_next_page: bool) -> Self {
        Self {
            items,
            has_next_page,
        }
    }

    /// Number of rows in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A paged row source.
///
/// The loader calls `load_page` at most once per loading cycle; pages are
/// numbered from 1 and the consumer supplies page 1 itself, so the first
/// load-more request asks for page 2.
#[async_trait]
pub trait RowSource: Send + Sync + 'static {
    /// Fetch one page of rows.
    async fn load_page(&self, page: u32, page_size: usize) -> Result<RowPage, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_page_deserializes_from_api_shape() {
        let page: RowPage = serde_json::from_str(
            r#"{"items":[{"id":"u-1","name":"Ana"}],"hasNextPage":true}"#,
        )
        .unwrap();
        assert_eq!(page.len(), 1);
        assert!(page.has_next_page);
        assert_eq!(page.items[0].id(), Some("u-1"));
    }
}
