//! Render planning.
//!
//! A [`RenderPlan`] is a pure description of what to draw for the current
//! state: which rows, with what cell text, and how much spacer height to
//! reserve above and below the window. Producing a plan never mutates the
//! table.

use vgrid_core::{
    bottom_spacer_px, top_spacer_px, total_height_px, Align, ColumnWidth, RowKey, Value,
};

use crate::config::VirtualizationMode;
use crate::table::state::TableGrid;

/// Placeholder text for null and missing cell values.
pub const NULL_CELL_TEXT: &str = "—";

const SORT_ASC_INDICATOR: char = '↑';
const SORT_DESC_INDICATOR: char = '↓';
const SORT_IDLE_INDICATOR: char = '↕';

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCell {
    /// Key of the column this cell belongs to.
    pub column_key: String,
    /// Final display text.
    pub text: String,
    /// Horizontal alignment.
    pub align: Align,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRow {
    /// Index into the processed sequence.
    pub index: usize,
    /// Stable row key.
    pub key: RowKey,
    /// Whether the row is selected.
    pub selected: bool,
    /// Cells in column order.
    pub cells: Vec<RenderCell>,
}

/// State of a tri-state select-all control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    Unchecked,
    Checked,
    /// Some but not all rows in view are selected.
    Indeterminate,
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column key.
    pub column_key: String,
    /// Header text.
    pub title: String,
    /// Width specification.
    pub width: ColumnWidth,
    /// Alignment.
    pub align: Align,
    /// `↑`/`↓` when this column drives the sort, `↕` when it could,
    /// `None` when it cannot.
    pub sort_indicator: Option<char>,
    /// Whether the column offers a filter input.
    pub filterable: bool,
    /// Current filter text for the column, if active.
    pub filter_text: Option<String>,
}

/// The header strip.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderPlan {
    /// Cells in column order.
    pub cells: Vec<HeaderCell>,
    /// Select-all control state; `None` unless multi-select is on.
    pub select_all: Option<TriState>,
}

/// Everything needed to draw the table body for the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Row materialization mode the plan was built for.
    pub mode: VirtualizationMode,
    /// Spacer height above the rendered rows, in pixels.
    pub top_spacer_px: u64,
    /// Spacer height below the rendered rows, in pixels.
    pub bottom_spacer_px: u64,
    /// Scrollable height as if every row were rendered, in pixels.
    pub total_height_px: u64,
    /// The rows to materialize.
    pub rows: Vec<RenderRow>,
    /// Whether the processed sequence is empty (show an empty state).
    pub empty: bool,
    /// Whether a page fetch is in flight (show a tail loading row).
    pub loading_more: bool,
}

impl TableGrid {
    /// Build the body plan for the current state.
    ///
    /// In window mode only the rows in the visible range are materialized;
    /// in plain mode every processed row is.
    pub fn render(&self) -> RenderPlan {
        let total = self.processed().len();
        let mode = self.config().mode;
        let row_height = self.config().row_height;
        let height = total_height_px(total, row_height);

        if total == 0 {
            return RenderPlan {
                mode,
                top_spacer_px: 0,
                bottom_spacer_px: 0,
                total_height_px: 0,
                rows: Vec::new(),
                empty: true,
                loading_more: self.is_loading_more(),
            };
        }

        let (indices, top, bottom) = match mode {
            VirtualizationMode::Plain => (0..total, 0, 0),
            VirtualizationMode::Window => {
                // total > 0 and row_height is validated non-zero, so the
                // range always exists here.
                match self.visible_range() {
                    Some(range) => (
                        range.start..range.end + 1,
                        top_spacer_px(&range, row_height),
                        bottom_spacer_px(&range, row_height, total),
                    ),
                    None => (0..0, 0, 0),
                }
            }
        };

        let rows = indices.map(|index| self.render_row(index)).collect();

        RenderPlan {
            mode,
            top_spacer_px: top,
            bottom_spacer_px: bottom,
            total_height_px: height,
            rows,
            empty: false,
            loading_more: self.is_loading_more(),
        }
    }

    /// Build the header strip for the current state.
    pub fn header(&self) -> HeaderPlan {
        let cells = self
            .columns()
            .iter()
            .map(|column| {
                let sortable = self.config().sortable && column.sortable;
                let sort_indicator = sortable.then(|| {
                    if self.sort().key.as_deref() == Some(column.key.as_str()) {
                        match self.sort().direction {
                            vgrid_core::SortDirection::Asc => SORT_ASC_INDICATOR,
                            vgrid_core::SortDirection::Desc => SORT_DESC_INDICATOR,
                        }
                    } else {
                        SORT_IDLE_INDICATOR
                    }
                });
                let filterable = self.config().filterable && column.filterable;
                HeaderCell {
                    column_key: column.key.clone(),
                    title: column.title.clone(),
                    width: column.width.clone(),
                    align: column.align,
                    sort_indicator,
                    filterable,
                    filter_text: filterable
                        .then(|| self.filters().get(&column.key).map(str::to_string))
                        .flatten(),
                }
            })
            .collect();

        let select_all = (self.selection().mode() == vgrid_core::SelectionMode::Multi).then(|| {
            let keys: Vec<RowKey> = self.processed().iter().map(|r| r.key().clone()).collect();
            if self.selection().is_all_selected(&keys) {
                TriState::Checked
            } else if self.selection().is_indeterminate(&keys) {
                TriState::Indeterminate
            } else {
                TriState::Unchecked
            }
        });

        HeaderPlan { cells, select_all }
    }

    fn render_row(&self, index: usize) -> RenderRow {
        let keyed = &self.processed()[index];
        let cells = self
            .columns()
            .iter()
            .map(|column| {
                let value = keyed.get(&column.key).unwrap_or(&Value::Null);
                let text = match &column.renderer {
                    Some(renderer) => renderer(value, keyed.row(), index),
                    None if value.is_null() => NULL_CELL_TEXT.to_string(),
                    None => value.display_text(),
                };
                RenderCell {
                    column_key: column.key.clone(),
                    text,
                    align: column.align,
                }
            })
            .collect();

        RenderRow {
            index,
            key: keyed.key().clone(),
            selected: self.selection().is_selected(keyed.key()),
            cells,
        }
    }
}
