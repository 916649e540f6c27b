//! Viewport window calculation for virtualized rendering.
//!
//! Pure math: scroll position in, index range out. The renderer only
//! materializes rows inside the range and reserves the remaining height as
//! spacer pixels so the scrollbar behaves as if every row existed.

/// Inclusive range of row indices eligible for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    /// First rendered index.
    pub start: usize,
    /// Last rendered index (inclusive).
    pub end: usize,
}

impl VisibleRange {
    /// Number of rows in the range.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Ranges are never empty; present for clippy symmetry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether an index falls inside the range.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}

/// Compute the renderable index range for the current scroll position.
///
/// `start` is the first visible index minus `overscan`, clamped to zero.
/// `end` extends one viewport of rows plus `overscan` past the unclamped
/// start, clamped to the last index. Returns `None` when there are no rows
/// or the row height is zero.
pub fn compute_visible_range(
    scroll_offset: u32,
    row_height: u32,
    container_height: u32,
    overscan: usize,
    total: usize,
) -> Option<VisibleRange> {
    if total == 0 || row_height == 0 {
        return None;
    }

    let first_visible = (scroll_offset / row_height) as i64;
    let span = container_height.div_ceil(row_height) as i64;
    let overscan = overscan as i64;
    let last_index = (total - 1) as i64;

    let start_raw = first_visible - overscan;
    let start = start_raw.max(0).min(last_index);
    let end = (start_raw + span + overscan).clamp(start, last_index);

    Some(VisibleRange {
        start: start as usize,
        end: end as usize,
    })
}

/// Pixel height of the spacer above the rendered window.
pub fn top_spacer_px(range: &VisibleRange, row_height: u32) -> u64 {
    range.start as u64 * row_height as u64
}

/// Pixel height of the spacer below the rendered window.
pub fn bottom_spacer_px(range: &VisibleRange, row_height: u32, total: usize) -> u64 {
    (total as u64).saturating_sub(range.end as u64 + 1) * row_height as u64
}

/// Total scrollable height as if every row were rendered.
pub fn total_height_px(total: usize, row_height: u32) -> u64 {
    total as u64 * row_height as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacers_account_for_every_row() {
        let range = compute_visible_range(500, 50, 400, 2, 100).unwrap();
        let rendered = range.len() as u64 * 50;
        let top = top_spacer_px(&range, 50);
        let bottom = bottom_spacer_px(&range, 50, 100);
        assert_eq!(top + rendered + bottom, total_height_px(100, 50));
    }
}
