use vgrid_core::{RowKey, Selection};

fn key(id: &str) -> RowKey {
    RowKey::Id(id.to_string())
}

// ============================================================================
// Single-select mode
// ============================================================================

#[test]
fn test_single_toggle_replaces_previous() {
    let mut selection: Selection<RowKey> = Selection::single();
    selection.toggle(key("r1"));
    selection.toggle(key("r2"));

    assert!(!selection.is_selected(&key("r1")));
    assert!(selection.is_selected(&key("r2")));
    assert_eq!(selection.len(), 1);
}

#[test]
fn test_single_toggle_twice_clears() {
    let mut selection: Selection<RowKey> = Selection::single();
    selection.toggle(key("r1"));
    selection.toggle(key("r1"));

    assert!(selection.is_empty());
}

#[test]
fn test_single_ignores_select_all() {
    let mut selection: Selection<RowKey> = Selection::single();
    let all = vec![key("r1"), key("r2")];
    assert!(!selection.select_all(&all));
    assert!(selection.is_empty());
}

// ============================================================================
// Multi-select mode
// ============================================================================

#[test]
fn test_multi_toggle_is_independent() {
    let mut selection: Selection<RowKey> = Selection::multi();
    selection.toggle(key("r1"));
    selection.toggle(key("r2"));
    selection.toggle(key("r1"));

    assert!(!selection.is_selected(&key("r1")));
    assert!(selection.is_selected(&key("r2")));
}

#[test]
fn test_select_all_and_clear() {
    let mut selection: Selection<RowKey> = Selection::multi();
    let all = vec![key("r1"), key("r2"), key("r3")];

    assert!(selection.select_all(&all));
    assert!(selection.is_all_selected(&all));

    // A second select-all adds nothing.
    assert!(!selection.select_all(&all));

    assert!(selection.clear());
    assert!(selection.is_empty());
    assert!(!selection.clear());
}

// ============================================================================
// Disabled mode
// ============================================================================

#[test]
fn test_none_mode_rejects_everything() {
    let mut selection: Selection<RowKey> = Selection::none();
    assert!(!selection.toggle(key("r1")));
    assert!(selection.is_empty());
}

// ============================================================================
// Tri-state derivation
// ============================================================================

#[test]
fn test_indeterminate_is_proper_subset() {
    let mut selection: Selection<RowKey> = Selection::multi();
    let all = vec![key("r1"), key("r2"), key("r3")];

    assert!(!selection.is_indeterminate(&all));

    selection.toggle(key("r2"));
    assert!(selection.is_indeterminate(&all));

    selection.select_all(&all);
    assert!(!selection.is_indeterminate(&all));
    assert!(selection.is_all_selected(&all));
}

#[test]
fn test_stale_keys_do_not_skew_tristate() {
    let mut selection: Selection<RowKey> = Selection::multi();
    selection.toggle(key("hidden"));

    // "hidden" was filtered out of view; the visible set is fully selected.
    let visible = vec![key("r1"), key("r2")];
    selection.select_all(&visible);

    assert!(selection.is_all_selected(&visible));
    assert!(!selection.is_indeterminate(&visible));
    // The stale key is retained, not silently dropped.
    assert!(selection.is_selected(&key("hidden")));
}

#[test]
fn test_snapshot_is_sorted_copy() {
    let mut selection: Selection<RowKey> = Selection::multi();
    selection.toggle(key("b"));
    selection.toggle(key("a"));

    let snapshot = selection.snapshot();
    assert_eq!(snapshot, vec![key("a"), key("b")]);

    // Mutating after the snapshot does not alias into it.
    selection.clear();
    assert_eq!(snapshot.len(), 2);
}
