//! Property-based invariant tests for panel placement.
//!
//! Random toggle sequences (including ids outside the grid) are replayed
//! through `update` and the resulting layout is checked for:
//!
//! 1. No two panels overlap.
//! 2. Panels are ordered left to right by origin column.
//! 3. Rebuilding the same open set gives the same maps.
//! 4. Shifts never decrease from one column to the next within a row.
//! 5. No open panels means empty maps.
//! 6. Opening then closing a panel restores the previous maps.

mod common;

use common::{test_model, toggle};
use grille::messages::PanelMsg;
use grille::model::{AppModel, CellId};
use grille::panel::PanelPlacement;
use grille::update::update;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn grid_strategy() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=12, 1u32..=144)
}

/// Toggle ids biased towards valid cells, with some out-of-range noise
fn toggles_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(prop_oneof![8 => 0i64..144, 1 => -4i64..0, 1 => 144i64..200], 0..40)
}

fn replay(row_width: u32, total_cells: u32, ids: &[i64]) -> AppModel {
    let mut model = test_model(row_width, total_cells);
    for &id in ids {
        toggle(&mut model, id);
    }
    model
}

fn ordered_panels(model: &AppModel) -> Vec<PanelPlacement> {
    let snapshot = model.panels.snapshot();
    model
        .panels
        .open_cells()
        .iter()
        .map(|id| snapshot.panels[id])
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. No overlap, left-to-right order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn panels_never_overlap((w, n) in grid_strategy(), ids in toggles_strategy()) {
        let model = replay(w, n, &ids);
        let panels = ordered_panels(&model);
        for (i, a) in panels.iter().enumerate() {
            for b in &panels[i + 1..] {
                prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn panels_ordered_by_column((w, n) in grid_strategy(), ids in toggles_strategy()) {
        let model = replay(w, n, &ids);
        let panels = ordered_panels(&model);
        for pair in panels.windows(2) {
            prop_assert!(pair[0].origin_column <= pair[1].origin_column);
            prop_assert!(pair[0].left < pair[1].left);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Idempotent rebuild
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rebuild_is_idempotent((w, n) in grid_strategy(), ids in toggles_strategy()) {
        let mut model = replay(w, n, &ids);
        let before = model.panels.snapshot();
        update(&mut model, PanelMsg::Rebuild.into());
        update(&mut model, PanelMsg::Rebuild.into());
        let after = model.panels.snapshot();
        prop_assert_eq!(&before.panels, &after.panels);
        prop_assert_eq!(&before.shifts, &after.shifts);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Shift monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shifts_monotonic_within_row((w, n) in grid_strategy(), ids in toggles_strategy()) {
        let model = replay(w, n, &ids);
        let grid = *model.grid();
        for row in 0..grid.rows() {
            let shifts: Vec<i32> = (0..w)
                .map(|column| i64::from(row * w + column))
                .filter(|&id| id < i64::from(n))
                .map(|id| model.panels.shift_for(CellId(id)))
                .collect();
            for pair in shifts.windows(2) {
                prop_assert!(pair[0] <= pair[1], "row {} shifts {:?}", row, shifts);
            }
        }
    }

    #[test]
    fn shift_counts_panels_in_earlier_columns((w, n) in grid_strategy(), ids in toggles_strategy()) {
        let model = replay(w, n, &ids);
        let snapshot = model.panels.snapshot();
        let stride = model.panels.metrics().panel_stride();
        for id in 0..i64::from(n) {
            let column = model.grid().position_of(CellId(id)).map(|p| p.column);
            let expected = snapshot
                .panels
                .values()
                .filter(|p| Some(p.origin_column) < column)
                .count() as i32
                * stride;
            prop_assert_eq!(model.panels.shift_for(CellId(id)), expected);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Empty on empty
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn closing_everything_empties_maps((w, n) in grid_strategy(), ids in toggles_strategy()) {
        let mut model = replay(w, n, &ids);
        for id in model.panels.open_cells() {
            toggle(&mut model, id.0);
        }
        let snapshot = model.panels.snapshot();
        prop_assert!(snapshot.panels.is_empty());
        prop_assert!(snapshot.shifts.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn open_then_close_round_trips(
        (w, n) in grid_strategy(),
        ids in toggles_strategy(),
        extra in 0i64..144,
    ) {
        let mut model = replay(w, n, &ids);
        prop_assume!(extra < i64::from(n));
        prop_assume!(!model.panels.is_open(CellId(extra)));

        let before = model.panels.snapshot();
        toggle(&mut model, extra);
        prop_assert!(model.panels.is_open(CellId(extra)));
        toggle(&mut model, extra);
        let after = model.panels.snapshot();

        prop_assert!(before.same_layout(&after));
    }
}
