//! Panel placement and container shift computation
//!
//! This is the pure half of the panel engine: given the set of open cells,
//! a position provider and the grid metrics, build the panel rectangles and
//! the sparse per-cell shift map from scratch. Nothing is patched in place.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::grid::{CellId, CellPositions, GridMetrics, GridPosition};

/// On-screen placement of one open panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPlacement {
    /// Grid column of the cell the panel was opened from
    pub origin_column: u32,
    pub left: i32,
    pub top: i32,
    pub width: i32,
}

impl PanelPlacement {
    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    /// Whether the horizontal spans `[left, right)` of two panels intersect
    pub fn overlaps(&self, other: &PanelPlacement) -> bool {
        self.left < other.right() && other.left < self.right()
    }
}

/// Open panels keyed by originating cell
pub type PanelMap = BTreeMap<CellId, PanelPlacement>;

/// Horizontal displacement per cell; absent means zero
pub type ShiftMap = BTreeMap<CellId, i32>;

/// Result of one rebuild
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub panels: PanelMap,
    pub shifts: ShiftMap,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty() && self.shifts.is_empty()
    }
}

/// Resolve and sort the open cells into layout order
///
/// Unresolvable ids are dropped. Order is by column, then by cell id.
pub fn layout_order<P: CellPositions>(
    open: &BTreeSet<CellId>,
    positions: &P,
) -> Vec<(CellId, GridPosition)> {
    let mut entries: Vec<(CellId, GridPosition)> = open
        .iter()
        .filter_map(|&id| positions.position_of(id).map(|pos| (id, pos)))
        .collect();
    entries.sort_by_key(|(id, pos)| (pos.column, *id));
    entries
}

/// Top edge of a panel opened from `row`
pub fn panel_top(row: u32, metrics: &GridMetrics) -> i32 {
    let top = row as i32 * metrics.pitch() - metrics.panel_top_offset;
    if metrics.clamp_panel_top {
        top.max(0)
    } else {
        top
    }
}

/// Rebuild panel placements and cell shifts for the given open set
pub fn compute_layout<P: CellPositions>(
    open: &BTreeSet<CellId>,
    positions: &P,
    metrics: &GridMetrics,
) -> Layout {
    let mut layout = Layout::default();
    if open.is_empty() {
        return layout;
    }

    let ordered = layout_order(open, positions);
    let pitch = metrics.pitch();
    let stride = metrics.panel_stride();

    for (index, (id, pos)) in ordered.iter().enumerate() {
        let base_left = pos.column as i32 * pitch + pitch;
        let shift_amount = index as i32 * stride;
        layout.panels.insert(
            *id,
            PanelPlacement {
                origin_column: pos.column,
                left: base_left + shift_amount,
                top: panel_top(pos.row, metrics),
                width: metrics.panel_width,
            },
        );
    }

    // `ordered` is sorted by column, so a partition point gives the count of
    // panels strictly left of any column.
    let origin_columns: Vec<u32> = ordered.iter().map(|(_, pos)| pos.column).collect();
    for (id, pos) in positions.cells() {
        let panels_left = origin_columns.partition_point(|&c| c < pos.column);
        if panels_left > 0 {
            layout.shifts.insert(id, panels_left as i32 * stride);
        }
    }

    layout
}
