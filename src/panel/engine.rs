//! Panel engine - exclusive owner of the open panel set
//!
//! Every open/close goes through a full rebuild: the target set is computed,
//! fresh panel and shift maps are built from it, and the result is swapped in
//! as one new [`LayoutSnapshot`]. Observers only ever see complete snapshots.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::placement::{compute_layout, PanelPlacement};
use super::snapshot::LayoutSnapshot;
use crate::model::grid::{CellId, CellPositions, Grid, GridMetrics, GridPosition, Rect};

/// How panels opened from the same grid column coexist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnPolicy {
    /// Same-column panels stay open side by side, ordered by cell id
    #[default]
    Stack,
    /// Opening a panel closes any other panel from the same column
    Exclusive,
}

/// What a panel operation did to the open set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Opened,
    Closed,
    /// Nothing to do (already open / already closed)
    Unchanged,
}

/// Result of a panel operation
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub action: PanelAction,
    pub snapshot: Arc<LayoutSnapshot>,
}

/// Recoverable conditions reported by the panel engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The cell has no grid position; the request was ignored
    UnresolvableCell(CellId),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnresolvableCell(cell) => {
                write!(f, "cell {} has no grid position", cell)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Owns the open panel set and the derived container shifts
#[derive(Debug, Clone)]
pub struct PanelEngine<P: CellPositions = Grid> {
    positions: P,
    metrics: GridMetrics,
    policy: ColumnPolicy,
    snapshot: Arc<LayoutSnapshot>,
    revision: u64,
}

impl<P: CellPositions> PanelEngine<P> {
    pub fn new(positions: P, metrics: GridMetrics) -> Self {
        Self {
            positions,
            metrics,
            policy: ColumnPolicy::default(),
            snapshot: Arc::new(LayoutSnapshot::default()),
            revision: 0,
        }
    }

    pub fn with_policy(mut self, policy: ColumnPolicy) -> Self {
        self.policy = policy;
        self
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Open the panel for `cell` if it is closed, close it if it is open
    ///
    /// Closing never needs a grid position, so a cell withdrawn from the
    /// provider since it was opened can still be closed.
    pub fn toggle_panel(&mut self, cell: CellId) -> Result<ToggleOutcome, LayoutError> {
        if self.is_open(cell) {
            Ok(self.close_open_panel(cell))
        } else {
            self.open_resolved(cell)
        }
    }

    /// Open the panel for `cell`; no-op if it is already open
    pub fn open_panel(&mut self, cell: CellId) -> Result<ToggleOutcome, LayoutError> {
        if self.is_open(cell) {
            return Ok(self.unchanged());
        }
        self.open_resolved(cell)
    }

    /// Close the panel for `cell`; no-op if it is not open
    pub fn close_panel(&mut self, cell: CellId) -> ToggleOutcome {
        if !self.is_open(cell) {
            return self.unchanged();
        }
        self.close_open_panel(cell)
    }

    /// Close every open panel
    pub fn close_all(&mut self) -> ToggleOutcome {
        if self.snapshot.panels.is_empty() {
            return self.unchanged();
        }
        ToggleOutcome {
            action: PanelAction::Closed,
            snapshot: self.commit(BTreeSet::new()),
        }
    }

    /// Recompute the layout for the current open set
    ///
    /// Produces maps identical to the current ones unless the position
    /// provider changed underneath; the revision advances either way.
    pub fn rebuild(&mut self) -> Arc<LayoutSnapshot> {
        let target = self.open_set();
        self.commit(target)
    }

    fn open_resolved(&mut self, cell: CellId) -> Result<ToggleOutcome, LayoutError> {
        let Some(pos) = self.positions.position_of(cell) else {
            tracing::debug!("Ignoring panel toggle for unresolvable cell {}", cell);
            return Err(LayoutError::UnresolvableCell(cell));
        };

        let mut target = self.open_set();
        if self.policy == ColumnPolicy::Exclusive {
            target.retain(|id| {
                self.snapshot
                    .panels
                    .get(id)
                    .map_or(true, |p| p.origin_column != pos.column)
            });
        }
        target.insert(cell);

        Ok(ToggleOutcome {
            action: PanelAction::Opened,
            snapshot: self.commit(target),
        })
    }

    fn close_open_panel(&mut self, cell: CellId) -> ToggleOutcome {
        let mut target = self.open_set();
        target.remove(&cell);
        ToggleOutcome {
            action: PanelAction::Closed,
            snapshot: self.commit(target),
        }
    }

    fn unchanged(&self) -> ToggleOutcome {
        ToggleOutcome {
            action: PanelAction::Unchanged,
            snapshot: Arc::clone(&self.snapshot),
        }
    }

    /// Build a fresh layout for `target` and publish it as the new snapshot
    fn commit(&mut self, target: BTreeSet<CellId>) -> Arc<LayoutSnapshot> {
        let layout = compute_layout(&target, &self.positions, &self.metrics);

        if layout.panels.len() != target.len() {
            let dropped: Vec<CellId> = target
                .iter()
                .filter(|id| !layout.panels.contains_key(id))
                .copied()
                .collect();
            tracing::warn!("Dropped panels for cells without a position: {:?}", dropped);
        }

        self.revision += 1;
        let snapshot = Arc::new(LayoutSnapshot::new(self.revision, layout));
        self.snapshot = Arc::clone(&snapshot);

        tracing::debug!(
            target: "layout",
            revision = self.revision,
            panels = snapshot.panels.len(),
            shifted_cells = snapshot.shifts.len(),
            "rebuilt panel layout"
        );

        self.assert_invariants();
        snapshot
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Horizontal shift of `cell`; zero when it has none
    pub fn shift_for(&self, cell: CellId) -> i32 {
        self.snapshot.shift_for(cell)
    }

    pub fn placement(&self, cell: CellId) -> Option<&PanelPlacement> {
        self.snapshot.panel(cell)
    }

    pub fn is_open(&self, cell: CellId) -> bool {
        self.snapshot.panels.contains_key(&cell)
    }

    /// Number of open panels
    pub fn open_count(&self) -> usize {
        self.snapshot.panels.len()
    }

    /// Open cells in layout order (column, then id)
    pub fn open_cells(&self) -> Vec<CellId> {
        let mut cells: Vec<(u32, CellId)> = self
            .snapshot
            .panels
            .iter()
            .map(|(id, p)| (p.origin_column, *id))
            .collect();
        cells.sort_unstable();
        cells.into_iter().map(|(_, id)| id).collect()
    }

    fn open_set(&self) -> BTreeSet<CellId> {
        self.snapshot.panels.keys().copied().collect()
    }

    /// The most recently published snapshot
    pub fn snapshot(&self) -> Arc<LayoutSnapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    pub fn policy(&self) -> ColumnPolicy {
        self.policy
    }

    pub fn positions(&self) -> &P {
        &self.positions
    }

    /// Mutable access to the position provider
    ///
    /// Changes take effect at the next rebuild.
    pub fn positions_mut(&mut self) -> &mut P {
        &mut self.positions
    }

    pub fn position_of(&self, cell: CellId) -> Option<GridPosition> {
        self.positions.position_of(cell)
    }

    /// On-screen rectangle of a cell with its shift applied
    pub fn cell_rect(&self, cell: CellId) -> Option<Rect> {
        self.positions
            .position_of(cell)
            .map(|pos| self.metrics.cell_rect(pos).shifted_x(self.shift_for(cell)))
    }

    /// Horizontal extent of the shifted grid and every open panel
    pub fn content_width(&self) -> i32 {
        let cells_right = self
            .positions
            .cells()
            .map(|(id, pos)| self.metrics.cell_rect(pos).right() + self.shift_for(id))
            .max()
            .unwrap_or(0);
        let panels_right = self
            .snapshot
            .panels
            .values()
            .map(PanelPlacement::right)
            .max()
            .unwrap_or(0);
        cells_right.max(panels_right)
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    /// Check placement invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let ordered: Vec<&PanelPlacement> = self
            .open_cells()
            .iter()
            .filter_map(|id| self.snapshot.panels.get(id))
            .collect();
        for pair in ordered.windows(2) {
            debug_assert!(
                pair[0].origin_column <= pair[1].origin_column,
                "Panels must be ordered by origin column"
            );
            debug_assert!(
                pair[0].right() <= pair[1].left,
                "Panels must not overlap: {:?} / {:?}",
                pair[0],
                pair[1]
            );
        }
        let stride = self.metrics.panel_stride();
        for (id, shift) in &self.snapshot.shifts {
            debug_assert!(*shift > 0, "Shift map must stay sparse ({} -> {})", id, shift);
            debug_assert!(
                stride == 0 || shift % stride == 0,
                "Shift of {} must be a whole number of panels",
                id
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
