//! Published layout snapshots and the rendering-side view of them
//!
//! The engine hands out immutable `Arc<LayoutSnapshot>`s. Consumers keep the
//! newest one they have seen in a [`LayoutView`]; a snapshot with an older
//! revision than the one already applied belongs to a superseded rebuild and
//! is dropped.

use std::sync::Arc;

use serde::Serialize;

use super::placement::{Layout, PanelMap, PanelPlacement, ShiftMap};
use crate::model::grid::CellId;

/// Immutable result of a rebuild, tagged with the rebuild's revision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutSnapshot {
    pub revision: u64,
    pub panels: PanelMap,
    pub shifts: ShiftMap,
}

impl LayoutSnapshot {
    pub fn new(revision: u64, layout: Layout) -> Self {
        Self {
            revision,
            panels: layout.panels,
            shifts: layout.shifts,
        }
    }

    /// Horizontal shift of a cell, zero when it has none
    pub fn shift_for(&self, cell: CellId) -> i32 {
        self.shifts.get(&cell).copied().unwrap_or(0)
    }

    pub fn panel(&self, cell: CellId) -> Option<&PanelPlacement> {
        self.panels.get(&cell)
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty() && self.shifts.is_empty()
    }

    /// Same panels and shifts, ignoring the revision
    pub fn same_layout(&self, other: &LayoutSnapshot) -> bool {
        self.panels == other.panels && self.shifts == other.shifts
    }
}

/// Result of offering a snapshot to a [`LayoutView`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// Older than the snapshot already shown; discarded
    Stale { current: u64, offered: u64 },
}

/// What the rendering layer currently shows
#[derive(Debug, Clone, Default)]
pub struct LayoutView {
    current: Option<Arc<LayoutSnapshot>>,
    discarded: u64,
}

impl LayoutView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a published snapshot unless a newer one is already shown
    pub fn apply(&mut self, snapshot: Arc<LayoutSnapshot>) -> ApplyOutcome {
        if let Some(current) = &self.current {
            if snapshot.revision < current.revision {
                tracing::debug!(
                    target: "layout",
                    "Discarding stale layout: revision {} < shown revision {}",
                    snapshot.revision,
                    current.revision
                );
                self.discarded += 1;
                return ApplyOutcome::Stale {
                    current: current.revision,
                    offered: snapshot.revision,
                };
            }
        }
        self.current = Some(snapshot);
        ApplyOutcome::Applied
    }

    pub fn current(&self) -> Option<&Arc<LayoutSnapshot>> {
        self.current.as_ref()
    }

    /// Revision on screen, `None` before the first layout
    pub fn revision(&self) -> Option<u64> {
        self.current.as_ref().map(|s| s.revision)
    }

    /// Zero until a layout has been applied
    pub fn shift_for(&self, cell: CellId) -> i32 {
        self.current.as_ref().map_or(0, |s| s.shift_for(cell))
    }

    /// Number of snapshots dropped as stale
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
}
