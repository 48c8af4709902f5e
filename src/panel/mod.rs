//! Panel system - side panels opened beside grid cells
//!
//! Opening a cell's panel places a fixed-width surface immediately to the
//! right of the cell and pushes every cell in a later column out of the way.
//!
//! ## Architecture
//!
//! - `placement`: pure rebuild (`compute_layout`) from an open set to panel
//!   rectangles and the sparse container shift map
//! - `engine`: `PanelEngine`, the exclusive owner of the open set; every
//!   toggle is a full rebuild published as a new snapshot
//! - `snapshot`: `LayoutSnapshot` and the rendering-side `LayoutView`,
//!   which drops snapshots from superseded rebuilds
//!
//! ## Integration
//!
//! The engine is driven through `Msg::Panel` in `update/panel.rs`, which
//! turns every rebuild into a `Cmd::PublishLayout` for the runtime.

mod engine;
mod placement;
mod snapshot;

pub use engine::{ColumnPolicy, LayoutError, PanelAction, PanelEngine, ToggleOutcome};
pub use placement::{
    compute_layout, layout_order, panel_top, Layout, PanelMap, PanelPlacement, ShiftMap,
};
pub use snapshot::{ApplyOutcome, LayoutSnapshot, LayoutView};
