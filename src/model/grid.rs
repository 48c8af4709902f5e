//! Grid position resolver
//!
//! Maps cell identifiers to their `(column, row)` slot in the fixed showcase
//! grid and back, and turns grid slots into pixel rectangles.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a grid cell
///
/// Signed so that out-of-range input from the UI (e.g. `-1`) can be
/// represented and reported instead of silently wrapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CellId(pub i64);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<i64> for CellId {
    fn from(id: i64) -> Self {
        CellId(id)
    }
}

/// Column/row slot of a cell in the grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct GridPosition {
    pub column: u32,
    pub row: u32,
}

impl GridPosition {
    pub fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// Resolve a linear cell index into its grid slot
///
/// `row_width` must be non-zero; [`Grid::new`] enforces this for grid-backed
/// lookups.
#[inline]
pub fn position_of(index: u32, row_width: u32) -> GridPosition {
    GridPosition {
        column: index % row_width,
        row: index / row_width,
    }
}

// ============================================================================
// Pixel geometry
// ============================================================================

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Move horizontally by `dx` pixels
    pub fn shifted_x(self, dx: i32) -> Self {
        Self {
            x: self.x + dx,
            ..self
        }
    }
}

/// Pixel constants of the grid and its side panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    /// Width and height of a closed cell
    pub cell_size: i32,
    /// Gap between neighbouring cells
    pub cell_spacing: i32,
    /// Fixed width of an open panel
    pub panel_width: i32,
    /// Vertical bias subtracted from the source row's top edge
    pub panel_top_offset: i32,
    /// Clamp panel tops to zero instead of allowing negative coordinates
    pub clamp_panel_top: bool,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            cell_size: 128,
            cell_spacing: 4,
            panel_width: 392,
            panel_top_offset: 64,
            clamp_panel_top: false,
        }
    }
}

impl GridMetrics {
    /// Distance between the left edges of two adjacent cells
    #[inline]
    pub fn pitch(&self) -> i32 {
        self.cell_size + self.cell_spacing
    }

    /// Horizontal space reserved by one open panel, gap included
    #[inline]
    pub fn panel_stride(&self) -> i32 {
        self.panel_width + self.cell_spacing
    }

    /// Unshifted rectangle of the cell at `pos`
    pub fn cell_rect(&self, pos: GridPosition) -> Rect {
        Rect::new(
            pos.column as i32 * self.pitch(),
            pos.row as i32 * self.pitch(),
            self.cell_size,
            self.cell_size,
        )
    }
}

// ============================================================================
// Position providers
// ============================================================================

/// Source of cell positions consumed by the panel engine
///
/// A provider answers "where is this cell?" and can enumerate every cell that
/// currently has a slot. Cells without a slot are unresolvable.
pub trait CellPositions {
    fn position_of(&self, cell: CellId) -> Option<GridPosition>;

    /// Every positioned cell, in ascending id order
    fn cells(&self) -> impl Iterator<Item = (CellId, GridPosition)> + '_;
}

/// Errors from constructing a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    ZeroRowWidth,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroRowWidth => write!(f, "grid row width must be at least 1"),
        }
    }
}

impl std::error::Error for GridError {}

/// The fixed showcase grid: cells `0..total_cells`, laid out row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    row_width: u32,
    total_cells: u32,
}

impl Grid {
    pub fn new(row_width: u32, total_cells: u32) -> Result<Self, GridError> {
        if row_width == 0 {
            return Err(GridError::ZeroRowWidth);
        }
        Ok(Self {
            row_width,
            total_cells,
        })
    }

    pub fn row_width(&self) -> u32 {
        self.row_width
    }

    pub fn total_cells(&self) -> u32 {
        self.total_cells
    }

    /// Number of rows, counting a partially filled last row
    pub fn rows(&self) -> u32 {
        self.total_cells.div_ceil(self.row_width)
    }

    pub fn contains(&self, cell: CellId) -> bool {
        (0..i64::from(self.total_cells)).contains(&cell.0)
    }

    /// Resolve a cell id, or `None` if it is outside the grid
    pub fn position_of(&self, cell: CellId) -> Option<GridPosition> {
        if !self.contains(cell) {
            return None;
        }
        Some(position_of(cell.0 as u32, self.row_width))
    }

    /// Reverse lookup: which cell occupies `pos`
    pub fn cell_at(&self, pos: GridPosition) -> Option<CellId> {
        if pos.column >= self.row_width {
            return None;
        }
        let index = u64::from(pos.row) * u64::from(self.row_width) + u64::from(pos.column);
        (index < u64::from(self.total_cells)).then_some(CellId(index as i64))
    }
}

impl CellPositions for Grid {
    fn position_of(&self, cell: CellId) -> Option<GridPosition> {
        Grid::position_of(self, cell)
    }

    fn cells(&self) -> impl Iterator<Item = (CellId, GridPosition)> + '_ {
        let row_width = self.row_width;
        (0..self.total_cells).map(move |i| (CellId(i64::from(i)), position_of(i, row_width)))
    }
}

/// Explicit assignment table; cells can be withdrawn at any time
impl CellPositions for BTreeMap<CellId, GridPosition> {
    fn position_of(&self, cell: CellId) -> Option<GridPosition> {
        self.get(&cell).copied()
    }

    fn cells(&self) -> impl Iterator<Item = (CellId, GridPosition)> + '_ {
        self.iter().map(|(id, pos)| (*id, *pos))
    }
}
