//! Application model - the complete state of the showcase grid
//!
//! This module contains the state types following the Elm Architecture pattern.

pub mod grid;

pub use grid::{position_of, CellId, CellPositions, Grid, GridError, GridMetrics, GridPosition, Rect};

use crate::config::{ConfigError, GridConfig};
use crate::panel::{LayoutError, PanelEngine};

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Configuration the grid was built from
    pub config: GridConfig,
    /// Panel engine owning open panels and cell shifts
    pub panels: PanelEngine<Grid>,
    /// Last recoverable condition reported by an update, if any
    pub last_warning: Option<LayoutError>,
}

impl AppModel {
    /// Build the grid and an empty panel engine from `config`
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let panels =
            PanelEngine::new(config.grid()?, config.metrics()).with_policy(config.same_column);
        Ok(Self {
            config,
            panels,
            last_warning: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        self.panels.positions()
    }
}
