//! Grid configuration
//!
//! Stores grid and panel constants in `~/.config/grille/config.yaml`.
//! Values are read once at construction; the engine never reloads them
//! mid-session.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::grid::{Grid, GridError, GridMetrics};
use crate::panel::ColumnPolicy;

/// Grid and panel constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Width and height of a closed cell in pixels
    #[serde(default = "default_cell_size")]
    pub cell_size: i32,
    /// Gap between cells in pixels
    #[serde(default = "default_cell_spacing")]
    pub cell_spacing: i32,
    /// Width of an open panel in pixels
    #[serde(default = "default_panel_width")]
    pub panel_width: i32,
    /// Cells per grid row
    #[serde(default = "default_row_width")]
    pub row_width: u32,
    /// Total number of cells in the grid
    #[serde(default = "default_total_cells")]
    pub total_cells: u32,
    /// Vertical bias subtracted from the source row when placing a panel
    #[serde(default = "default_panel_top_offset")]
    pub panel_top_offset: i32,
    /// Clamp panel tops to zero instead of allowing negative coordinates
    #[serde(default)]
    pub clamp_panel_top: bool,
    /// How panels from the same column coexist
    #[serde(default)]
    pub same_column: ColumnPolicy,
}

fn default_cell_size() -> i32 {
    128
}

fn default_cell_spacing() -> i32 {
    4
}

fn default_panel_width() -> i32 {
    392
}

fn default_row_width() -> u32 {
    5
}

fn default_total_cells() -> u32 {
    25
}

fn default_panel_top_offset() -> i32 {
    64
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            cell_spacing: default_cell_spacing(),
            panel_width: default_panel_width(),
            row_width: default_row_width(),
            total_cells: default_total_cells(),
            panel_top_offset: default_panel_top_offset(),
            clamp_panel_top: false,
            same_column: ColumnPolicy::default(),
        }
    }
}

/// Errors that can occur when loading or validating a config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}

impl GridConfig {
    /// Load config from disk, or return defaults if not found or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML content
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: GridConfig =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Reject values the layout arithmetic cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_width == 0 {
            return Err(GridError::ZeroRowWidth.into());
        }
        if self.total_cells == 0 {
            return Err(ConfigError::Invalid("total_cells must be at least 1".into()));
        }
        if self.cell_size <= 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".into()));
        }
        if self.panel_width <= 0 {
            return Err(ConfigError::Invalid("panel_width must be positive".into()));
        }
        if self.cell_spacing < 0 {
            return Err(ConfigError::Invalid(
                "cell_spacing must not be negative".into(),
            ));
        }
        self.check_extent()
    }

    /// Every pixel coordinate the layout can produce must fit in `i32`
    ///
    /// The furthest right edge is a panel from the last column preceded by
    /// every other panel: `row_width * pitch + total_cells * stride`. The
    /// furthest vertical edge is `rows * pitch` moved by the top offset.
    fn check_extent(&self) -> Result<(), ConfigError> {
        let spacing = i64::from(self.cell_spacing);
        let pitch = i64::from(self.cell_size) + spacing;
        let stride = i64::from(self.panel_width) + spacing;
        let rows = i64::from(self.total_cells.div_ceil(self.row_width));

        let right = i64::from(self.row_width) * pitch + i64::from(self.total_cells) * stride;
        let bottom = rows * pitch + i64::from(self.panel_top_offset.unsigned_abs());

        let max = i64::from(i32::MAX);
        if right > max {
            return Err(ConfigError::Invalid(format!(
                "grid is too wide: rightmost edge {} exceeds {}",
                right, max
            )));
        }
        if bottom > max {
            return Err(ConfigError::Invalid(format!(
                "grid is too tall: bottom edge {} exceeds {}",
                bottom, max
            )));
        }
        Ok(())
    }

    /// The grid described by this config
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.row_width, self.total_cells)?)
    }

    /// Pixel constants for the panel engine
    pub fn metrics(&self) -> GridMetrics {
        GridMetrics {
            cell_size: self.cell_size,
            cell_spacing: self.cell_spacing,
            panel_width: self.panel_width,
            panel_top_offset: self.panel_top_offset,
            clamp_panel_top: self.clamp_panel_top,
        }
    }
}
