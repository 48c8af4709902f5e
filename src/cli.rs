//! Command-line argument parsing for the grille runner
//!
//! Supports:
//! - Replaying YAML scenario files (by path or by name from the scenarios dir)
//! - Toggling cells given on the command line
//! - Grid size overrides and YAML/JSON output

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::runtime::GridOverrides;

/// Panel placement and container shift engine for showcase grids
#[derive(Parser, Debug)]
#[command(
    name = "grille",
    version,
    about = "Computes panel placements and cell shifts for a showcase grid"
)]
pub struct CliArgs {
    /// Scenario files to replay (a path, or a name in the scenarios directory)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Read grid settings from FILE instead of the user config
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Toggle the panel of cell ID (repeatable, comma-separated allowed)
    #[arg(
        short = 't',
        long = "toggle",
        value_name = "ID",
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub toggles: Vec<i64>,

    /// Cells per grid row
    #[arg(long, value_name = "N")]
    pub row_width: Option<u32>,

    /// Total number of cells
    #[arg(long, value_name = "N")]
    pub total_cells: Option<u32>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Print the layout after every step, not just the final one
    #[arg(long)]
    pub frames: bool,

    /// Write the default config to the user config file and exit
    #[arg(long)]
    pub init_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// What to run
#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    /// Toggle the given cells in order
    Toggles(Vec<i64>),
    /// Replay each scenario file
    Scenarios(Vec<PathBuf>),
    /// Write a default config file
    InitConfig,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: RunMode,
    /// Explicit config file; errors loading it are fatal
    pub config_path: Option<PathBuf>,
    /// Command-line grid overrides, applied after the config file
    pub overrides: GridOverrides,
    pub format: OutputFormat,
    pub all_frames: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        if self.init_config && (!self.paths.is_empty() || !self.toggles.is_empty()) {
            return Err("--init-config takes no scenarios or toggles".to_string());
        }
        if !self.paths.is_empty() && !self.toggles.is_empty() {
            return Err("Cannot combine --toggle with scenario files".to_string());
        }
        if self.row_width == Some(0) {
            return Err("--row-width must be at least 1".to_string());
        }
        if self.total_cells == Some(0) {
            return Err("--total-cells must be at least 1".to_string());
        }

        let mode = if self.init_config {
            RunMode::InitConfig
        } else if self.paths.is_empty() {
            RunMode::Toggles(self.toggles)
        } else {
            RunMode::Scenarios(self.paths)
        };

        Ok(RunConfig {
            mode,
            config_path: self.config,
            overrides: GridOverrides {
                row_width: self.row_width,
                total_cells: self.total_cells,
                ..GridOverrides::default()
            },
            format: self.format,
            all_frames: self.frames,
        })
    }
}
