//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging panel
//! placement and layout transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=grille::panel=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/grille/logs/grille.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{CellId, CellPositions};
use crate::panel::{LayoutSnapshot, PanelEngine};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so snapshot output on stdout stays clean.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "grille.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight summary of the panel layout for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSummary {
    pub revision: u64,
    /// Open cells in layout order
    pub open: Vec<CellId>,
    pub shifted_cells: usize,
}

impl LayoutSummary {
    pub fn from_engine<P: CellPositions>(engine: &PanelEngine<P>) -> Self {
        Self {
            revision: engine.revision(),
            open: engine.open_cells(),
            shifted_cells: engine.snapshot().shifts.len(),
        }
    }

    pub fn from_snapshot(snapshot: &LayoutSnapshot) -> Self {
        let mut open: Vec<(u32, CellId)> = snapshot
            .panels
            .iter()
            .map(|(id, p)| (p.origin_column, *id))
            .collect();
        open.sort_unstable();
        Self {
            revision: snapshot.revision,
            open: open.into_iter().map(|(_, id)| id).collect(),
            shifted_cells: snapshot.shifts.len(),
        }
    }

    /// Generate a diff description between two summaries
    pub fn diff(&self, other: &LayoutSummary) -> Option<String> {
        let mut changes = Vec::new();

        if self.revision != other.revision {
            changes.push(format!("rev {} → {}", self.revision, other.revision));
        }

        let opened: Vec<String> = other
            .open
            .iter()
            .filter(|id| !self.open.contains(id))
            .map(|id| id.to_string())
            .collect();
        let closed: Vec<String> = self
            .open
            .iter()
            .filter(|id| !other.open.contains(id))
            .map(|id| id.to_string())
            .collect();
        if !opened.is_empty() {
            changes.push(format!("opened {}", opened.join(",")));
        }
        if !closed.is_empty() {
            changes.push(format!("closed {}", closed.join(",")));
        }

        if self.shifted_cells != other.shifted_cells {
            changes.push(format!(
                "shifted cells: {} → {}",
                self.shifted_cells, other.shifted_cells
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
