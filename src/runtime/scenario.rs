//! YAML toggle scenarios
//!
//! A scenario names a grid (optional overrides on top of the loaded config)
//! and a list of steps. Each step is dispatched through a [`Runtime`] and the
//! layout the view shows afterwards is recorded as a [`Frame`].
//!
//! ```yaml
//! name: two panels
//! grid: { row_width: 5, total_cells: 25 }
//! steps:
//!   - toggle: 7
//!   - open: 3
//!   - close: 7
//!   - close_all
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Runtime;
use crate::commands::Cmd;
use crate::config::GridConfig;
use crate::messages::{Msg, PanelMsg};
use crate::model::{AppModel, CellId};
use crate::panel::{ColumnPolicy, PanelMap, ShiftMap};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub grid: Option<GridOverrides>,
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

fn default_name() -> String {
    "scenario".to_string()
}

/// Per-scenario replacements for config values
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GridOverrides {
    #[serde(default)]
    pub cell_size: Option<i32>,
    #[serde(default)]
    pub cell_spacing: Option<i32>,
    #[serde(default)]
    pub panel_width: Option<i32>,
    #[serde(default)]
    pub row_width: Option<u32>,
    #[serde(default)]
    pub total_cells: Option<u32>,
    #[serde(default)]
    pub panel_top_offset: Option<i32>,
    #[serde(default)]
    pub clamp_panel_top: Option<bool>,
    #[serde(default)]
    pub same_column: Option<ColumnPolicy>,
}

impl GridOverrides {
    pub fn apply(&self, config: &mut GridConfig) {
        if let Some(v) = self.cell_size {
            config.cell_size = v;
        }
        if let Some(v) = self.cell_spacing {
            config.cell_spacing = v;
        }
        if let Some(v) = self.panel_width {
            config.panel_width = v;
        }
        if let Some(v) = self.row_width {
            config.row_width = v;
        }
        if let Some(v) = self.total_cells {
            config.total_cells = v;
        }
        if let Some(v) = self.panel_top_offset {
            config.panel_top_offset = v;
        }
        if let Some(v) = self.clamp_panel_top {
            config.clamp_panel_top = v;
        }
        if let Some(v) = self.same_column {
            config.same_column = v;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Toggle(i64),
    Open(i64),
    Close(i64),
    CloseAll,
    Rebuild,
}

impl Step {
    pub fn to_msg(self) -> Msg {
        let msg = match self {
            Step::Toggle(id) => PanelMsg::Toggle(CellId(id)),
            Step::Open(id) => PanelMsg::Open(CellId(id)),
            Step::Close(id) => PanelMsg::Close(CellId(id)),
            Step::CloseAll => PanelMsg::CloseAll,
            Step::Rebuild => PanelMsg::Rebuild,
        };
        msg.into()
    }

    fn label(self) -> String {
        match self {
            Step::Toggle(id) => format!("toggle {}", id),
            Step::Open(id) => format!("open {}", id),
            Step::Close(id) => format!("close {}", id),
            Step::CloseAll => "close_all".to_string(),
            Step::Rebuild => "rebuild".to_string(),
        }
    }
}

/// Layout shown after one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub step: String,
    /// Revision on screen; zero before the first published layout
    pub revision: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub panels: PanelMap,
    pub shifts: ShiftMap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub frames: Vec<Frame>,
}

impl ScenarioReport {
    /// The last frame, i.e. the final layout
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario {}", path.display()))?;
    parse_scenario(&content).with_context(|| format!("Invalid scenario {}", path.display()))
}

pub fn parse_scenario(content: &str) -> Result<Scenario> {
    Ok(serde_yaml::from_str(content)?)
}

/// Replay `scenario` on a fresh model built from `base` plus its overrides
pub fn run_scenario(scenario: &Scenario, base: &GridConfig) -> Result<ScenarioReport> {
    let mut config = base.clone();
    if let Some(overrides) = &scenario.grid {
        overrides.apply(&mut config);
    }
    let model = AppModel::new(config)
        .with_context(|| format!("Scenario '{}' describes an invalid grid", scenario.name))?;
    let mut runtime = Runtime::new(model);

    tracing::info!(
        "Running scenario '{}' ({} steps)",
        scenario.name,
        scenario.steps.len()
    );

    let frames = scenario
        .steps
        .iter()
        .map(|step| {
            let cmd = runtime.dispatch(step.to_msg());
            let warning = cmd
                .as_ref()
                .and_then(Cmd::warning)
                .map(|w| w.to_string());
            frame(&runtime, step.label(), warning)
        })
        .collect();

    Ok(ScenarioReport {
        name: scenario.name.clone(),
        frames,
    })
}

fn frame(runtime: &Runtime, step: String, warning: Option<String>) -> Frame {
    match runtime.view.current() {
        Some(snapshot) => Frame {
            step,
            revision: snapshot.revision,
            warning,
            panels: snapshot.panels.clone(),
            shifts: snapshot.shifts.clone(),
        },
        None => Frame {
            step,
            revision: 0,
            warning,
            panels: PanelMap::new(),
            shifts: ShiftMap::new(),
        },
    }
}
