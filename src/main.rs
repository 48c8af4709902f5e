//! grille - replays panel toggles against a showcase grid and prints the
//! resulting panel placements and cell shifts.
//!
//! Usage:
//!   grille --toggle 7 --toggle 3
//!   grille samples/scenarios/two-panels.yaml --frames --format json
//!   grille two-panels            # ~/.config/grille/scenarios/two-panels.yaml
//!   grille --init-config --row-width 32 --total-cells 1024

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;

use grille::cli::{CliArgs, OutputFormat, RunConfig, RunMode};
use grille::config::GridConfig;
use grille::config_paths;
use grille::runtime::scenario::load_scenario;
use grille::runtime::{run_scenario, Scenario, ScenarioReport, Step};

fn main() -> Result<()> {
    let run = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    grille::tracing::init();

    let mut config = match &run.config_path {
        Some(path) => GridConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GridConfig::load(),
    };
    run.overrides.apply(&mut config);

    let reports = match &run.mode {
        RunMode::InitConfig => return init_config(&config),
        RunMode::Toggles(ids) => {
            let scenario = Scenario {
                name: "command line".to_string(),
                grid: None,
                steps: ids.iter().copied().map(Step::Toggle).collect(),
            };
            vec![run_scenario(&scenario, &config)?]
        }
        RunMode::Scenarios(paths) => paths
            .iter()
            .map(|path| replay_file(path, &config))
            .collect::<Result<Vec<_>>>()?,
    };

    print!("{}", render(&run, reports)?);
    Ok(())
}

/// Write `config` as the user config file, refusing to overwrite one
fn init_config(config: &GridConfig) -> Result<()> {
    let path = config_paths::config_file().context("No config directory available")?;
    if path.exists() {
        bail!("Config already exists at {}", path.display());
    }
    config.validate()?;
    config.save().map_err(anyhow::Error::msg)?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}

fn replay_file(path: &Path, config: &GridConfig) -> Result<ScenarioReport> {
    let resolved = config_paths::resolve_scenario(path)
        .with_context(|| format!("Scenario not found: {}", path.display()))?;
    let scenario = load_scenario(&resolved)?;
    run_scenario(&scenario, config)
}

fn render(run: &RunConfig, mut reports: Vec<ScenarioReport>) -> Result<String> {
    if !run.all_frames {
        for report in &mut reports {
            let skip = report.frames.len().saturating_sub(1);
            report.frames.drain(..skip);
        }
    }

    let out = match (run.format, reports.len()) {
        (OutputFormat::Yaml, 1) => serde_yaml::to_string(&reports[0])?,
        (OutputFormat::Yaml, _) => serde_yaml::to_string(&reports)?,
        (OutputFormat::Json, 1) => serde_json::to_string_pretty(&reports[0])? + "\n",
        (OutputFormat::Json, _) => serde_json::to_string_pretty(&reports)? + "\n",
    };
    Ok(out)
}
