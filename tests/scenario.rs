//! Runtime and scenario replay tests

mod common;

use std::path::PathBuf;

use common::default_model;
use grille::config::GridConfig;
use grille::messages::PanelMsg;
use grille::model::CellId;
use grille::runtime::scenario::load_scenario;
use grille::runtime::{run_scenario, Runtime, Step};

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join("scenarios")
        .join(name)
}

// ========================================================================
// Runtime
// ========================================================================

#[test]
fn test_runtime_view_tracks_latest_layout() {
    let mut rt = Runtime::new(default_model());
    let tx = rt.sender();
    tx.send(PanelMsg::Toggle(CellId(7)).into()).unwrap();
    tx.send(PanelMsg::Toggle(CellId(3)).into()).unwrap();
    rt.run_pending();

    assert_eq!(rt.view.revision(), Some(rt.model.panels.revision()));
    assert_eq!(rt.view.shift_for(CellId(4)), 792);
    assert_eq!(rt.view.shift_for(CellId(8)), 396);
}

#[test]
fn test_stale_snapshot_from_other_thread_is_discarded() {
    let mut rt = Runtime::new(default_model());
    let early = rt.model.panels.toggle_panel(CellId(7)).unwrap().snapshot;
    let late = rt.model.panels.toggle_panel(CellId(3)).unwrap().snapshot;

    // Deliver out of order
    rt.view.apply(late.clone());
    rt.view.apply(early);

    assert_eq!(rt.view.current().map(|s| s.revision), Some(late.revision));
    assert_eq!(rt.view.discarded(), 1);
}

#[test]
fn test_runtime_collects_warnings_without_touching_view() {
    let mut rt = Runtime::new(default_model());
    rt.dispatch(PanelMsg::Toggle(CellId(7)).into());
    rt.dispatch(PanelMsg::Toggle(CellId(99)).into());

    assert_eq!(rt.warnings().len(), 1);
    assert_eq!(rt.view.revision(), Some(1));
}

// ========================================================================
// Sample scenarios
// ========================================================================

#[test]
fn test_two_panels_sample() {
    let scenario = load_scenario(&sample("two-panels.yaml")).unwrap();
    let report = run_scenario(&scenario, &GridConfig::default()).unwrap();

    let lefts: Vec<Vec<(CellId, i32)>> = report
        .frames
        .iter()
        .map(|f| f.panels.iter().map(|(id, p)| (*id, p.left)).collect())
        .collect();
    assert_eq!(
        lefts,
        vec![
            vec![(CellId(7), 396)],
            vec![(CellId(3), 924), (CellId(7), 396)],
            vec![(CellId(3), 528)],
            vec![],
        ]
    );
}

#[test]
fn test_same_column_sample() {
    let scenario = load_scenario(&sample("same-column.yaml")).unwrap();
    let report = run_scenario(&scenario, &GridConfig::default()).unwrap();

    let after_second = &report.frames[1];
    assert_eq!(after_second.panels[&CellId(7)].left, 396);
    assert_eq!(after_second.panels[&CellId(12)].left, 792);

    // Cell 2 shares column 2 and sorts first
    let after_third = &report.frames[2];
    assert_eq!(after_third.panels[&CellId(2)].left, 396);
    assert_eq!(after_third.panels[&CellId(12)].left, 1188);

    let last = report.last().unwrap();
    assert_eq!(last.panels.len(), 2);
    assert_eq!(last.shifts[&CellId(3)], 792);
}

#[test]
fn test_exclusive_sample() {
    let scenario = load_scenario(&sample("exclusive-column.yaml")).unwrap();
    let report = run_scenario(&scenario, &GridConfig::default()).unwrap();

    let last = report.last().unwrap();
    let open: Vec<CellId> = last.panels.keys().copied().collect();
    assert_eq!(open, vec![CellId(3), CellId(12)]);
}

#[test]
fn test_large_grid_sample() {
    let scenario = load_scenario(&sample("large-grid.yaml")).unwrap();
    assert_eq!(scenario.steps.last(), Some(&Step::Rebuild));

    let report = run_scenario(&scenario, &GridConfig::default()).unwrap();
    assert_eq!(report.frames.len(), 6);
    assert!(report.frames[3].warning.is_some());
    assert!(report.frames[4].warning.is_some());
    assert_eq!(report.frames[4].revision, 3);

    let last = report.last().unwrap();
    assert_eq!(last.revision, 4);
    assert_eq!(last.panels.len(), 3);
    assert_eq!(last.panels[&CellId(0)].top, 0);
}

#[test]
fn test_missing_scenario_file_has_context() {
    let err = load_scenario(&sample("does-not-exist.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read scenario"));
}

#[test]
fn test_report_serializes_to_yaml_and_json() {
    let scenario = load_scenario(&sample("two-panels.yaml")).unwrap();
    let report = run_scenario(&scenario, &GridConfig::default()).unwrap();

    let yaml = serde_yaml::to_string(&report).unwrap();
    assert!(yaml.contains("name: two panels"));
    assert!(yaml.contains("left: 396"));

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["frames"][0]["panels"]["7"]["left"], 396);
    assert_eq!(json["frames"][0]["shifts"]["8"], 396);
}
