//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Arc;

use grille::commands::Cmd;
use grille::config::GridConfig;
use grille::messages::{Msg, PanelMsg};
use grille::model::{AppModel, CellId};
use grille::panel::LayoutSnapshot;
use grille::update::update;

/// Create a model for a grid of `row_width` columns and `total_cells` cells
/// with the default pixel constants (128 / 4 / 392)
pub fn test_model(row_width: u32, total_cells: u32) -> AppModel {
    let config = GridConfig {
        row_width,
        total_cells,
        ..GridConfig::default()
    };
    AppModel::new(config).unwrap()
}

/// The 5x5 grid used by the worked examples
pub fn default_model() -> AppModel {
    test_model(5, 25)
}

pub fn toggle(model: &mut AppModel, id: i64) -> Option<Cmd> {
    update(model, Msg::Panel(PanelMsg::Toggle(CellId(id))))
}

pub fn send(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    update(model, Msg::Panel(msg))
}

/// Toggle each id in order, returning the current snapshot afterwards
pub fn toggle_all(model: &mut AppModel, ids: &[i64]) -> Arc<LayoutSnapshot> {
    for &id in ids {
        toggle(model, id);
    }
    model.panels.snapshot()
}

/// The snapshot carried by a `Cmd::PublishLayout`
pub fn published(cmd: Option<Cmd>) -> Arc<LayoutSnapshot> {
    match cmd {
        Some(Cmd::PublishLayout(snapshot)) => snapshot,
        other => panic!("Expected PublishLayout, got {:?}", other),
    }
}

/// Shift of every cell in one row, left to right
pub fn row_shifts(model: &AppModel, row: u32) -> Vec<i32> {
    let width = model.grid().row_width();
    (0..width)
        .map(|column| i64::from(row * width + column))
        .map(|id| model.panels.shift_for(CellId(id)))
        .collect()
}
