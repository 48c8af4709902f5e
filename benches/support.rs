//! Shared helpers for benchmarks

use grille::config::GridConfig;
use grille::messages::{Msg, PanelMsg};
use grille::model::{AppModel, CellId};
use grille::update::update;

/// Create an AppModel for a square grid with `side * side` cells
#[allow(dead_code)]
pub fn make_model(side: u32) -> AppModel {
    let config = GridConfig {
        row_width: side,
        total_cells: side * side,
        ..GridConfig::default()
    };
    AppModel::new(config).unwrap()
}

/// Open `count` panels spread evenly over the grid
#[allow(dead_code)]
pub fn open_spread(model: &mut AppModel, count: u32) {
    let total = model.grid().total_cells();
    let step = (total / count.max(1)).max(1);
    for i in 0..count.min(total) {
        let id = CellId(i64::from(i * step));
        update(model, Msg::Panel(PanelMsg::Open(id)));
    }
}
