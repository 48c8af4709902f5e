//! Benchmarks for panel layout rebuilds
//!
//! Run with: cargo bench layout

mod support;
use support::{make_model, open_spread};

use std::collections::BTreeSet;

use grille::messages::{Msg, PanelMsg};
use grille::model::{CellId, Grid, GridMetrics};
use grille::panel::compute_layout;
use grille::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Pure rebuild
// ============================================================================

#[divan::bench(args = [5, 16, 32, 64])]
fn compute_layout_one_panel(bencher: divan::Bencher, side: u32) {
    let grid = Grid::new(side, side * side).unwrap();
    let metrics = GridMetrics::default();
    let open: BTreeSet<CellId> = [CellId(i64::from(side / 2))].into_iter().collect();

    bencher.bench(|| compute_layout(divan::black_box(&open), &grid, &metrics));
}

#[divan::bench(args = [1, 8, 32, 128])]
fn compute_layout_many_panels(bencher: divan::Bencher, panels: u32) {
    let grid = Grid::new(32, 1024).unwrap();
    let metrics = GridMetrics::default();
    let open: BTreeSet<CellId> = (0..panels).map(|i| CellId(i64::from(i * 7 % 1024))).collect();

    bencher.bench(|| compute_layout(divan::black_box(&open), &grid, &metrics));
}

// ============================================================================
// Through update
// ============================================================================

#[divan::bench(args = [5, 32])]
fn toggle_round_trip(bencher: divan::Bencher, side: u32) {
    let mut model = make_model(side);
    open_spread(&mut model, 4);
    let cell = CellId(i64::from(side + 1));

    bencher.bench_local(|| {
        update(&mut model, Msg::Panel(PanelMsg::Toggle(cell)));
        update(&mut model, Msg::Panel(PanelMsg::Toggle(cell)));
    });
}

#[divan::bench]
fn shift_lookup_full_grid(bencher: divan::Bencher) {
    let mut model = make_model(32);
    open_spread(&mut model, 16);

    bencher.bench_local(|| {
        let mut total = 0i64;
        for id in 0..1024 {
            total += i64::from(model.panels.shift_for(CellId(id)));
        }
        divan::black_box(total)
    });
}
