//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod panel;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSummary;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use panel::update_panel;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = LayoutSummary::from_engine(&model.panels);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = LayoutSummary::from_engine(&model.panels);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    model.panels.assert_invariants();

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Panel::Toggle(CellId(7))`
/// - `Panel::CloseAll`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
    }
}
