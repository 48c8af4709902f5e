//! Panel update handlers
//!
//! Turns panel messages into engine operations. Every rebuild is published
//! with `Cmd::PublishLayout`; unresolvable cells come back as
//! `Cmd::ReportWarning` and leave the layout untouched.

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::AppModel;
use crate::panel::{LayoutError, PanelAction, ToggleOutcome};

/// Update function for panel messages
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Toggle(cell) => {
            let result = model.panels.toggle_panel(cell);
            publish_result(model, result)
        }

        PanelMsg::Open(cell) => {
            let result = model.panels.open_panel(cell);
            publish_result(model, result)
        }

        PanelMsg::Close(cell) => {
            let outcome = model.panels.close_panel(cell);
            publish(model, outcome)
        }

        PanelMsg::CloseAll => {
            let outcome = model.panels.close_all();
            publish(model, outcome)
        }

        PanelMsg::Rebuild => {
            model.last_warning = None;
            Some(Cmd::PublishLayout(model.panels.rebuild()))
        }
    }
}

fn publish_result(
    model: &mut AppModel,
    result: Result<ToggleOutcome, LayoutError>,
) -> Option<Cmd> {
    match result {
        Ok(outcome) => publish(model, outcome),
        Err(e) => {
            model.last_warning = Some(e.clone());
            Some(Cmd::ReportWarning(e))
        }
    }
}

fn publish(model: &mut AppModel, outcome: ToggleOutcome) -> Option<Cmd> {
    model.last_warning = None;
    match outcome.action {
        // Nothing new to draw
        PanelAction::Unchanged => None,
        PanelAction::Opened | PanelAction::Closed => Some(Cmd::PublishLayout(outcome.snapshot)),
    }
}
