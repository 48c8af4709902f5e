//! Runtime module - drives the update loop outside of any windowing system
//!
//! - `Runtime` owns the model and the rendering-side `LayoutView`, drains
//!   queued messages and performs the commands they produce
//! - `scenario` replays YAML toggle scripts through a `Runtime`

pub mod scenario;

use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::panel::{ApplyOutcome, LayoutError, LayoutView};
use crate::update::update;

pub use scenario::{run_scenario, Frame, GridOverrides, Scenario, ScenarioReport, Step};

/// Message loop around an [`AppModel`]
pub struct Runtime {
    pub model: AppModel,
    pub view: LayoutView,
    warnings: Vec<LayoutError>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl Runtime {
    pub fn new(model: AppModel) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            view: LayoutView::new(),
            warnings: Vec::new(),
            msg_tx,
            msg_rx,
        }
    }

    /// Handle for queueing messages from event sources
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Run one message through `update` and perform its command
    pub fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        let cmd = update(&mut self.model, msg);
        if let Some(cmd) = &cmd {
            self.process_cmd(cmd.clone());
        }
        cmd
    }

    /// Drain every queued message in arrival order
    ///
    /// Returns the number of messages processed.
    pub fn run_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            processed += 1;
        }
        processed
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::PublishLayout(snapshot) => {
                if let ApplyOutcome::Stale { current, offered } = self.view.apply(snapshot) {
                    tracing::debug!(
                        "Runtime skipped stale layout revision {} (showing {})",
                        offered,
                        current
                    );
                }
            }
            Cmd::ReportWarning(warning) => {
                tracing::warn!("{}", warning);
                self.warnings.push(warning);
            }
        }
    }

    /// Warnings reported since the runtime started
    pub fn warnings(&self) -> &[LayoutError] {
        &self.warnings
    }
}
