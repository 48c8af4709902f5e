//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! An update with nothing to perform returns `None` instead of a command.

use std::sync::Arc;

use crate::panel::{LayoutError, LayoutSnapshot};

/// Commands returned by update functions
#[derive(Debug, Clone)]
pub enum Cmd {
    /// Hand a freshly rebuilt layout to the rendering layer
    PublishLayout(Arc<LayoutSnapshot>),
    /// Surface a recoverable condition to the caller (logged, not fatal)
    ReportWarning(LayoutError),
}

impl Cmd {
    /// The snapshot this command publishes, if any
    pub fn published_layout(&self) -> Option<&Arc<LayoutSnapshot>> {
        match self {
            Cmd::PublishLayout(snapshot) => Some(snapshot),
            Cmd::ReportWarning(_) => None,
        }
    }

    /// The warning this command reports, if any
    pub fn warning(&self) -> Option<&LayoutError> {
        match self {
            Cmd::ReportWarning(warning) => Some(warning),
            Cmd::PublishLayout(_) => None,
        }
    }
}
