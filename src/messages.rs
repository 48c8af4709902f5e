//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::CellId;

/// Panel messages (opening and closing side panels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMsg {
    /// Open the cell's panel if closed, close it if open (cell click)
    Toggle(CellId),
    /// Open the cell's panel; no-op if already open
    Open(CellId),
    /// Close the cell's panel; no-op if not open (panel close button)
    Close(CellId),
    /// Close every open panel (Escape)
    CloseAll,
    /// Recompute the layout for the current open set
    Rebuild,
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Panel(PanelMsg),
}

impl From<PanelMsg> for Msg {
    fn from(msg: PanelMsg) -> Self {
        Msg::Panel(msg)
    }
}
