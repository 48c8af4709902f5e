//! Grille - panel placement and container shift engine
//!
//! This crate computes where side panels open beside the cells of a showcase
//! grid and how far every later column must move to make room, following the
//! Elm Architecture pattern: `Msg` in, `update`, `Cmd` out.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod panel;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::AppModel;
