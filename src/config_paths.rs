//! Centralized configuration paths for grille
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/grille/`
//! - Windows: `%APPDATA%\grille\`
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "grille";

/// Base config directory for grille
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/grille`
///   - Else: `~/.config/grille`
///
/// Windows:
///   - `%APPDATA%\grille`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/grille/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/grille/scenarios/`
pub fn scenarios_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("scenarios"))
}

/// `~/.config/grille/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

fn ensure_dir(dir: &Path) -> Result<(), String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))
}

/// Resolve a scenario argument: an existing path, or a name in `scenarios/`
///
/// `"two-panels"` resolves to `~/.config/grille/scenarios/two-panels.yaml`.
pub fn resolve_scenario(name_or_path: &Path) -> Option<PathBuf> {
    if name_or_path.exists() {
        return Some(name_or_path.to_path_buf());
    }
    let dir = scenarios_dir()?;
    let candidate = dir.join(name_or_path).with_extension("yaml");
    candidate.exists().then_some(candidate)
}
