//! Centralized configuration and data paths for codepad
//!
//! Config files live under:
//! - Unix/macOS: `~/.config/codepad/`
//! - Windows: `%APPDATA%\codepad\`
//!
//! The drafts file lives under the local data directory:
//! - Unix/macOS: `~/.local/share/codepad/drafts.dat`
//! - Windows: `%LOCALAPPDATA%\codepad\drafts.dat`
//!
//! Older releases stored drafts under a `CodePad` directory; that location
//! is still read as a fallback but never written to.
//!
//! This module is the single source of truth for these paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "codepad";
const LEGACY_APP_DIR: &str = "CodePad";
const DRAFTS_FILE: &str = "drafts.dat";

/// Base config directory for codepad
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/codepad`
///   - Else: `~/.config/codepad`
///
/// Windows:
///   - `%APPDATA%\codepad`
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

/// Base local data directory (without the app component)
fn data_base_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("LOCALAPPDATA")
            .ok()
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
    }
}

/// `~/.local/share/codepad/` (or `%LOCALAPPDATA%\codepad\`)
pub fn data_dir() -> Option<PathBuf> {
    data_base_dir().map(|base| base.join(APP_DIR))
}

/// `~/.config/codepad/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/codepad/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Current drafts file: `<data dir>/codepad/drafts.dat`
pub fn drafts_file() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(DRAFTS_FILE))
}

/// Drafts file written by older releases: `<data dir>/CodePad/drafts.dat`
///
/// Read-only fallback; new snapshots are always written to [`drafts_file`].
pub fn legacy_drafts_file() -> Option<PathBuf> {
    data_base_dir().map(|base| base.join(LEGACY_APP_DIR).join(DRAFTS_FILE))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    let logs = config.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
