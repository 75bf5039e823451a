//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/codepad/config.yaml`. These were
//! process-wide mutable fields in older versions of the editor; they are now
//! carried explicitly in one settings object the shell reads and writes.

use serde::{Deserialize, Serialize};

use crate::model::{FileEncoding, LineEnding};

/// Default editor font size in points
pub const BASE_FONT_SIZE: f32 = 13.0;
/// Smallest font size zoom can reach
pub const MIN_FONT_SIZE: f32 = 10.0;
/// Largest font size zoom can reach
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Selected theme id (e.g., "light", "dark")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Encoding assigned to newly created documents
    #[serde(default)]
    pub default_encoding: FileEncoding,
    /// Line ending assigned to newly created documents
    #[serde(default)]
    pub default_line_ending: LineEnding,
    /// Editor font size in points
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_font_size() -> f32 {
    BASE_FONT_SIZE
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            default_encoding: FileEncoding::default(),
            default_line_ending: LineEnding::default(),
            font_size: BASE_FONT_SIZE,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Update theme and save
    pub fn set_theme(&mut self, theme_id: &str) -> Result<(), String> {
        self.theme = theme_id.to_string();
        self.save()
    }

    /// Set font size, clamped to the zoom range
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }
}
