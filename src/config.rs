//! User configuration
//!
//! Stored in `~/.config/bingo-card/config.yaml`. Every field is optional in
//! the file; missing fields take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::ReachPolicy;

/// File name used when an export target is a directory
pub const DEFAULT_EXPORT_FILE: &str = "bingo-card.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BingoConfig {
    /// Theme id (e.g., "classic", "midnight") or path to a theme YAML
    #[serde(default = "default_theme")]
    pub theme: String,
    /// TrueType/OpenType font for exported images
    #[serde(default)]
    pub font_path: Option<PathBuf>,
    /// Pixel density of exported images
    #[serde(default = "default_export_scale")]
    pub export_scale: f32,
    /// Directory exports are written to (current directory when unset)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    /// Whether near-complete lines are reported
    #[serde(default)]
    pub reach: ReachPolicy,
}

fn default_theme() -> String {
    "classic".to_string()
}

fn default_export_scale() -> f32 {
    2.0
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font_path: None,
            export_scale: default_export_scale(),
            export_dir: None,
            reach: ReachPolicy::default(),
        }
    }
}

impl BingoConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_or_default(&path)
    }

    /// Load config from `path`; missing or malformed files yield defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Strict load, reporting read and parse errors
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))?;
        config.validated()
    }

    fn validated(mut self) -> Result<Self, String> {
        if !self.export_scale.is_finite() || self.export_scale <= 0.0 {
            return Err(format!("export_scale must be positive, got {}", self.export_scale));
        }
        // Keep exports within a sane pixel budget
        self.export_scale = self.export_scale.min(8.0);
        Ok(self)
    }

    /// Write config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Where an export lands when no explicit path is given
    pub fn default_export_path(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_EXPORT_FILE)
    }

    /// Resolve a user-supplied export target. Directories get the default
    /// file name appended; relative paths are taken as given.
    pub fn export_path_for(&self, requested: Option<&Path>) -> PathBuf {
        match requested {
            None => self.default_export_path(),
            Some(path) if path.is_dir() => path.join(DEFAULT_EXPORT_FILE),
            Some(path) => path.to_path_buf(),
        }
    }
}
