//! Configuration file handling for the shape editors.
//!
//! The configuration holds the built-in style defaults for each shape kind
//! and a couple of sizing/history knobs. It is stored as TOML (or JSON, by
//! extension) in the platform configuration directory:
//!
//! ```toml
//! min_size = 16.0
//! history_limit = 128
//!
//! [circle]
//! stroke_color = "#000000"
//! stroke_opacity = 1.0
//! thickness = 1.0
//! fill_color = "#ffffff"
//! fill_opacity = 0.0
//! ```

use annokit_core::constants::{DEFAULT_HISTORY_LIMIT, MIN_SIZE};
use annokit_core::{ShapeKind, ShapeStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

const CONFIG_DIR_NAME: &str = "annokit";
const CONFIG_FILE_NAME: &str = "editors.toml";

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Minimum content extent of an editor, in local units
    pub min_size: f64,
    /// Capacity of the undo history
    pub history_limit: usize,
    /// Style a fresh circle editor starts with
    pub circle: ShapeStyle,
    /// Style a fresh rectangle editor starts with
    pub rectangle: ShapeStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_SIZE,
            history_limit: DEFAULT_HISTORY_LIMIT,
            circle: ShapeStyle::default(),
            rectangle: ShapeStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default style for a shape kind.
    pub fn style_for(&self, kind: ShapeKind) -> &ShapeStyle {
        match kind {
            ShapeKind::Circle => &self.circle,
            ShapeKind::Rectangle => &self.rectangle,
        }
    }

    /// Mutable default style for a shape kind.
    pub fn style_for_mut(&mut self, kind: ShapeKind) -> &mut ShapeStyle {
        match kind {
            ShapeKind::Circle => &mut self.circle,
            ShapeKind::Rectangle => &mut self.rectangle,
        }
    }

    /// Location of the configuration file in the platform config directory.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })?;
        Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Toml => toml::from_str(&content)?,
            ConfigFormat::Json => serde_json::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded editor config");
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file does
    /// not exist. Any other failure is reported.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No editor config, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Saved editor config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.min_size.is_finite() && self.min_size > 0.0) {
            return Err(SettingsError::invalid("min_size", "must be > 0"));
        }
        if self.history_limit == 0 {
            return Err(SettingsError::invalid("history_limit", "must be > 0"));
        }
        for kind in ShapeKind::ALL {
            validate_style(kind, self.style_for(kind))?;
        }
        Ok(())
    }
}

fn validate_style(kind: ShapeKind, style: &ShapeStyle) -> SettingsResult<()> {
    if !(style.thickness.is_finite() && style.thickness > 0.0) {
        return Err(SettingsError::invalid(
            format!("{kind}.thickness"),
            "must be > 0",
        ));
    }
    for (field, value) in [
        ("stroke_opacity", style.stroke_opacity),
        ("fill_opacity", style.fill_opacity),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(SettingsError::invalid(
                format!("{kind}.{field}"),
                "must be within [0, 1]",
            ));
        }
    }
    Ok(())
}
