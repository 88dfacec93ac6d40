//! # Annokit Settings
//!
//! Editor configuration persisted as TOML or JSON, plus the process-wide
//! table of default styles new editors start from.

pub mod config;
pub mod defaults;
pub mod error;

pub use config::EditorConfig;
pub use defaults::{install_defaults, reset_style_defaults, set_style_default, style_defaults};
pub use error::{SettingsError, SettingsResult};
