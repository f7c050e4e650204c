//! Host configuration (host.toml)

use std::path::Path;

use perch_platform::ChromeMode;
use serde::{Deserialize, Serialize};

use crate::error::{HostError, Result};
use crate::layout::ViewId;

/// Top-level host configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HostConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HostConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| HostError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

/// Window chrome settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WindowConfig {
    #[serde(default)]
    pub chrome: ChromeMode,
}

/// Which layout to inflate and where its game surface lives
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LayoutConfig {
    /// Asset path of the layout resource
    #[serde(default = "default_layout_resource")]
    pub resource: String,
    /// Stable id of the game surface inside the layout
    #[serde(default = "default_surface_id")]
    pub surface_id: ViewId,
}

fn default_layout_resource() -> String {
    "layout/activity_main.toml".to_string()
}

fn default_surface_id() -> ViewId {
    ViewId::new("game_view")
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            resource: default_layout_resource(),
            surface_id: default_surface_id(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Tag shown in the platform log (logcat)
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Filter directive, overridden by `RUST_LOG` where the environment has one
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_tag() -> String {
    "Perch".to_string()
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            filter: default_filter(),
        }
    }
}
