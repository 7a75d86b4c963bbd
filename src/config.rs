//! Chart tool configuration.

use crate::charts::Canvas;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding [`ChartConfig::font_path`].
pub const FONT_PATH_ENV: &str = "CHART_FONT_PATH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Logical image width
    pub width: u32,
    /// Logical image height
    pub height: u32,
    /// Pixel scale applied to width and height
    pub scale: f64,
    /// Folder used when no tool context is available
    pub save_folder: PathBuf,
    /// Session state key holding the chart history
    pub state_key: String,
    /// TrueType font used for chart text
    pub font_path: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scale: 2.0,
            save_folder: PathBuf::from("charts"),
            state_key: "generated_charts".to_string(),
            font_path: None,
        }
    }
}

impl ChartConfig {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: ChartConfig = serde_json::from_str(&content)?;
        Ok(config.with_env_overrides())
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var(FONT_PATH_ENV) {
            if !path.is_empty() {
                self.font_path = Some(PathBuf::from(path));
            }
        }
        self
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height, self.scale)
    }
}
