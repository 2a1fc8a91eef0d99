//! Configuration management

use crate::error::{Result, SnapjotError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// External command that captures one still image; invoked with the
    /// output file path appended as the final argument
    pub camera_command: String,
    /// Directory receiving a best-effort copy of each captured photo;
    /// absent means the gallery copy is disabled
    pub gallery_dir: Option<PathBuf>,
    /// Grant for camera device access
    pub allow_camera: bool,
    /// Grant for gallery write access
    pub allow_gallery: bool,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values. Permission grants start
    /// denied and must be granted explicitly.
    pub fn new() -> Self {
        Config {
            camera_command: Self::detect_default_camera_command(),
            gallery_dir: None,
            allow_camera: false,
            allow_gallery: false,
            created: Utc::now(),
        }
    }

    /// Load config from .snapjot/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".snapjot").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SnapjotError::NotSnapjotDirectory(path.to_path_buf())
            } else {
                SnapjotError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| SnapjotError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .snapjot/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(".snapjot");
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SnapjotError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the capture command, checking the environment first
    pub fn get_camera_command(&self) -> String {
        std::env::var("SNAPJOT_CAMERA").unwrap_or_else(|_| self.camera_command.clone())
    }

    /// Detect default capture command from environment or system
    fn detect_default_camera_command() -> String {
        std::env::var("SNAPJOT_CAMERA").unwrap_or_else(|_| "fswebcam".to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
