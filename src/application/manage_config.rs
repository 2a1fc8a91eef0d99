//! Config management use case

use crate::error::{Result, SnapjotError};
use crate::infrastructure::{Config, FileStore};
use std::path::PathBuf;

/// Service for managing journal configuration
pub struct ConfigService {
    store: FileStore,
}

impl ConfigService {
    pub fn new(store: FileStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(self.store.root())?;

        match key {
            "camera_command" => Ok(config.camera_command.clone()),
            "gallery_dir" => Ok(config
                .gallery_dir
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "allow_camera" => Ok(config.allow_camera.to_string()),
            "allow_gallery" => Ok(config.allow_gallery.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SnapjotError::Config(format!(
                "Invalid key: '{}'. Valid keys are: camera_command, gallery_dir, \
                allow_camera, allow_gallery, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(self.store.root())?;

        match key {
            "camera_command" => {
                config.camera_command = value.to_string();
            }
            "gallery_dir" => {
                config.gallery_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "allow_camera" => {
                config.allow_camera = parse_bool(key, value)?;
            }
            "allow_gallery" => {
                config.allow_gallery = parse_bool(key, value)?;
            }
            "created" => {
                return Err(SnapjotError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SnapjotError::Config(format!(
                    "Invalid key: '{}'. Valid keys are: camera_command, gallery_dir, \
                    allow_camera, allow_gallery",
                    key
                )));
            }
        }

        config.save_to_dir(self.store.root())?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(self.store.root())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" => Ok(true),
        "false" | "no" | "off" => Ok(false),
        _ => Err(SnapjotError::Config(format!(
            "Invalid value for '{}': '{}'. Expected true or false",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let store = FileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();
        Config::new().save_to_dir(temp.path()).unwrap();
        ConfigService::new(store)
    }

    #[test]
    fn test_get_and_set_camera_command() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("camera_command", "fswebcam --jpeg 85").unwrap();
        assert_eq!(service.get("camera_command").unwrap(), "fswebcam --jpeg 85");
    }

    #[test]
    fn test_set_allow_camera_accepts_bool_words() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("allow_camera", "true").unwrap();
        assert_eq!(service.get("allow_camera").unwrap(), "true");

        service.set("allow_camera", "off").unwrap();
        assert_eq!(service.get("allow_camera").unwrap(), "false");
    }

    #[test]
    fn test_set_allow_camera_rejects_garbage() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("allow_camera", "maybe").is_err());
    }

    #[test]
    fn test_gallery_dir_empty_clears() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("gallery_dir", "/photos").unwrap();
        assert_eq!(service.get("gallery_dir").unwrap(), "/photos");

        service.set("gallery_dir", "").unwrap();
        assert_eq!(service.get("gallery_dir").unwrap(), "");
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("created", "2025-01-17T00:00:00Z").is_err());
        assert!(!service.get("created").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.get("editor").is_err());
        assert!(service.set("editor", "vim").is_err());
    }
}
