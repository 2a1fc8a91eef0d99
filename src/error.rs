//! Error types for snapjot

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the snapjot application
#[derive(Debug, Error)]
pub enum SnapjotError {
    #[error("Not a snapjot directory: {0}")]
    NotSnapjotDirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    #[error("Caption too long: {0} characters (maximum is 200)")]
    CaptionTooLong(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SnapjotError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SnapjotError::NotSnapjotDirectory(_) => 2,
            SnapjotError::PermissionDenied(_) => 3,
            SnapjotError::CaptureFailed(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SnapjotError::NotSnapjotDirectory(path) => {
                format!(
                    "Not a snapjot directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'snapjot init' in this directory to create a new journal\n\
                    • Navigate to an existing snapjot directory\n\
                    • Set SNAPJOT_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            SnapjotError::PermissionDenied(scope) => {
                format!(
                    "Permission denied: {}\n\n\
                    Suggestions:\n\
                    • Grant camera access: snapjot config allow_camera true\n\
                    • Grant gallery access: snapjot config allow_gallery true\n\
                    • Check current grants: snapjot config --list",
                    scope
                )
            }
            SnapjotError::CaptureFailed(msg) => {
                format!(
                    "Capture failed: {}\n\n\
                    Suggestions:\n\
                    • Check that your capture command is installed and in PATH\n\
                    • Configure it: snapjot config camera_command 'fswebcam --jpeg 85'\n\
                    • The command is invoked with the output file as its last argument",
                    msg
                )
            }
            SnapjotError::CaptionTooLong(len) => {
                format!(
                    "Caption too long: {} characters\n\n\
                    Captions are limited to 200 characters. Shorten the caption and retry.",
                    len
                )
            }
            SnapjotError::Config(msg) => {
                if msg.contains("Invalid key") {
                    format!(
                        "{}\n\n\
                        Valid keys: camera_command, gallery_dir, allow_camera, allow_gallery, created\n\
                        Example: snapjot config allow_camera true",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SnapjotError
pub type Result<T> = std::result::Result<T, SnapjotError>;
