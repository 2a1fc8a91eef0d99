//! Camera collaborator - external still-image capture

use crate::error::{Result, SnapjotError};
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Parameters for one still capture
#[derive(Debug, Clone, Copy)]
pub struct CaptureRequest {
    /// Whether the caller wants the image bytes returned inline
    pub inline: bool,
    /// Size/quality tradeoff on a 0.0-1.0 scale
    pub quality: f64,
}

/// Outcome of one still capture. `data` holds the image bytes when inline
/// encoding was requested; `file` is the native file reference, usable for
/// the gallery copy.
#[derive(Debug, Clone, Default)]
pub struct CaptureResponse {
    pub data: Option<Vec<u8>>,
    pub file: Option<PathBuf>,
}

/// External camera device able to produce one still image per request
pub trait CameraDevice {
    fn capture_still(&self, request: &CaptureRequest) -> Result<CaptureResponse>;
}

/// Camera backed by a user-configured capture command. The command is
/// invoked with the output file path appended as its final argument and the
/// quality hint exported as SNAPJOT_QUALITY in its environment; it is
/// expected to write the image to that path.
pub struct CommandCamera {
    command: String,
    output_dir: PathBuf,
}

impl CommandCamera {
    pub fn new(command: String, output_dir: PathBuf) -> Self {
        CommandCamera {
            command,
            output_dir,
        }
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> Result<(String, Vec<String>)> {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        let Some(program) = parts.first() else {
            return Err(SnapjotError::CaptureFailed(
                "no capture command configured".to_string(),
            ));
        };

        let args = parts[1..].iter().map(|s| s.to_string()).collect();
        Ok((program.to_string(), args))
    }

    fn output_path(&self) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d-%H%M%S%.3f");
        self.output_dir.join(format!("capture-{}.jpg", stamp))
    }
}

impl CameraDevice for CommandCamera {
    fn capture_still(&self, request: &CaptureRequest) -> Result<CaptureResponse> {
        let (program, args) = self.parse_command()?;

        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir)?;
        }
        let output = self.output_path();

        let status = Command::new(&program)
            .args(&args)
            .arg(&output)
            .env("SNAPJOT_QUALITY", request.quality.to_string())
            .status()
            .map_err(|e| {
                SnapjotError::CaptureFailed(format!(
                    "failed to launch capture command '{}': {}",
                    program, e
                ))
            })?;

        if !status.success() {
            return Err(SnapjotError::CaptureFailed(format!(
                "capture command '{}' exited with {}",
                program, status
            )));
        }

        // A command that exits cleanly but writes nothing is reported as an
        // empty response, not an error; the pipeline decides what that means.
        if !output.exists() {
            return Ok(CaptureResponse::default());
        }

        let data = if request.inline {
            let bytes = fs::read(&output)?;
            if bytes.is_empty() {
                None
            } else {
                Some(bytes)
            }
        } else {
            None
        };

        Ok(CaptureResponse {
            data,
            file: Some(output),
        })
    }
}
