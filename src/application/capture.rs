//! Capture pipeline - from user trigger to a finished entry

use crate::domain::{CaptureEvent, CaptureState, Entry, MAX_CAPTION_LEN};
use crate::error::{Result, SnapjotError};
use crate::infrastructure::{
    CameraDevice, CaptureRequest, GallerySink, Grant, PermissionGate, PermissionScope,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Fixed size/quality tradeoff passed to the camera. Deliberately not
/// configurable.
pub const QUALITY_HINT: f64 = 0.7;

/// Orchestrates permission checks, camera capture and the gallery side
/// effect, producing one entry per successful run. Generic over the three
/// collaborator boundaries so tests can inject stubs.
pub struct CapturePipeline<'a, C, G, P>
where
    C: CameraDevice,
    G: GallerySink,
    P: PermissionGate,
{
    camera: &'a C,
    gallery: &'a G,
    permissions: &'a P,
}

impl<'a, C, G, P> CapturePipeline<'a, C, G, P>
where
    C: CameraDevice,
    G: GallerySink,
    P: PermissionGate,
{
    pub fn new(camera: &'a C, gallery: &'a G, permissions: &'a P) -> Self {
        CapturePipeline {
            camera,
            gallery,
            permissions,
        }
    }

    /// Run one capture. A denied permission aborts before the camera is
    /// touched; a camera failure produces no entry; a gallery failure is
    /// logged and swallowed. The caller adds the returned entry to the
    /// repository and resets the caption input.
    pub fn capture(&self, caption: &str) -> Result<Entry> {
        let len = caption.chars().count();
        if len > MAX_CAPTION_LEN {
            return Err(SnapjotError::CaptionTooLong(len));
        }

        let mut state = step(CaptureState::Idle, CaptureEvent::Begin)?;

        for scope in [PermissionScope::Camera, PermissionScope::Gallery] {
            if !self.ensure_grant(scope) {
                step(state, CaptureEvent::PermissionDenied)?;
                return Err(SnapjotError::PermissionDenied(scope.as_str().to_string()));
            }
        }
        state = step(state, CaptureEvent::PermissionGranted)?;
        state = step(state, CaptureEvent::Shutter)?;

        let request = CaptureRequest {
            inline: true,
            quality: QUALITY_HINT,
        };
        let response = match self.camera.capture_still(&request) {
            Ok(response) => response,
            Err(e) => {
                step(state, CaptureEvent::CaptureFailed)?;
                return Err(e);
            }
        };

        let Some(data) = response.data.filter(|d| !d.is_empty()) else {
            step(state, CaptureEvent::CaptureFailed)?;
            return Err(SnapjotError::CaptureFailed(
                "camera returned no image data".to_string(),
            ));
        };

        let entry = Entry::new(caption, BASE64.encode(&data))?;

        // Best-effort gallery copy; the note record does not depend on it
        if let Some(file) = &response.file {
            if let Err(e) = self.gallery.save(file) {
                eprintln!("warning: failed to save photo to gallery: {}", e);
            }
        }

        step(state, CaptureEvent::CaptureSucceeded)?;

        Ok(entry)
    }

    /// Check the current grant state and, if not yet granted, request the
    /// grant explicitly. Only an explicit denial aborts the flow.
    fn ensure_grant(&self, scope: PermissionScope) -> bool {
        if self.permissions.query(scope) == Grant::Granted {
            return true;
        }
        self.permissions.request(scope).is_granted()
    }
}

/// Advance the capture state machine, converting an illegal transition
/// into a capture failure at this boundary.
fn step(state: CaptureState, event: CaptureEvent) -> Result<CaptureState> {
    state
        .apply(event)
        .map_err(|e| SnapjotError::CaptureFailed(e.to_string()))
}
