//! Capture flow state machine

/// Which physical camera is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}

impl CameraFacing {
    pub fn flipped(self) -> Self {
        match self {
            CameraFacing::Back => CameraFacing::Front,
            CameraFacing::Front => CameraFacing::Back,
        }
    }
}

/// States of the capture flow
///
/// ```text
/// Idle -> PermissionCheck -> CameraActive -> Capturing -> Idle
///              |                  ^    |         |
///              +-- Denied --------+----+---------+-- Failure returns to CameraActive
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    PermissionCheck,
    CameraActive {
        facing: CameraFacing,
    },
    Capturing {
        facing: CameraFacing,
    },
}

/// Events that drive the capture flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureEvent {
    /// User triggers a capture; permissions are checked first
    Begin,
    PermissionGranted,
    PermissionDenied,
    /// Swap front/back camera while the viewfinder is open
    Flip,
    /// User presses the shutter
    Shutter,
    CaptureSucceeded,
    CaptureFailed,
    /// Close the viewfinder without capturing
    Cancel,
}

impl CaptureState {
    /// Apply an event, returning the next state. Events that are not legal
    /// in the current state are rejected.
    pub fn apply(self, event: CaptureEvent) -> Result<CaptureState, IllegalTransition> {
        use CaptureEvent::*;
        use CaptureState::*;

        let next = match (self, event) {
            (Idle, Begin) => PermissionCheck,
            (PermissionCheck, PermissionGranted) => CameraActive {
                facing: CameraFacing::default(),
            },
            (PermissionCheck, PermissionDenied) => Idle,
            (CameraActive { facing }, Flip) => CameraActive {
                facing: facing.flipped(),
            },
            (CameraActive { facing }, Shutter) => Capturing { facing },
            (CameraActive { .. }, Cancel) => Idle,
            (Capturing { .. }, CaptureSucceeded) => Idle,
            // A failed capture keeps the viewfinder open so the user can retry
            (Capturing { facing }, CaptureFailed) => CameraActive { facing },
            (Capturing { .. }, Cancel) => Idle,
            (state, event) => return Err(IllegalTransition { state, event }),
        };

        Ok(next)
    }
}

/// An event arrived in a state where it has no meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalTransition {
    pub state: CaptureState,
    pub event: CaptureEvent,
}

impl std::fmt::Display for IllegalTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "event {:?} is not valid in state {:?}", self.event, self.state)
    }
}
