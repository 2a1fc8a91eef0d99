//! Permission collaborators for camera and gallery access

use crate::infrastructure::Config;

/// Access scopes the capture flow depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionScope {
    Camera,
    Gallery,
}

impl PermissionScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionScope::Camera => "camera",
            PermissionScope::Gallery => "gallery",
        }
    }
}

impl std::fmt::Display for PermissionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    Granted,
    Denied,
}

impl Grant {
    pub fn is_granted(&self) -> bool {
        matches!(self, Grant::Granted)
    }
}

/// External permission service: query the current grant state, or request
/// the grant explicitly.
pub trait PermissionGate {
    fn query(&self, scope: PermissionScope) -> Grant;
    fn request(&self, scope: PermissionScope) -> Grant;
}

/// Permission gate backed by the journal config. Requesting a grant is
/// non-interactive: it re-reads the configured state, so a denial stands
/// until the user flips the config key.
pub struct ConfigPermissions {
    allow_camera: bool,
    allow_gallery: bool,
}

impl ConfigPermissions {
    pub fn from_config(config: &Config) -> Self {
        ConfigPermissions {
            allow_camera: config.allow_camera,
            allow_gallery: config.allow_gallery,
        }
    }

    fn grant_for(&self, scope: PermissionScope) -> Grant {
        let allowed = match scope {
            PermissionScope::Camera => self.allow_camera,
            PermissionScope::Gallery => self.allow_gallery,
        };

        if allowed {
            Grant::Granted
        } else {
            Grant::Denied
        }
    }
}

impl PermissionGate for ConfigPermissions {
    fn query(&self, scope: PermissionScope) -> Grant {
        self.grant_for(scope)
    }

    fn request(&self, scope: PermissionScope) -> Grant {
        self.grant_for(scope)
    }
}
