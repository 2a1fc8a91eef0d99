//! Infrastructure layer - External I/O and collaborators

pub mod camera;
pub mod config;
pub mod gallery;
pub mod permissions;
pub mod repository;
pub mod store;

pub use camera::{CameraDevice, CaptureRequest, CaptureResponse, CommandCamera};
pub use config::Config;
pub use gallery::{DirectoryGallery, GallerySink};
pub use permissions::{ConfigPermissions, Grant, PermissionGate, PermissionScope};
pub use repository::{EntryRepository, ENTRIES_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
