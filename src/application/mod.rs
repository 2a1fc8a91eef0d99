//! Application layer - Use cases and orchestration

pub mod capture;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod remove_entry;
pub mod show_entry;

pub use capture::{CapturePipeline, QUALITY_HINT};
pub use list_entries::list_entries;
pub use manage_config::ConfigService;
pub use remove_entry::remove_entry;
pub use show_entry::{export_photo, show_entry};
