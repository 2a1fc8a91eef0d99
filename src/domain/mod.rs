//! Domain layer - Business logic and domain models

pub mod capture;
pub mod collection;
pub mod entry;

pub use capture::{CameraFacing, CaptureEvent, CaptureState};
pub use collection::EntryCollection;
pub use entry::{Entry, EntryId, MAX_CAPTION_LEN};
