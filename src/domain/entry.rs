//! Photo-note entry record and caption rules

use crate::error::{Result, SnapjotError};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum caption length in characters
pub const MAX_CAPTION_LEN: usize = 200;

/// Unique identifier for an entry
///
/// A random UUID v4 rather than a timestamp-derived token, so ids stay
/// unique even if two captures land on the same wall-clock instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId(value)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One caption + photo + timestamp record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub caption: String,
    /// Capture timestamp, immutable once set
    pub taken_at: DateTime<Local>,
    /// Photograph as a base64 text blob, renderable without a file reference
    pub image: String,
}

impl Entry {
    /// Build a new entry captured now. The caption may be empty but must
    /// not exceed [`MAX_CAPTION_LEN`] characters.
    pub fn new(caption: &str, image: String) -> Result<Self> {
        Self::with_timestamp(caption, image, Local::now())
    }

    /// Build an entry with an explicit capture timestamp.
    pub fn with_timestamp(caption: &str, image: String, taken_at: DateTime<Local>) -> Result<Self> {
        let len = caption.chars().count();
        if len > MAX_CAPTION_LEN {
            return Err(SnapjotError::CaptionTooLong(len));
        }

        Ok(Entry {
            id: EntryId::generate(),
            caption: caption.to_string(),
            taken_at,
            image,
        })
    }

    /// Human-readable capture timestamp (date + time, minute precision)
    pub fn taken_at_display(&self) -> String {
        self.taken_at.format("%d-%m-%Y %H:%M").to_string()
    }
}
