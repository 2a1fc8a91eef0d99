//! Gallery collaborator - best-effort copy of captured photos

use crate::error::{Result, SnapjotError};
use std::fs;
use std::path::{Path, PathBuf};

/// Destination for the OS-level copy of each captured photo. The copy is a
/// convenience, not the primary record; callers swallow failures.
pub trait GallerySink {
    fn save(&self, file: &Path) -> Result<()>;
}

/// Gallery backed by a plain directory. A sink without a directory is
/// disabled and treats every save as a success.
pub struct DirectoryGallery {
    dir: Option<PathBuf>,
}

impl DirectoryGallery {
    pub fn new(dir: Option<PathBuf>) -> Self {
        DirectoryGallery { dir }
    }
}

impl GallerySink for DirectoryGallery {
    fn save(&self, file: &Path) -> Result<()> {
        let Some(dir) = &self.dir else {
            return Ok(());
        };

        let name = file
            .file_name()
            .ok_or_else(|| SnapjotError::Config(format!("not a file: {}", file.display())))?;

        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        fs::copy(file, dir.join(name))?;
        Ok(())
    }
}
