//! Key-value persistent store adapter

use crate::error::{Result, SnapjotError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable key-value storage for text blobs. The core only depends on this
/// contract; where the blob actually lives is an infrastructure concern.
pub trait KeyValueStore {
    /// Read the blob stored under `key`. An absent key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    fn set(&self, key: &str, blob: &str) -> Result<()>;
}

/// File-backed store: one file per key under the journal's `.snapjot` directory
#[derive(Debug, Clone)]
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given journal directory
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    /// Discover the journal root, checking the SNAPJOT_ROOT environment
    /// variable first and falling back to walking up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SNAPJOT_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_snapjot_dir(&path) {
                return Ok(FileStore::new(path));
            } else {
                return Err(SnapjotError::Config(format!(
                    "SNAPJOT_ROOT is set to '{}' but no .snapjot directory found. \
                    Run 'snapjot init' in that directory or unset SNAPJOT_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_snapjot_dir(&current) {
                return Ok(FileStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(SnapjotError::NotSnapjotDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_snapjot_dir(path: &Path) -> bool {
        path.join(".snapjot").is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_snapjot_dir(&self.root)
    }

    /// Create the .snapjot directory structure
    pub fn initialize(&self) -> Result<()> {
        let data_dir = self.root.join(".snapjot");

        if data_dir.exists() {
            return Err(SnapjotError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&data_dir)?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory where captured image files are kept
    pub fn captures_dir(&self) -> PathBuf {
        self.root.join(".snapjot").join("captures")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(".snapjot").join(format!("{}.toml", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        Ok(Some(contents))
    }

    /// Write the blob using a best-effort atomic replace: write to a temp
    /// file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove
    /// the destination first.
    fn set(&self, key: &str, blob: &str) -> Result<()> {
        let path = self.key_path(key);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.snapjot-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("blob.toml"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, blob)?;

        if path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

/// In-memory store for unit tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, blob: &str) -> Result<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
