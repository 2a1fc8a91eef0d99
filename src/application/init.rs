//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::Path;

/// Initialize a new photo journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileStore::new(path.to_path_buf());
    store.initialize()?;

    let config = Config::new();
    config.save_to_dir(path)?;

    println!("Initialized snapjot journal at {}", path.display());
    println!("Grant camera access with: snapjot config allow_camera true");

    Ok(())
}
