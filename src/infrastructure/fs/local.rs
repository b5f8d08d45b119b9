//! Local File System
//!
//! Atomic writes and optional copies used by the scaffolder.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::ShipyardResult;

/// Local disk operations rooted at nothing in particular; callers pass full paths
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    /// Create a directory and its parents. Existing directories are fine.
    pub fn create_dir_all(&self, path: &Path) -> ShipyardResult<()> {
        std::fs::create_dir_all(path)?;
        Ok(())
    }

    /// Write `content` atomically: temp file in the same directory, then rename.
    pub fn write(&self, path: &Path, content: &str) -> ShipyardResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;

        let mut tmp = NamedTempFile::new_in(&parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Copy `from` to `to` if `from` is a file. Returns whether a copy happened.
    pub fn copy_if_exists(&self, from: &Path, to: &Path) -> ShipyardResult<bool> {
        if !from.is_file() {
            return Ok(false);
        }
        if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(from, to)?;
        Ok(true)
    }
}
