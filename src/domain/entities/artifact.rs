//! Artifact entity - a rendered deployment document
//!
//! Artifacts are the output of the generators. They represent what will be
//! written into the project directory.

use std::path::{Path, PathBuf};

/// A rendered document ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the project directory
    path: PathBuf,
    /// Rendered content
    content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Path relative to the project directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
