//! Repository initializer
//!
//! Creates the project directory with its baseline files and copies the
//! application source and dependency manifest in when they exist next to the
//! invocation.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::entities::DeploymentSpec;
use crate::error::ShipyardResult;
use crate::infrastructure::fs::LocalFs;

pub const README: &str = "README.md";
pub const GITIGNORE: &str = ".gitignore";

/// Patterns written to `.gitignore`, one per line
pub const IGNORE_PATTERNS: &[&str] = &[
    "__pycache__/",
    "*.pyc",
    "*.pyo",
    "*.pyd",
    "kubernetes_manifests/",
];

/// Files the initializer touched, relative to the project directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitializedRepository {
    pub written: Vec<PathBuf>,
    pub copied: Vec<PathBuf>,
}

pub fn gitignore_content() -> String {
    let mut content = IGNORE_PATTERNS.join("\n");
    content.push('\n');
    content
}

/// Sets up `{output_root}/{app_name}`
#[derive(Debug, Clone)]
pub struct RepositoryInitializer {
    fs: LocalFs,
    source_root: PathBuf,
}

impl RepositoryInitializer {
    /// `source_root` is where optional source/manifest files are looked up
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            fs: LocalFs::new(),
            source_root: source_root.into(),
        }
    }

    /// Idempotent: re-running rewrites the same two baseline files.
    pub fn initialize(
        &self,
        project_dir: &Path,
        spec: &DeploymentSpec,
    ) -> ShipyardResult<InitializedRepository> {
        self.fs.create_dir_all(project_dir)?;

        let mut result = InitializedRepository::default();

        self.fs.write(&project_dir.join(README), "")?;
        result.written.push(PathBuf::from(README));

        self.fs
            .write(&project_dir.join(GITIGNORE), &gitignore_content())?;
        result.written.push(PathBuf::from(GITIGNORE));

        let mut optional = vec![spec.entry_point()];
        if let Some(manifest) = spec.language().dependency_manifest() {
            optional.push(manifest.to_string());
        }

        for name in optional {
            let from = self.source_root.join(&name);
            let to = project_dir.join(&name);
            if same_file(&from, &to) {
                debug!(file = %name, "source already inside project directory");
                continue;
            }
            if self.fs.copy_if_exists(&from, &to)? {
                info!(from = %from.display(), to = %to.display(), "copied into project");
                result.copied.push(PathBuf::from(name));
            } else {
                debug!(file = %from.display(), "optional input not found, skipping");
            }
        }

        Ok(result)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
