//! Scaffold Use Case
//!
//! Initializes the project directory, renders every artifact and writes it.
//! Nothing external is invoked here.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::entities::DeploymentSpec;
use crate::domain::ports::{ArtifactGenerator, EventSink, ShipyardEvent};
use crate::error::ShipyardResult;
use crate::infrastructure::fs::LocalFs;

use super::repository::RepositoryInitializer;

/// Where the project goes and where optional inputs come from
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Parent of the project directory
    pub output_root: PathBuf,
    /// Directory searched for `{app}.{ext}` and the dependency manifest
    pub source_root: PathBuf,
}

/// What a scaffold run produced
#[derive(Debug, Clone, Default)]
pub struct ScaffoldResult {
    pub project_dir: PathBuf,
    /// Written files, relative to `project_dir`, in write order
    pub written: Vec<PathBuf>,
    /// Copied optional inputs, relative to `project_dir`
    pub copied: Vec<PathBuf>,
}

impl ScaffoldResult {
    pub fn file_count(&self) -> usize {
        self.written.len() + self.copied.len()
    }
}

pub struct ScaffoldUseCase {
    generators: Vec<Box<dyn ArtifactGenerator>>,
    fs: LocalFs,
}

impl ScaffoldUseCase {
    pub fn new(generators: Vec<Box<dyn ArtifactGenerator>>) -> Self {
        Self {
            generators,
            fs: LocalFs::new(),
        }
    }

    /// Project directory for `spec` under `output_root`
    pub fn project_dir(output_root: &Path, spec: &DeploymentSpec) -> PathBuf {
        output_root.join(spec.app_name())
    }

    pub fn execute(
        &self,
        spec: &DeploymentSpec,
        options: &ScaffoldOptions,
        events: &dyn EventSink,
    ) -> ShipyardResult<ScaffoldResult> {
        let project_dir = Self::project_dir(&options.output_root, spec);
        events.on_event(ShipyardEvent::Started {
            app_name: spec.app_name().to_string(),
            project_dir: project_dir.clone(),
        });

        let initialized =
            RepositoryInitializer::new(&options.source_root).initialize(&project_dir, spec)?;
        for path in &initialized.written {
            events.on_event(ShipyardEvent::FileWritten { path: path.clone() });
        }
        for path in &initialized.copied {
            events.on_event(ShipyardEvent::FileCopied { path: path.clone() });
        }

        let mut result = ScaffoldResult {
            project_dir: project_dir.clone(),
            written: initialized.written,
            copied: initialized.copied,
        };

        for generator in &self.generators {
            for artifact in generator.generate(spec)? {
                let target = project_dir.join(artifact.path());
                self.fs.write(&target, artifact.content())?;
                info!(
                    generator = generator.name(),
                    "{} configuration written to: {}",
                    generator.name(),
                    target.display()
                );
                events.on_event(ShipyardEvent::FileWritten {
                    path: artifact.path().to_path_buf(),
                });
                result.written.push(artifact.path().to_path_buf());
            }
        }

        events.on_event(ShipyardEvent::Generated {
            file_count: result.file_count(),
        });
        Ok(result)
    }
}
