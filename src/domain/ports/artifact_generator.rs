//! ArtifactGenerator port - renders deployment documents from a spec
//!
//! Each generator is a pure function of the [`DeploymentSpec`] (plus whatever
//! settings it was constructed with). Writing to disk is the caller's job.

use crate::domain::entities::{Artifact, DeploymentSpec};
use crate::error::ShipyardResult;

/// A renderer for one kind of deployment artifact
pub trait ArtifactGenerator {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Render the artifacts for `spec`. Paths are relative to the project directory.
    fn generate(&self, spec: &DeploymentSpec) -> ShipyardResult<Vec<Artifact>>;
}
