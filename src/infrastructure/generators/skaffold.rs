//! Build-tool config generator (`skaffold.yaml`)

use serde::Serialize;

use crate::domain::entities::{Artifact, DeploymentSpec};
use crate::domain::ports::ArtifactGenerator;
use crate::error::ShipyardResult;

use super::kubernetes::MANIFESTS_DIR;
use super::manifest::{to_yaml, ObjectMeta};

pub const SKAFFOLD_CONFIG: &str = "skaffold.yaml";

const API_VERSION: &str = "skaffold/v2beta3";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaffoldConfig {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub metadata: ObjectMeta,
    pub build: BuildConfig,
    pub deploy: DeployConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildConfig {
    pub artifacts: Vec<BuildArtifact>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildArtifact {
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeployConfig {
    pub kubectl: KubectlDeploy,
}

#[derive(Debug, Clone, Serialize)]
pub struct KubectlDeploy {
    pub manifests: Vec<String>,
}

pub fn skaffold_config(spec: &DeploymentSpec) -> SkaffoldConfig {
    SkaffoldConfig {
        api_version: API_VERSION,
        kind: "Config",
        metadata: ObjectMeta::named(spec.app_name()),
        build: BuildConfig {
            artifacts: vec![BuildArtifact {
                image: spec.app_name().to_string(),
            }],
        },
        deploy: DeployConfig {
            kubectl: KubectlDeploy {
                manifests: vec![format!("{}/*.yaml", MANIFESTS_DIR)],
            },
        },
    }
}

/// Renders `skaffold.yaml`
#[derive(Debug, Clone, Copy, Default)]
pub struct SkaffoldGenerator;

impl SkaffoldGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactGenerator for SkaffoldGenerator {
    fn name(&self) -> &'static str {
        "skaffold"
    }

    fn generate(&self, spec: &DeploymentSpec) -> ShipyardResult<Vec<Artifact>> {
        Ok(vec![Artifact::new(
            SKAFFOLD_CONFIG,
            to_yaml(SKAFFOLD_CONFIG, &skaffold_config(spec))?,
        )])
    }
}
