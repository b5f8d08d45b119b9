//! Artifact Generators
//!
//! Implementations of the ArtifactGenerator port, one per deployment document.

pub mod dockerfile;
pub mod grafana;
pub mod kubernetes;
pub mod manifest;
pub mod prometheus;
pub mod skaffold;

pub use dockerfile::{DockerfileGenerator, DOCKERFILE};
pub use grafana::{GrafanaGenerator, GRAFANA_DASHBOARD};
pub use kubernetes::{KubernetesGenerator, DEPLOYMENT_FILE, MANIFESTS_DIR, SERVICE_FILE};
pub use prometheus::{PrometheusGenerator, PROMETHEUS_CONFIG};
pub use skaffold::{SkaffoldGenerator, SKAFFOLD_CONFIG};

use crate::config::Config;
use crate::domain::ports::ArtifactGenerator;

/// Every generator, in the order their artifacts are written
pub fn all_generators(config: &Config) -> Vec<Box<dyn ArtifactGenerator>> {
    vec![
        Box::new(DockerfileGenerator::new()),
        Box::new(PrometheusGenerator::from_config(&config.monitoring)),
        Box::new(GrafanaGenerator::new()),
        Box::new(KubernetesGenerator::new()),
        Box::new(SkaffoldGenerator::new()),
    ]
}
