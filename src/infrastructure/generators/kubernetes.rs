//! Orchestration manifest generator
//!
//! Renders `kubernetes_manifests/deployment.yaml` and
//! `kubernetes_manifests/service.yaml`. Every port gets its own entry in both.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{Artifact, DeploymentSpec};
use crate::domain::ports::ArtifactGenerator;
use crate::domain::value_objects::PortValue;
use crate::error::ShipyardResult;

use super::manifest::{app_labels, to_yaml, ObjectMeta};

pub const MANIFESTS_DIR: &str = "kubernetes_manifests";
pub const DEPLOYMENT_FILE: &str = "deployment.yaml";
pub const SERVICE_FILE: &str = "service.yaml";

const REPLICAS: u32 = 1;
const SERVICE_TYPE: &str = "LoadBalancer";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub metadata: ObjectMeta,
    pub spec: DeploymentBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentBody {
    pub replicas: u32,
    pub selector: LabelSelector,
    pub template: PodTemplate,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    pub match_labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PodTemplate {
    pub metadata: TemplateMeta,
    pub spec: PodSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateMeta {
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PodSpec {
    pub containers: Vec<Container>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Container {
    pub name: String,
    pub image: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ContainerPort>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPort {
    pub container_port: PortValue,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub metadata: ObjectMeta,
    pub spec: ServiceBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceBody {
    pub selector: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ServicePort>,
    #[serde(rename = "type")]
    pub service_type: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePort {
    /// Required by Kubernetes once a service exposes more than one port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub protocol: String,
    pub port: PortValue,
    pub target_port: PortValue,
}

pub fn deployment(spec: &DeploymentSpec) -> Deployment {
    let app = spec.app_name();
    Deployment {
        api_version: "apps/v1",
        kind: "Deployment",
        metadata: ObjectMeta::named(format!("{}-deployment", app)),
        spec: DeploymentBody {
            replicas: REPLICAS,
            selector: LabelSelector {
                match_labels: app_labels(app),
            },
            template: PodTemplate {
                metadata: TemplateMeta {
                    labels: app_labels(app),
                },
                spec: PodSpec {
                    containers: vec![Container {
                        name: format!("{}-container", app),
                        image: spec.image_tag(),
                        ports: spec
                            .port_values()
                            .into_iter()
                            .map(|container_port| ContainerPort { container_port })
                            .collect(),
                    }],
                },
            },
        },
    }
}

pub fn service(spec: &DeploymentSpec) -> Service {
    let app = spec.app_name();
    let ports = spec.port_values();
    let named = ports.len() > 1;

    Service {
        api_version: "v1",
        kind: "Service",
        metadata: ObjectMeta::named(format!("{}-service", app)),
        spec: ServiceBody {
            selector: app_labels(app),
            ports: ports
                .into_iter()
                .enumerate()
                .map(|(i, port)| ServicePort {
                    name: named.then(|| format!("port-{}", i)),
                    protocol: "TCP".to_string(),
                    target_port: port.clone(),
                    port,
                })
                .collect(),
            service_type: SERVICE_TYPE.to_string(),
        },
    }
}

/// Renders the Deployment and Service manifests
#[derive(Debug, Clone, Copy, Default)]
pub struct KubernetesGenerator;

impl KubernetesGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactGenerator for KubernetesGenerator {
    fn name(&self) -> &'static str {
        "kubernetes"
    }

    fn generate(&self, spec: &DeploymentSpec) -> ShipyardResult<Vec<Artifact>> {
        let dir = std::path::Path::new(MANIFESTS_DIR);
        Ok(vec![
            Artifact::new(
                dir.join(DEPLOYMENT_FILE),
                to_yaml(DEPLOYMENT_FILE, &deployment(spec))?,
            ),
            Artifact::new(
                dir.join(SERVICE_FILE),
                to_yaml(SERVICE_FILE, &service(spec))?,
            ),
        ])
    }
}
