//! Kubernetes object types shared by the generators
//!
//! Only the fields Shipyard renders are modelled.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{ShipyardError, ShipyardResult};

/// `metadata` block of a Kubernetes object
#[derive(Debug, Clone, Serialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl ObjectMeta {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: BTreeMap::new(),
        }
    }
}

/// A `v1` ConfigMap carrying whole files as data entries
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMap {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub metadata: ObjectMeta,
    pub data: BTreeMap<String, String>,
}

impl ConfigMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            api_version: "v1",
            kind: "ConfigMap",
            metadata: ObjectMeta::named(name),
            data: BTreeMap::new(),
        }
    }

    pub fn with_file(mut self, key: impl Into<String>, content: impl Into<String>) -> Self {
        self.data.insert(key.into(), content.into());
        self
    }
}

/// The `app: {name}` label pair tying a Deployment to its Service
pub fn app_labels(app_name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("app".to_string(), app_name.to_string())])
}

pub(crate) fn to_yaml<T: Serialize>(artifact: &str, value: &T) -> ShipyardResult<String> {
    serde_yaml_ng::to_string(value).map_err(|e| ShipyardError::Render {
        artifact: artifact.to_string(),
        message: e.to_string(),
    })
}

pub(crate) fn to_json_pretty<T: Serialize>(artifact: &str, value: &T) -> ShipyardResult<String> {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| ShipyardError::Render {
            artifact: artifact.to_string(),
            message: e.to_string(),
        })
}
