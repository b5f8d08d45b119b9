//! Dashboard config generator
//!
//! The panel is fixed; it does not follow the requested metric list.

use serde::Serialize;

use crate::domain::entities::{Artifact, DeploymentSpec};
use crate::domain::ports::ArtifactGenerator;
use crate::error::{ShipyardError, ShipyardResult};

use super::manifest::{to_json_pretty, ConfigMap};

pub const GRAFANA_DASHBOARD: &str = "grafana_dashboard.json";

const DASHBOARD_KEY: &str = "dashboard.json";
const PANEL_METRIC: &str = "metric_name";
const SCHEMA_VERSION: u32 = 21;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Always `null` so Grafana assigns one on import
    pub id: Option<u64>,
    pub title: String,
    pub panels: Vec<Panel>,
    pub time: TimeRange,
    pub timezone: String,
    pub schema_version: u32,
    pub version: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub targets: Vec<PanelTarget>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelTarget {
    pub target: String,
    pub ref_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

pub fn dashboard(spec: &DeploymentSpec) -> Dashboard {
    Dashboard {
        id: None,
        title: format!("{} Dashboard", spec.app_name()),
        panels: vec![Panel {
            id: 1,
            kind: "graph".to_string(),
            title: "My Graph Panel".to_string(),
            targets: vec![PanelTarget {
                target: PANEL_METRIC.to_string(),
                ref_id: "A".to_string(),
            }],
        }],
        time: TimeRange {
            from: "now-6h".to_string(),
            to: "now".to_string(),
        },
        timezone: "browser".to_string(),
        schema_version: SCHEMA_VERSION,
        version: 1,
    }
}

/// Renders `grafana_dashboard.json`
#[derive(Debug, Clone, Copy, Default)]
pub struct GrafanaGenerator;

impl GrafanaGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactGenerator for GrafanaGenerator {
    fn name(&self) -> &'static str {
        "grafana"
    }

    fn generate(&self, spec: &DeploymentSpec) -> ShipyardResult<Vec<Artifact>> {
        let dashboard_json =
            serde_json::to_string(&dashboard(spec)).map_err(|e| ShipyardError::Render {
                artifact: GRAFANA_DASHBOARD.to_string(),
                message: e.to_string(),
            })?;
        let config_map = ConfigMap::new(format!("{}-grafana-dashboard-config", spec.app_name()))
            .with_file(DASHBOARD_KEY, dashboard_json);

        Ok(vec![Artifact::new(
            GRAFANA_DASHBOARD,
            to_json_pretty(GRAFANA_DASHBOARD, &config_map)?,
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn render(app: &str) -> (Value, Value) {
        let spec = DeploymentSpec::builder(app)
            .ports(["5000"])
            .base_image("python:3.8")
            .metrics(["a", "b"])
            .build()
            .unwrap();
        let artifacts = GrafanaGenerator::new().generate(&spec).unwrap();
        let outer: Value = serde_json::from_str(artifacts[0].content()).unwrap();
        let inner: Value =
            serde_json::from_str(outer["data"]["dashboard.json"].as_str().unwrap()).unwrap();
        (outer, inner)
    }

    #[test]
    fn output_is_indented_json_config_map() {
        let spec = DeploymentSpec::builder("app").build().unwrap();
        let artifacts = GrafanaGenerator::new().generate(&spec).unwrap();
        assert!(artifacts[0].content().contains("\n  \"apiVersion\": \"v1\""));

        let (outer, _) = render("app");
        assert_eq!(outer["kind"], "ConfigMap");
        assert_eq!(outer["metadata"]["name"], "app-grafana-dashboard-config");
    }

    #[test]
    fn title_derives_from_app_name() {
        let (_, dashboard) = render("checkout");
        assert_eq!(dashboard["title"], "checkout Dashboard");
    }

    #[test]
    fn dashboard_has_fixed_layout() {
        let (_, dashboard) = render("app");
        assert!(dashboard["id"].is_null());
        assert_eq!(dashboard["panels"].as_array().unwrap().len(), 1);
        assert_eq!(dashboard["panels"][0]["type"], "graph");
        assert_eq!(dashboard["panels"][0]["targets"][0]["target"], "metric_name");
        assert_eq!(dashboard["panels"][0]["targets"][0]["refId"], "A");
        assert_eq!(dashboard["time"]["from"], "now-6h");
        assert_eq!(dashboard["time"]["to"], "now");
        assert_eq!(dashboard["timezone"], "browser");
        assert_eq!(dashboard["schemaVersion"], 21);
        assert_eq!(dashboard["version"], 1);
    }
}
