//! Metrics scrape config generator
//!
//! Renders a ConfigMap holding `prometheus.yml` with one scrape job for the
//! application and a keep-filter on the requested metric names.

use serde::Serialize;

use crate::config::MonitoringConfig;
use crate::domain::entities::{Artifact, DeploymentSpec};
use crate::domain::ports::ArtifactGenerator;
use crate::error::ShipyardResult;

use super::manifest::{to_yaml, ConfigMap};

pub const PROMETHEUS_CONFIG: &str = "prometheus.yml";

const FALLBACK_TARGET: &str = "localhost:5000";

#[derive(Debug, Clone, Serialize)]
pub struct PrometheusConfig {
    pub global: GlobalConfig,
    pub scrape_configs: Vec<ScrapeConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GlobalConfig {
    pub scrape_interval: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScrapeConfig {
    pub job_name: String,
    pub static_configs: Vec<StaticConfig>,
    pub metrics_path: String,
    pub relabel_configs: Vec<RelabelConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metric_relabel_configs: Vec<RelabelConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StaticConfig {
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelabelConfig {
    pub source_labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    pub regex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// `(a|b|c)`, or `None` when no metrics were requested
pub fn metric_filter(metrics: &[String]) -> Option<String> {
    if metrics.is_empty() {
        None
    } else {
        Some(format!("({})", metrics.join("|")))
    }
}

/// Renders `prometheus.yml`
#[derive(Debug, Clone)]
pub struct PrometheusGenerator {
    scrape_interval: String,
    metrics_path: String,
    scrape_targets: Vec<String>,
}

impl Default for PrometheusGenerator {
    fn default() -> Self {
        Self::from_config(&MonitoringConfig::default())
    }
}

impl PrometheusGenerator {
    pub fn from_config(config: &MonitoringConfig) -> Self {
        Self {
            scrape_interval: config.scrape_interval.clone(),
            metrics_path: config.metrics_path.clone(),
            scrape_targets: config.scrape_targets.clone(),
        }
    }

    fn targets(&self, spec: &DeploymentSpec) -> Vec<String> {
        if !self.scrape_targets.is_empty() {
            return self.scrape_targets.clone();
        }
        let from_ports: Vec<String> = spec
            .port_values()
            .iter()
            .map(|p| format!("localhost:{}", p))
            .collect();
        if from_ports.is_empty() {
            vec![FALLBACK_TARGET.to_string()]
        } else {
            from_ports
        }
    }

    /// The Prometheus configuration itself (before ConfigMap wrapping)
    pub fn config(&self, spec: &DeploymentSpec) -> PrometheusConfig {
        let pod_label_to_job = RelabelConfig {
            source_labels: vec!["__meta_kubernetes_pod_label_app".to_string()],
            separator: Some(";".to_string()),
            regex: "(.+)".to_string(),
            target_label: Some("job".to_string()),
            replacement: Some("$1".to_string()),
            action: None,
        };

        let metric_relabel_configs = metric_filter(spec.metrics_to_collect())
            .map(|regex| RelabelConfig {
                source_labels: vec!["__name__".to_string()],
                separator: None,
                regex,
                target_label: None,
                replacement: None,
                action: Some("keep".to_string()),
            })
            .into_iter()
            .collect();

        PrometheusConfig {
            global: GlobalConfig {
                scrape_interval: self.scrape_interval.clone(),
            },
            scrape_configs: vec![ScrapeConfig {
                job_name: spec.app_name().to_string(),
                static_configs: vec![StaticConfig {
                    targets: self.targets(spec),
                }],
                metrics_path: self.metrics_path.clone(),
                relabel_configs: vec![pod_label_to_job],
                metric_relabel_configs,
            }],
        }
    }
}

impl ArtifactGenerator for PrometheusGenerator {
    fn name(&self) -> &'static str {
        "prometheus"
    }

    fn generate(&self, spec: &DeploymentSpec) -> ShipyardResult<Vec<Artifact>> {
        let inner = to_yaml(PROMETHEUS_CONFIG, &self.config(spec))?;
        let config_map = ConfigMap::new(format!("{}-prometheus-config", spec.app_name()))
            .with_file(PROMETHEUS_CONFIG, inner);
        Ok(vec![Artifact::new(
            PROMETHEUS_CONFIG,
            to_yaml(PROMETHEUS_CONFIG, &config_map)?,
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_yaml_ng::Value;

    fn spec(ports: &[&str], metrics: &[&str]) -> DeploymentSpec {
        DeploymentSpec::builder("app")
            .ports(ports.iter().copied())
            .base_image("python:3.8")
            .metrics(metrics.iter().copied())
            .build()
            .unwrap()
    }

    /// Parse the artifact and return the embedded prometheus.yml
    fn rendered(generator: &PrometheusGenerator, spec: &DeploymentSpec) -> (Value, Value) {
        let artifacts = generator.generate(spec).unwrap();
        let outer: Value = serde_yaml_ng::from_str(artifacts[0].content()).unwrap();
        let inner_text = outer["data"]["prometheus.yml"].as_str().unwrap().to_string();
        let inner: Value = serde_yaml_ng::from_str(&inner_text).unwrap();
        (outer, inner)
    }

    #[test]
    fn metric_filter_joins_with_alternation() {
        let metrics = vec!["a".to_string(), "b".to_string()];
        assert_eq!(metric_filter(&metrics).as_deref(), Some("(a|b)"));
        assert_eq!(metric_filter(&[]), None);
    }

    #[test]
    fn config_map_wraps_scrape_config() {
        let (outer, inner) = rendered(&PrometheusGenerator::default(), &spec(&["5000"], &["a", "b"]));

        assert_eq!(outer["kind"].as_str(), Some("ConfigMap"));
        assert_eq!(
            outer["metadata"]["name"].as_str(),
            Some("app-prometheus-config")
        );

        assert_eq!(inner["global"]["scrape_interval"].as_str(), Some("15s"));
        let job = &inner["scrape_configs"][0];
        assert_eq!(job["job_name"].as_str(), Some("app"));
        assert_eq!(job["metrics_path"].as_str(), Some("/metrics"));
        assert_eq!(
            job["static_configs"][0]["targets"][0].as_str(),
            Some("localhost:5000")
        );
        assert_eq!(job["relabel_configs"][0]["target_label"].as_str(), Some("job"));
        assert_eq!(job["relabel_configs"][0]["replacement"].as_str(), Some("$1"));
        assert_eq!(
            job["metric_relabel_configs"][0]["source_labels"][0].as_str(),
            Some("__name__")
        );
        assert_eq!(
            job["metric_relabel_configs"][0]["regex"].as_str(),
            Some("(a|b)")
        );
        assert_eq!(
            job["metric_relabel_configs"][0]["action"].as_str(),
            Some("keep")
        );
    }

    #[test]
    fn targets_follow_ports() {
        let (_, inner) = rendered(&PrometheusGenerator::default(), &spec(&["8080", "9100"], &["up"]));
        let targets = &inner["scrape_configs"][0]["static_configs"][0]["targets"];
        assert_eq!(targets[0].as_str(), Some("localhost:8080"));
        assert_eq!(targets[1].as_str(), Some("localhost:9100"));
    }

    #[test]
    fn no_ports_falls_back_to_loopback() {
        let (_, inner) = rendered(&PrometheusGenerator::default(), &spec(&[], &["up"]));
        let targets = &inner["scrape_configs"][0]["static_configs"][0]["targets"];
        assert_eq!(targets[0].as_str(), Some("localhost:5000"));
    }

    #[test]
    fn configured_targets_win() {
        let config = MonitoringConfig {
            scrape_targets: vec!["app.default.svc:5000".to_string()],
            scrape_interval: "30s".to_string(),
            ..MonitoringConfig::default()
        };
        let (_, inner) = rendered(&PrometheusGenerator::from_config(&config), &spec(&["5000"], &["up"]));
        assert_eq!(inner["global"]["scrape_interval"].as_str(), Some("30s"));
        assert_eq!(
            inner["scrape_configs"][0]["static_configs"][0]["targets"][0].as_str(),
            Some("app.default.svc:5000")
        );
    }

    #[test]
    fn no_metrics_means_no_filter() {
        let (_, inner) = rendered(&PrometheusGenerator::default(), &spec(&["5000"], &[]));
        assert!(inner["scrape_configs"][0]
            .get("metric_relabel_configs")
            .is_none());
    }

    proptest! {
        #[test]
        fn filter_contains_every_metric(metrics in prop::collection::vec("[a-z_][a-z0-9_]{0,12}", 1..6)) {
            let filter = metric_filter(&metrics).unwrap();
            prop_assert!(filter.starts_with('(') && filter.ends_with(')'));
            let inner = &filter[1..filter.len() - 1];
            let parts: Vec<&str> = inner.split('|').collect();
            prop_assert_eq!(parts.len(), metrics.len());
            for (part, metric) in parts.iter().zip(&metrics) {
                prop_assert_eq!(*part, metric.as_str());
            }
        }
    }
}
