//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Language;
use crate::error::ShipyardResult;

use super::loader::{self, ConfigWarning};

/// Deployment parameters used when neither flags nor prompts supply them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,

    #[serde(default)]
    pub language: Language,

    #[serde(default = "default_ports")]
    pub ports: Vec<String>,

    #[serde(default = "default_base_image")]
    pub base_image: String,

    #[serde(default = "default_metrics")]
    pub metrics: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            language: Language::default(),
            ports: default_ports(),
            base_image: default_base_image(),
            metrics: default_metrics(),
        }
    }
}

fn default_app_name() -> String {
    "app".to_string()
}

fn default_ports() -> Vec<String> {
    vec!["5000".to_string()]
}

fn default_base_image() -> String {
    "python:3.8".to_string()
}

fn default_metrics() -> Vec<String> {
    vec!["metric_name".to_string()]
}

/// External binaries. Bare names are resolved on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_skaffold")]
    pub skaffold: PathBuf,

    #[serde(default = "default_kubectl")]
    pub kubectl: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            skaffold: default_skaffold(),
            kubectl: default_kubectl(),
        }
    }
}

fn default_skaffold() -> PathBuf {
    PathBuf::from("skaffold")
}

fn default_kubectl() -> PathBuf {
    PathBuf::from("kubectl")
}

/// Prometheus/Grafana rendering and deployment settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringConfig {
    #[serde(default = "default_scrape_interval")]
    pub scrape_interval: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,

    /// Explicit scrape targets; empty means `localhost:{port}` per app port
    #[serde(default)]
    pub scrape_targets: Vec<String>,

    /// Companion Prometheus deployment descriptor; empty string disables the step
    #[serde(default = "default_prometheus_deployment")]
    pub prometheus_deployment: String,

    /// Companion Grafana deployment descriptor; empty string disables the step
    #[serde(default = "default_grafana_deployment")]
    pub grafana_deployment: String,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            scrape_interval: default_scrape_interval(),
            metrics_path: default_metrics_path(),
            scrape_targets: Vec::new(),
            prometheus_deployment: default_prometheus_deployment(),
            grafana_deployment: default_grafana_deployment(),
        }
    }
}

impl MonitoringConfig {
    pub fn prometheus_deployment_path(&self) -> Option<&Path> {
        non_empty_path(&self.prometheus_deployment)
    }

    pub fn grafana_deployment_path(&self) -> Option<&Path> {
        non_empty_path(&self.grafana_deployment)
    }
}

fn non_empty_path(value: &str) -> Option<&Path> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| Path::new(trimmed))
}

fn default_scrape_interval() -> String {
    "15s".to_string()
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

fn default_prometheus_deployment() -> String {
    "prometheus-deployment.yaml".to_string()
}

fn default_grafana_deployment() -> String {
    "grafana-deployment.yaml".to_string()
}

/// Log stream settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("shipyard.log")
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub monitoring: MonitoringConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ShipyardResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ShipyardResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// User config overlaid by the explicit or project file, then env
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> ShipyardResult<loader::LoadedConfig> {
        loader::resolve(explicit, cwd)
    }
}
