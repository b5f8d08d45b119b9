//! DeploymentSpec entity - the parameters every artifact is rendered from
//!
//! Built once at start-up, read-only afterwards. The only check performed is
//! that the application name is usable as a path segment; everything else
//! flows through to the rendered documents untouched.

use serde::Serialize;

use crate::domain::value_objects::{Language, PortValue};
use crate::error::{ShipyardError, ShipyardResult};

/// Parameters for one bootstrap run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentSpec {
    app_name: String,
    language: Language,
    ports: Vec<String>,
    base_image: String,
    metrics_to_collect: Vec<String>,
}

impl DeploymentSpec {
    /// Start building a spec for `app_name`
    pub fn builder(app_name: impl Into<String>) -> DeploymentSpecBuilder {
        DeploymentSpecBuilder::new(app_name)
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Raw port entries, in input order
    pub fn ports(&self) -> &[String] {
        &self.ports
    }

    /// Ports as they are written into documents (one per entry)
    pub fn port_values(&self) -> Vec<PortValue> {
        self.ports.iter().map(|p| PortValue::from_raw(p)).collect()
    }

    pub fn base_image(&self) -> &str {
        &self.base_image
    }

    pub fn metrics_to_collect(&self) -> &[String] {
        &self.metrics_to_collect
    }

    /// Entry-point file name (`{app}.py` for python)
    pub fn entry_point(&self) -> String {
        self.language.entry_point(&self.app_name)
    }

    /// Image reference the cluster pulls (`{app}:latest`)
    pub fn image_tag(&self) -> String {
        format!("{}:latest", self.app_name)
    }
}

/// Builder for [`DeploymentSpec`]
#[derive(Debug, Clone)]
pub struct DeploymentSpecBuilder {
    app_name: String,
    language: Language,
    ports: Vec<String>,
    base_image: String,
    metrics_to_collect: Vec<String>,
}

impl DeploymentSpecBuilder {
    fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            language: Language::default(),
            ports: Vec::new(),
            base_image: String::new(),
            metrics_to_collect: Vec::new(),
        }
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn ports<I, S>(mut self, ports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ports = clean(ports);
        self
    }

    pub fn base_image(mut self, base_image: impl Into<String>) -> Self {
        self.base_image = base_image.into();
        self
    }

    pub fn metrics<I, S>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metrics_to_collect = clean(metrics);
        self
    }

    /// Finish the spec; fails only for an unusable application name
    pub fn build(self) -> ShipyardResult<DeploymentSpec> {
        let app_name = self.app_name.trim().to_string();
        if app_name.is_empty() {
            return Err(ShipyardError::InvalidSpec {
                message: "app name must not be empty".to_string(),
            });
        }
        if app_name.contains(|c: char| c == '/' || c == '\\') || app_name == "." || app_name == ".." {
            return Err(ShipyardError::InvalidSpec {
                message: format!("app name '{}' is not a single path segment", app_name),
            });
        }

        Ok(DeploymentSpec {
            app_name,
            language: self.language,
            ports: self.ports,
            base_image: self.base_image.trim().to_string(),
            metrics_to_collect: self.metrics_to_collect,
        })
    }
}

fn clean<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items
        .into_iter()
        .map(|s| s.into().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DeploymentSpec {
        DeploymentSpec::builder("app")
            .ports(["5000"])
            .base_image("python:3.8")
            .metrics(["metric_name"])
            .build()
            .unwrap()
    }

    #[test]
    fn builder_keeps_values() {
        let spec = sample();
        assert_eq!(spec.app_name(), "app");
        assert_eq!(spec.language(), Language::Python);
        assert_eq!(spec.ports(), ["5000"]);
        assert_eq!(spec.base_image(), "python:3.8");
        assert_eq!(spec.metrics_to_collect(), ["metric_name"]);
    }

    #[test]
    fn entry_point_and_image_tag_follow_app_name() {
        let spec = sample();
        assert_eq!(spec.entry_point(), "app.py");
        assert_eq!(spec.image_tag(), "app:latest");
    }

    #[test]
    fn entries_are_trimmed_and_blank_ones_dropped() {
        let spec = DeploymentSpec::builder("  svc ")
            .ports([" 80", "", "443 "])
            .metrics(["a", "  "])
            .build()
            .unwrap();
        assert_eq!(spec.app_name(), "svc");
        assert_eq!(spec.ports(), ["80", "443"]);
        assert_eq!(spec.metrics_to_collect(), ["a"]);
    }

    #[test]
    fn empty_app_name_is_rejected() {
        let err = DeploymentSpec::builder("   ").build().unwrap_err();
        assert!(matches!(err, ShipyardError::InvalidSpec { .. }));
    }

    #[test]
    fn app_name_with_separator_is_rejected() {
        assert!(DeploymentSpec::builder("a/b").build().is_err());
        assert!(DeploymentSpec::builder("..").build().is_err());
    }

    #[test]
    fn port_values_keep_input_order() {
        let spec = DeploymentSpec::builder("app")
            .ports(["8080", "http"])
            .build()
            .unwrap();
        assert_eq!(
            spec.port_values(),
            vec![PortValue::Number(8080), PortValue::Named("http".into())]
        );
    }
}
