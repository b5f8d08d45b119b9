//! Shipyard - bootstrap a single-service application for Kubernetes
//!
//! Shipyard lays out a project directory, renders the deployment documents
//! the application needs (Dockerfile, Kubernetes manifests, Skaffold config,
//! Prometheus scrape config and a Grafana dashboard) and hands the result to
//! `skaffold` and `kubectl`.
//!
//! ## Layers
//!
//! - `domain` - deployment spec, steps, ports
//! - `infrastructure` - generators, filesystem, process runner, event sinks
//! - `application` - scaffold use case, deploy step plan, step runner
//! - `config` - TOML configuration with environment overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{deploy_steps, PipelineReport, ScaffoldOptions, ScaffoldUseCase, StepRunner};
pub use config::Config;
pub use domain::entities::{DeploymentSpec, Step, StepStatus};
pub use domain::value_objects::Language;
pub use error::{ShipyardError, ShipyardResult};
