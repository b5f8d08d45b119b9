//! Domain Entities

mod artifact;
mod deployment_spec;
mod step;

pub use artifact::Artifact;
pub use deployment_spec::{DeploymentSpec, DeploymentSpecBuilder};
pub use step::{Step, StepOutcome, StepStatus};
