//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//!
//! - `ScaffoldUseCase` - initialize the project and write every artifact
//! - `deploy_steps` - the ordered skaffold/kubectl step plan
//! - `StepRunner` - run steps with fatal/non-fatal failure handling

pub mod deploy;
pub mod pipeline;
pub mod repository;
pub mod scaffold;

pub use deploy::deploy_steps;
pub use pipeline::{PipelineReport, StepRunner};
pub use repository::{InitializedRepository, RepositoryInitializer};
pub use scaffold::{ScaffoldOptions, ScaffoldResult, ScaffoldUseCase};
