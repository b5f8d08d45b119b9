//! Step entity - one external command in the deploy sequence

use crate::domain::ports::CommandLine;

/// A named external command. A failing fatal step stops the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    name: String,
    command: CommandLine,
    fatal: bool,
}

impl Step {
    /// A step whose failure aborts the run
    pub fn fatal(name: impl Into<String>, command: CommandLine) -> Self {
        Self {
            name: name.into(),
            command,
            fatal: true,
        }
    }

    /// A step whose failure is logged and skipped over
    pub fn non_fatal(name: impl Into<String>, command: CommandLine) -> Self {
        Self {
            name: name.into(),
            command,
            fatal: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self) -> &CommandLine {
        &self.command
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }
}

/// What happened to a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    /// Ran and exited non-zero (`None`: killed by a signal)
    Failed { code: Option<i32> },
    /// Could not be started at all
    SpawnFailed { message: String },
    /// Not run because an earlier fatal step failed
    Skipped,
}

impl StepStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, StepStatus::Failed { .. } | StepStatus::SpawnFailed { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Succeeded => "succeeded",
            StepStatus::Failed { .. } => "failed",
            StepStatus::SpawnFailed { .. } => "spawn_failed",
            StepStatus::Skipped => "skipped",
        }
    }
}

/// Result of one step, as reported to sinks and the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub name: String,
    pub command: String,
    pub fatal: bool,
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn new(step: &Step, status: StepStatus) -> Self {
        Self {
            name: step.name().to_string(),
            command: step.command().to_string(),
            fatal: step.is_fatal(),
            status,
        }
    }

    /// A fatal step that failed
    pub fn is_abort(&self) -> bool {
        self.fatal && self.status.is_failure()
    }
}
