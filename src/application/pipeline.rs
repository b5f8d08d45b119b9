//! Step Runner
//!
//! Runs an ordered list of external steps. Failures are logged uniformly;
//! only a fatal step's failure stops the run, and the steps after it are
//! reported as skipped.

use tracing::{error, info};

use crate::domain::entities::{Step, StepOutcome, StepStatus};
use crate::domain::ports::{CommandRunner, EventSink, ShipyardEvent};

/// Outcomes of every step, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub outcomes: Vec<StepOutcome>,
}

impl PipelineReport {
    /// The fatal step that stopped the run, if any
    pub fn aborted_at(&self) -> Option<&StepOutcome> {
        self.outcomes.iter().find(|o| o.is_abort())
    }

    pub fn is_success(&self) -> bool {
        self.aborted_at().is_none()
    }

    /// Non-fatal steps that failed
    pub fn soft_failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes
            .iter()
            .filter(|o| !o.fatal && o.status.is_failure())
    }
}

pub struct StepRunner<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> StepRunner<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn run(&self, steps: &[Step], events: &dyn EventSink) -> PipelineReport {
        let total = steps.len();
        let mut report = PipelineReport::default();
        let mut aborted = false;

        for (index, step) in steps.iter().enumerate() {
            let status = if aborted {
                StepStatus::Skipped
            } else {
                events.on_event(ShipyardEvent::StepStarted {
                    index,
                    total,
                    name: step.name().to_string(),
                    command: step.command().to_string(),
                });
                self.run_step(step)
            };

            let outcome = StepOutcome::new(step, status);
            aborted |= outcome.is_abort();
            events.on_event(ShipyardEvent::StepFinished {
                index,
                outcome: outcome.clone(),
            });
            report.outcomes.push(outcome);
        }

        report
    }

    fn run_step(&self, step: &Step) -> StepStatus {
        info!(step = step.name(), command = %step.command(), "running step");

        let status = match self.runner.run(step.command()) {
            Ok(status) if status.success() => {
                info!(step = step.name(), "step succeeded with exit code 0");
                return StepStatus::Succeeded;
            }
            Ok(status) => StepStatus::Failed { code: status.code },
            Err(e) => StepStatus::SpawnFailed {
                message: e.to_string(),
            },
        };

        let detail = match &status {
            StepStatus::Failed { code: Some(code) } => format!("exit code {}", code),
            StepStatus::Failed { code: None } => "terminated by signal".to_string(),
            StepStatus::SpawnFailed { message } => format!("could not start: {}", message),
            _ => String::new(),
        };
        let suffix = if step.is_fatal() { "" } else { ", continuing" };
        error!(
            step = step.name(),
            fatal = step.is_fatal(),
            "Error: {} failed with {}{}",
            step.name(),
            detail,
            suffix
        );
        status
    }
}
