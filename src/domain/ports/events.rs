//! Event Port
//!
//! Observable progress for scaffold and deploy runs. Console output and the
//! `--json` NDJSON stream are both sinks.

use std::path::PathBuf;

use crate::domain::entities::StepOutcome;

/// Event emitted while scaffolding or deploying
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipyardEvent {
    /// Scaffolding started
    Started { app_name: String, project_dir: PathBuf },

    /// Baseline or generated file written
    FileWritten { path: PathBuf },

    /// Optional input file copied into the project
    FileCopied { path: PathBuf },

    /// All files are in place
    Generated { file_count: usize },

    /// External step about to run
    StepStarted {
        index: usize,
        total: usize,
        name: String,
        command: String,
    },

    /// External step finished (or was skipped)
    StepFinished { index: usize, outcome: StepOutcome },

    /// Run finished
    Completed { success: bool },
}

/// Receives events; implementations decide how to show them
pub trait EventSink {
    fn on_event(&self, event: ShipyardEvent);
}

/// Discards everything
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: ShipyardEvent) {}
}

/// Keeps every event for assertions on emission order
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingEventSink {
    events: std::cell::RefCell<Vec<ShipyardEvent>>,
}

#[cfg(test)]
impl RecordingEventSink {
    pub(crate) fn events(&self) -> Vec<ShipyardEvent> {
        self.events.borrow().clone()
    }
}

#[cfg(test)]
impl EventSink for RecordingEventSink {
    fn on_event(&self, event: ShipyardEvent) {
        self.events.borrow_mut().push(event);
    }
}
