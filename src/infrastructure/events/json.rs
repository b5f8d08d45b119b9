//! JSON Event Sink
//!
//! Outputs scaffold and deploy events as NDJSON for CI/automation consumption.

use crate::domain::entities::StepStatus;
use crate::domain::ports::{EventSink, ShipyardEvent};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl EventSink for JsonEventSink {
    fn on_event(&self, event: ShipyardEvent) {
        let json = match event {
            ShipyardEvent::Started {
                app_name,
                project_dir,
            } => serde_json::json!({
                "event": "start",
                "app_name": app_name,
                "project_dir": project_dir.display().to_string(),
            }),

            ShipyardEvent::FileWritten { path } => serde_json::json!({
                "event": "file_written",
                "path": path.display().to_string(),
            }),

            ShipyardEvent::FileCopied { path } => serde_json::json!({
                "event": "file_copied",
                "path": path.display().to_string(),
            }),

            ShipyardEvent::Generated { file_count } => serde_json::json!({
                "event": "generated",
                "file_count": file_count,
            }),

            ShipyardEvent::StepStarted {
                index,
                total,
                name,
                command,
            } => serde_json::json!({
                "event": "step_start",
                "index": index,
                "total": total,
                "name": name,
                "command": command,
            }),

            ShipyardEvent::StepFinished { index, outcome } => {
                let mut json = serde_json::json!({
                    "event": "step_finished",
                    "index": index,
                    "name": outcome.name,
                    "command": outcome.command,
                    "fatal": outcome.fatal,
                    "status": outcome.status.label(),
                });
                match outcome.status {
                    StepStatus::Failed { code } => {
                        json["exit_code"] = serde_json::json!(code);
                    }
                    StepStatus::SpawnFailed { message } => {
                        json["error"] = serde_json::json!(message);
                    }
                    StepStatus::Succeeded => {
                        json["exit_code"] = serde_json::json!(0);
                    }
                    StepStatus::Skipped => {}
                }
                json
            }

            ShipyardEvent::Completed { success } => serde_json::json!({
                "event": "complete",
                "status": if success { "success" } else { "failed" },
            }),
        };

        self.write_event(json);
    }
}
