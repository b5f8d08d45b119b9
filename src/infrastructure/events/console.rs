//! Console Event Sink
//!
//! Human-readable progress on stdout.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::entities::{StepOutcome, StepStatus};
use crate::domain::ports::{EventSink, ShipyardEvent};

struct Icons {
    check: &'static str,
    cross: &'static str,
    write: &'static str,
    skip: &'static str,
    run: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            write: "→",
            skip: "○",
            run: "▸",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            write: "->",
            skip: "[ ]",
            run: ">",
        }
    }
}

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    icons: Icons,
}

impl ConsoleEventSink {
    pub fn stdout(unicode: bool) -> Self {
        Self::with_writer(io::stdout(), unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, unicode: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            icons: if unicode {
                Icons::unicode()
            } else {
                Icons::ascii()
            },
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn finished(&self, outcome: &StepOutcome) -> String {
        let icons = &self.icons;
        match &outcome.status {
            StepStatus::Succeeded => format!("  {} {}", icons.check, outcome.name),
            StepStatus::Failed { code: Some(code) } => format!(
                "  {} {} (exit code {}){}",
                icons.cross,
                outcome.name,
                code,
                if outcome.fatal { "" } else { ", continuing" }
            ),
            StepStatus::Failed { code: None } => {
                format!("  {} {} (terminated by signal)", icons.cross, outcome.name)
            }
            StepStatus::SpawnFailed { message } => {
                format!("  {} {} ({})", icons.cross, outcome.name, message)
            }
            StepStatus::Skipped => format!("  {} {} (skipped)", icons.skip, outcome.name),
        }
    }
}

impl EventSink for ConsoleEventSink {
    fn on_event(&self, event: ShipyardEvent) {
        let icons = &self.icons;
        let text = match event {
            ShipyardEvent::Started {
                app_name,
                project_dir,
            } => format!("Scaffolding {} in {}", app_name, project_dir.display()),
            ShipyardEvent::FileWritten { path } => {
                format!("  {} {}", icons.write, path.display())
            }
            ShipyardEvent::FileCopied { path } => {
                format!("  {} {} (copied)", icons.write, path.display())
            }
            ShipyardEvent::Generated { file_count } => {
                format!("{} {} files in place", icons.check, file_count)
            }
            ShipyardEvent::StepStarted {
                index,
                total,
                command,
                ..
            } => format!("{} [{}/{}] {}", icons.run, index + 1, total, command),
            ShipyardEvent::StepFinished { outcome, .. } => self.finished(&outcome),
            ShipyardEvent::Completed { success: true } => {
                format!("{} Deploy Complete", icons.check)
            }
            ShipyardEvent::Completed { success: false } => {
                format!("{} Deploy Failed", icons.cross)
            }
        };
        self.line(text);
    }
}
