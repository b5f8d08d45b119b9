//! Domain Ports
//!
//! Interfaces the infrastructure layer implements.

pub mod artifact_generator;
pub mod command_runner;
pub mod events;

pub use artifact_generator::ArtifactGenerator;
pub use command_runner::{CommandLine, CommandRunner, CommandStatus};
pub use events::{EventSink, NoopEventSink, ShipyardEvent};
#[cfg(test)]
pub(crate) use events::RecordingEventSink;
